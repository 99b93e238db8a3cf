//! Course editor form model.

#[cfg(test)]
#[path = "course_form_test.rs"]
mod course_form_test;

use crate::net::types::{Course, CourseDraft};

pub const NAME_MIN_CHARS: usize = 3;
pub const CREDIT_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Raw editor inputs; `credit` stays text until validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub credit: String,
    pub category: String,
    pub teacher: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseErrors {
    pub name: Option<&'static str>,
    pub credit: Option<&'static str>,
    pub category: Option<&'static str>,
    pub teacher: Option<&'static str>,
}

impl CourseErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.credit.is_none() && self.category.is_none() && self.teacher.is_none()
    }
}

impl CourseForm {
    /// Prefill from an existing course for editing.
    pub fn from_course(course: &Course) -> Self {
        Self::from(CourseDraft::from(course))
    }

    pub fn validate(&self) -> CourseErrors {
        let name = self.name.trim();
        CourseErrors {
            name: if name.is_empty() {
                Some("Course name is required")
            } else if name.chars().count() < NAME_MIN_CHARS {
                Some("Course name must be at least 3 characters")
            } else {
                None
            },
            credit: match parse_credit(&self.credit) {
                Ok(_) => None,
                Err(message) => Some(message),
            },
            category: self.category.trim().is_empty().then_some("Category is required"),
            teacher: self.teacher.trim().is_empty().then_some("Teacher is required"),
        }
    }

    /// Trimmed request body when every field is valid.
    ///
    /// # Errors
    ///
    /// Returns the validation messages if any rule fails.
    pub fn to_draft(&self) -> Result<CourseDraft, CourseErrors> {
        let errors = self.validate();
        let Ok(credit) = parse_credit(&self.credit) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CourseDraft {
            name: self.name.trim().to_owned(),
            credit,
            category: self.category.trim().to_owned(),
            teacher: self.teacher.trim().to_owned(),
        })
    }
}

impl From<CourseDraft> for CourseForm {
    fn from(draft: CourseDraft) -> Self {
        Self {
            name: draft.name,
            credit: draft.credit.to_string(),
            category: draft.category,
            teacher: draft.teacher,
        }
    }
}

fn parse_credit(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Credit is required");
    }
    let credit = raw.parse::<i64>().map_err(|_| "Credit must be a whole number")?;
    if CREDIT_RANGE.contains(&credit) {
        Ok(credit)
    } else {
        Err("Credit must be between 1 and 10")
    }
}
