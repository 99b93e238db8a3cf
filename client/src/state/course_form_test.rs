use super::*;

fn valid_form() -> CourseForm {
    CourseForm {
        name: "  Rust Basics ".to_owned(),
        credit: "3".to_owned(),
        category: "Systems".to_owned(),
        teacher: "Linh".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_draft() {
    assert_eq!(
        valid_form().to_draft(),
        Ok(CourseDraft {
            name: "Rust Basics".to_owned(),
            credit: 3,
            category: "Systems".to_owned(),
            teacher: "Linh".to_owned(),
        })
    );
}

#[test]
fn blank_form_reports_every_field() {
    let errors = CourseForm::default().validate();
    assert_eq!(errors.name, Some("Course name is required"));
    assert_eq!(errors.credit, Some("Credit is required"));
    assert_eq!(errors.category, Some("Category is required"));
    assert_eq!(errors.teacher, Some("Teacher is required"));
}

#[test]
fn credit_must_be_integer_in_range() {
    let mut form = valid_form();
    form.credit = "2.5".to_owned();
    assert_eq!(form.validate().credit, Some("Credit must be a whole number"));
    form.credit = "0".to_owned();
    assert_eq!(form.validate().credit, Some("Credit must be between 1 and 10"));
    form.credit = "11".to_owned();
    assert_eq!(form.validate().credit, Some("Credit must be between 1 and 10"));
    form.credit = " 10 ".to_owned();
    assert_eq!(form.validate().credit, None);
}

#[test]
fn short_name_is_rejected() {
    let mut form = valid_form();
    form.name = "Go".to_owned();
    let errors = form.to_draft().unwrap_err();
    assert_eq!(errors.name, Some("Course name must be at least 3 characters"));
    assert_eq!(errors.credit, None);
}

#[test]
fn from_course_prefills_all_fields() {
    let course = Course {
        id: 4,
        name: "Databases".to_owned(),
        credit: 4,
        category: "Data".to_owned(),
        teacher: "Hoa".to_owned(),
    };
    let form = CourseForm::from_course(&course);
    assert_eq!(form.credit, "4");
    assert_eq!(form.to_draft(), Ok(CourseDraft::from(&course)));
}

#[test]
fn draft_converts_back_into_form_text() {
    let draft = CourseDraft {
        name: "Networks".to_owned(),
        credit: 10,
        category: "Systems".to_owned(),
        teacher: "Linh".to_owned(),
    };
    let form = CourseForm::from(draft.clone());
    assert_eq!(form.credit, "10");
    assert_eq!(form.to_draft(), Ok(draft));
}
