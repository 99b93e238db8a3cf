//! Course list state: search, teacher filter, pagination, and confirmed delete.
//!
//! DESIGN
//! ======
//! Search is a two-stage machine: typing edits `draft_search` only, and
//! `commit_search` copies it into `active_search`. The rendered page is a pure
//! function of (`courses`, `active_search`, `teacher_filter`, `current_page`,
//! `PAGE_SIZE`), so there is no hidden view state to keep in sync.
//!
//! The collection is refetched when the course-cache revision moves (the
//! editor bumps it after writes), after a failed fetch, and after the page
//! unmounts (`mark_stale`).

#[cfg(test)]
#[path = "course_list_test.rs"]
mod course_list_test;

use crate::net::types::Course;

/// Courses shown per page.
pub const PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseListState {
    /// Full collection as last fetched, minus confirmed deletes.
    pub courses: Vec<Course>,
    /// Search input as typed; not yet applied.
    pub draft_search: String,
    /// Committed search term used for filtering.
    pub active_search: String,
    /// Exact teacher match; empty means all teachers.
    pub teacher_filter: String,
    /// 1-based page index.
    pub current_page: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Course-cache revision the collection was fetched for.
    pub loaded_revision: Option<u64>,
    /// Set when the collection must be fetched again regardless of revision.
    pub stale: bool,
    /// Course awaiting delete confirmation.
    pub pending_delete: Option<i64>,
}

impl Default for CourseListState {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            draft_search: String::new(),
            active_search: String::new(),
            teacher_filter: String::new(),
            current_page: 1,
            loading: false,
            error: None,
            loaded_revision: None,
            stale: false,
            pending_delete: None,
        }
    }
}

impl CourseListState {
    /// Whether a fetch for `revision` is still needed.
    pub fn needs_fetch(&self, revision: u64) -> bool {
        self.stale || self.loaded_revision != Some(revision)
    }

    /// Mark a fetch for `revision` as in flight.
    pub fn begin_loading(&mut self, revision: u64) {
        self.loaded_revision = Some(revision);
        self.stale = false;
        self.loading = true;
        self.error = None;
    }

    /// Replace the collection with freshly fetched courses.
    pub fn load(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.loading = false;
        self.error = None;
        self.clamp_page();
    }

    /// Record a fetch failure. The previous collection is kept and the next
    /// mount fetches again.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.stale = true;
        self.error = Some(message);
    }

    /// Force a fetch on the next mount.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// True until the first fetch has finished.
    pub fn is_pending(&self) -> bool {
        self.loading || self.loaded_revision.is_none()
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft_search = text;
    }

    /// Apply the draft search term and return to page 1.
    pub fn commit_search(&mut self) {
        self.active_search = self.draft_search.clone();
        self.current_page = 1;
    }

    /// Apply an exact-match teacher filter (empty = all) and return to page 1.
    pub fn set_teacher_filter(&mut self, teacher: String) {
        self.teacher_filter = teacher;
        self.current_page = 1;
    }

    /// Jump to page `page`, clamped to the available range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// Distinct teachers of the full collection in first-seen order.
    pub fn teachers(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for course in &self.courses {
            if !seen.contains(&course.teacher) {
                seen.push(course.teacher.clone());
            }
        }
        seen
    }

    /// Courses matching the active search and teacher filter, in collection order.
    pub fn filtered(&self) -> Vec<&Course> {
        let needle = self.active_search.to_lowercase();
        self.courses
            .iter()
            .filter(|course| matches_course(course, &needle, &self.teacher_filter))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// Courses on the current page.
    pub fn page_items(&self) -> Vec<Course> {
        let start = (self.current_page.max(1) - 1) * PAGE_SIZE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Open the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the confirmed delete target, if any.
    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    /// Drop exactly the course with `id` after a successful delete.
    pub fn remove_course(&mut self, id: i64) {
        self.courses.retain(|course| course.id != id);
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

/// `needle` must already be lowercased.
fn matches_course(course: &Course, needle: &str, teacher_filter: &str) -> bool {
    let name_matches = course.name.to_lowercase().contains(needle);
    let teacher_matches = teacher_filter.is_empty() || course.teacher == teacher_filter;
    name_matches && teacher_matches
}

/// Bumped after every successful create/update so list views refetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CourseCacheState {
    pub revision: u64,
}

impl CourseCacheState {
    pub fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
