use super::*;

fn course(id: i64, name: &str, teacher: &str) -> Course {
    Course {
        id,
        name: name.to_owned(),
        credit: 3,
        category: "General".to_owned(),
        teacher: teacher.to_owned(),
    }
}

fn twelve_courses() -> Vec<Course> {
    (1..=12)
        .map(|i| course(i, &format!("Course {i}"), if i % 2 == 0 { "Minh" } else { "Linh" }))
        .collect()
}

fn loaded(courses: Vec<Course>) -> CourseListState {
    let mut state = CourseListState::default();
    state.begin_loading(0);
    state.load(courses);
    state
}

fn ids(items: &[Course]) -> Vec<i64> {
    items.iter().map(|c| c.id).collect()
}

// =============================================================
// Loading lifecycle
// =============================================================

#[test]
fn default_state_is_pending_on_page_one() {
    let state = CourseListState::default();
    assert!(state.is_pending());
    assert!(state.needs_fetch(0));
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages(), 0);
    assert!(state.page_items().is_empty());
}

#[test]
fn load_finishes_pending_fetch() {
    let state = loaded(twelve_courses());
    assert!(!state.is_pending());
    assert!(!state.needs_fetch(0));
    assert!(state.needs_fetch(1));
}

#[test]
fn fail_keeps_previous_collection() {
    let mut state = loaded(twelve_courses());
    state.begin_loading(1);
    state.fail("network error: offline".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("network error: offline"));
    assert_eq!(state.courses.len(), 12);
}

#[test]
fn failed_fetch_is_retried_on_next_mount() {
    let mut state = CourseListState::default();
    state.begin_loading(0);
    state.fail("network error: offline".to_owned());
    assert!(state.needs_fetch(0));

    state.begin_loading(0);
    assert!(!state.needs_fetch(0));
    state.load(twelve_courses());
    assert_eq!(state.error, None);
    assert!(!state.needs_fetch(0));
}

#[test]
fn unmount_marks_collection_stale() {
    let mut state = loaded(twelve_courses());
    state.mark_stale();
    assert!(state.needs_fetch(0));
    assert_eq!(state.courses.len(), 12);

    state.begin_loading(0);
    state.load(twelve_courses());
    assert!(!state.needs_fetch(0));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn twelve_courses_make_three_pages() {
    let mut state = loaded(twelve_courses());
    assert_eq!(state.total_pages(), 3);
    assert_eq!(ids(&state.page_items()), vec![1, 2, 3, 4, 5]);
    state.go_to_page(3);
    assert_eq!(ids(&state.page_items()), vec![11, 12]);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    let state = loaded(twelve_courses().into_iter().take(10).collect());
    assert_eq!(state.total_pages(), 2);
}

#[test]
fn go_to_page_clamps_out_of_range() {
    let mut state = loaded(twelve_courses());
    state.go_to_page(0);
    assert_eq!(state.current_page, 1);
    state.go_to_page(9);
    assert_eq!(state.current_page, 3);
}

// =============================================================
// Search and teacher filter
// =============================================================

#[test]
fn draft_does_not_filter_until_committed() {
    let mut state = loaded(twelve_courses());
    state.set_draft("course 1".to_owned());
    assert_eq!(state.filtered().len(), 12);
    state.commit_search();
    assert_eq!(state.active_search, "course 1");
    // "Course 1", "Course 10", "Course 11", "Course 12"
    assert_eq!(ids(&state.page_items()), vec![1, 10, 11, 12]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut state = loaded(vec![
        course(1, "Advanced RUST", "Linh"),
        course(2, "Intro to Go", "Linh"),
        course(3, "rustacean lab", "Minh"),
    ]);
    state.set_draft("Rust".to_owned());
    state.commit_search();
    assert_eq!(ids(&state.page_items()), vec![1, 3]);
}

#[test]
fn teacher_filter_is_exact_match() {
    let mut state = loaded(vec![
        course(1, "A", "Linh"),
        course(2, "B", "linh"),
        course(3, "C", "Linh Tran"),
    ]);
    state.set_teacher_filter("Linh".to_owned());
    assert_eq!(ids(&state.page_items()), vec![1]);
    state.set_teacher_filter(String::new());
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn search_and_teacher_filter_intersect() {
    let mut state = loaded(twelve_courses());
    state.set_draft("course 1".to_owned());
    state.commit_search();
    state.set_teacher_filter("Minh".to_owned());
    assert_eq!(ids(&state.page_items()), vec![10, 12]);
}

#[test]
fn commit_search_resets_to_first_page() {
    let mut state = loaded(twelve_courses());
    state.go_to_page(3);
    state.set_draft(String::new());
    state.commit_search();
    assert_eq!(state.current_page, 1);
}

#[test]
fn teacher_filter_resets_to_first_page() {
    let mut state = loaded(twelve_courses());
    state.go_to_page(2);
    state.set_teacher_filter("Linh".to_owned());
    assert_eq!(state.current_page, 1);
}

#[test]
fn teachers_are_distinct_in_first_seen_order() {
    let state = loaded(vec![
        course(1, "A", "Minh"),
        course(2, "B", "Linh"),
        course(3, "C", "Minh"),
        course(4, "D", "Hoa"),
    ]);
    assert_eq!(state.teachers(), vec!["Minh", "Linh", "Hoa"]);
}

#[test]
fn teachers_ignore_active_filters() {
    let mut state = loaded(twelve_courses());
    state.set_teacher_filter("Minh".to_owned());
    assert_eq!(state.teachers(), vec!["Linh", "Minh"]);
}

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn cancelled_delete_leaves_collection_untouched() {
    let mut state = loaded(twelve_courses());
    state.request_delete(7);
    state.cancel_delete();
    assert_eq!(state.take_pending_delete(), None);
    assert_eq!(state.courses.len(), 12);
}

#[test]
fn confirmed_delete_removes_exactly_that_id() {
    let mut state = loaded(twelve_courses());
    state.request_delete(7);
    let target = state.take_pending_delete();
    assert_eq!(target, Some(7));
    assert_eq!(state.pending_delete, None);
    state.remove_course(7);
    assert_eq!(state.courses.len(), 11);
    assert!(state.courses.iter().all(|c| c.id != 7));
}

#[test]
fn removing_last_item_of_last_page_steps_back() {
    let mut state = loaded(twelve_courses().into_iter().take(11).collect());
    state.go_to_page(3);
    state.remove_course(11);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_page, 2);
}

// =============================================================
// CourseCacheState
// =============================================================

#[test]
fn invalidate_bumps_revision() {
    let mut cache = CourseCacheState::default();
    cache.invalidate();
    cache.invalidate();
    assert_eq!(cache.revision, 2);
}

#[test]
fn invalidated_cache_requires_refetch_after_load() {
    let mut cache = CourseCacheState::default();
    let mut state = CourseListState::default();
    state.begin_loading(cache.revision);
    state.load(twelve_courses());
    assert!(!state.needs_fetch(cache.revision));

    cache.invalidate();
    assert!(state.needs_fetch(cache.revision));

    state.begin_loading(cache.revision);
    state.load(twelve_courses());
    assert!(!state.needs_fetch(cache.revision));
}
