//! Course list page: search, teacher filter, pagination, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is fetched on every mount and again whenever the
//! course-cache revision moves. It lives in the app-level `CourseListState`,
//! so returning to the page keeps the committed search, filter, and page
//! while the refetch runs. All filtering happens client side.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::state::course_list::{CourseCacheState, CourseListState};
use crate::state::notice::NoticeState;

#[component]
pub fn CourseListPage() -> impl IntoView {
    let list = expect_context::<RwSignal<CourseListState>>();
    let cache = expect_context::<RwSignal<CourseCacheState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let revision = cache.get().revision;
        if !list.with_untracked(|s| s.needs_fetch(revision)) {
            return;
        }
        list.update(|s| s.begin_loading(revision));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_courses().await {
                Ok(courses) => list.update(|s| s.load(courses)),
                Err(e) => {
                    leptos::logging::error!("failed to load courses: {e}");
                    list.update(|s| s.fail(e.to_string()));
                }
            }
        });
    });

    // Next visit refetches even when no editor write bumped the revision.
    on_cleanup(move || {
        list.try_update(CourseListState::mark_stale);
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = list.try_update(CourseListState::take_pending_delete).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_course(id).await {
                Ok(()) => {
                    list.update(|s| s.remove_course(id));
                    notices.update(|n| n.push_success("Course deleted"));
                }
                Err(e) => {
                    leptos::logging::warn!("delete course {id} failed: {e}");
                    notices.update(|n| n.push_error("Delete failed"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, notices);
        }
    });
    let on_cancel_delete = Callback::new(move |()| list.update(CourseListState::cancel_delete));
    let on_select_page = Callback::new(move |page: usize| list.update(|s| s.go_to_page(page)));

    let total_pages = Signal::derive(move || list.with(CourseListState::total_pages));
    let current_page = Signal::derive(move || list.with(|s| s.current_page));

    view! {
        <section class="list-page">
            <h1>"Courses"</h1>

            <div class="list-page__filters">
                <form
                    class="list-page__search"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        list.update(CourseListState::commit_search);
                    }
                >
                    <input
                        type="text"
                        placeholder="Search by name..."
                        prop:value=move || list.with(|s| s.draft_search.clone())
                        on:input=move |ev| list.update(|s| s.set_draft(event_target_value(&ev)))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Search"
                    </button>
                </form>

                <select
                    class="list-page__teacher"
                    prop:value=move || list.with(|s| s.teacher_filter.clone())
                    on:change=move |ev| list.update(|s| s.set_teacher_filter(event_target_value(&ev)))
                >
                    <option value="">"All teachers"</option>
                    {move || {
                        list.with(CourseListState::teachers)
                            .into_iter()
                            .map(|teacher| {
                                let label = teacher.clone();
                                view! { <option value=teacher>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <Show when=move || list.with(|s| s.error.is_some())>
                <p class="list-page__error">
                    {move || list.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show
                when=move || !list.with(CourseListState::is_pending)
                fallback=|| view! { <p>"Loading courses..."</p> }
            >
                <table class="course-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Credit"</th>
                            <th>"Category"</th>
                            <th>"Teacher"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = list.with(CourseListState::page_items);
                            if items.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="course-table__empty">
                                            "No matching courses"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .map(|course| {
                                    let id = course.id;
                                    view! {
                                        <tr>
                                            <td>{course.id}</td>
                                            <td>{course.name}</td>
                                            <td>{course.credit}</td>
                                            <td>{course.category}</td>
                                            <td>{course.teacher}</td>
                                            <td class="course-table__actions">
                                                <A href=format!("/edit/{id}")>"Edit"</A>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| list.update(|s| s.request_delete(id))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </Show>

            <Pagination total=total_pages current=current_page on_select=on_select_page/>

            <Show when=move || list.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete course"
                    message="Are you sure you want to delete this course?"
                    confirm_label="Delete"
                    on_cancel=on_cancel_delete
                    on_confirm=on_confirm_delete
                />
            </Show>
        </section>
    }
}
