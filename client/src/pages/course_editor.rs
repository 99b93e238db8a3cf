//! Add/edit course page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/add` creates and `/edit/{id}` loads then replaces a course. Both routes
//! sit behind `RequireSession`. A successful save bumps the course-cache
//! revision so the list page refetches on its next visit.

#[cfg(test)]
#[path = "course_editor_test.rs"]
mod course_editor_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::course_form::{CourseErrors, CourseForm};
use crate::state::course_list::CourseCacheState;
use crate::state::notice::NoticeState;

/// What the editor route is working on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTarget {
    Create,
    Edit(i64),
    /// `/edit/{id}` with an id that is not an integer.
    Invalid,
}

impl EditorTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add course",
            Self::Edit(_) | Self::Invalid => "Edit course",
        }
    }
}

pub fn editor_target(id_param: Option<&str>) -> EditorTarget {
    match id_param {
        None => EditorTarget::Create,
        Some(raw) => raw.trim().parse::<i64>().map_or(EditorTarget::Invalid, EditorTarget::Edit),
    }
}

#[component]
pub fn CourseEditorPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<CourseCacheState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let target = Memo::new(move |_| editor_target(params.with(|p| p.get("id")).as_deref()));
    let form = RwSignal::new(CourseForm::default());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = redirect_to.get() {
            redirect_to.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    Effect::new(move || match target.get() {
        EditorTarget::Create => form.set(CourseForm::default()),
        EditorTarget::Invalid => notices.update(|n| n.push_error("Course not found")),
        EditorTarget::Edit(id) => {
            busy.set(true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_course(id).await {
                    Ok(course) => form.set(CourseForm::from_course(&course)),
                    Err(e) => {
                        leptos::logging::error!("failed to load course {id}: {e}");
                        notices.update(|n| n.push_error(e.user_message()));
                    }
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = id;
            }
        }
    });

    let errors = Memo::new(move |_| {
        if submitted.get() { form.with(CourseForm::validate) } else { CourseErrors::default() }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submitted.set(true);
        let Ok(draft) = form.with_untracked(CourseForm::to_draft) else {
            return;
        };
        let target = target.get_untracked();
        if target == EditorTarget::Invalid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                EditorTarget::Edit(id) => crate::net::api::update_course(id, &draft).await,
                EditorTarget::Create | EditorTarget::Invalid => crate::net::api::create_course(&draft).await,
            };
            match result {
                Ok(course) => {
                    cache.update(CourseCacheState::invalidate);
                    notices.update(|n| n.push_success(saved_message(target, &course.name)));
                    redirect_to.set(Some("/list"));
                }
                Err(e) => {
                    leptos::logging::warn!("saving course failed: {e}");
                    notices.update(|n| n.push_error(e.user_message()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, cache);
        }
    };

    view! {
        <section class="editor-page">
            <h1>{move || target.get().title()}</h1>
            <form class="editor-form" on:submit=on_submit>
                <EditorField
                    label="Name"
                    input_type="text"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    error=Signal::derive(move || errors.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <EditorField
                    label="Credit"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.credit.clone()))
                    error=Signal::derive(move || errors.get().credit)
                    on_input=Callback::new(move |v: String| form.update(|f| f.credit = v))
                />
                <EditorField
                    label="Category"
                    input_type="text"
                    value=Signal::derive(move || form.with(|f| f.category.clone()))
                    error=Signal::derive(move || errors.get().category)
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
                />
                <EditorField
                    label="Teacher"
                    input_type="text"
                    value=Signal::derive(move || form.with(|f| f.teacher.clone()))
                    error=Signal::derive(move || errors.get().teacher)
                    on_input=Callback::new(move |v: String| form.update(|f| f.teacher = v))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || target.get() == EditorTarget::Invalid
                >
                    "Save"
                </button>
            </form>
        </section>
    }
}

#[component]
fn EditorField(
    label: &'static str,
    input_type: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="editor-form__field">
            <span>{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="editor-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn saved_message(target: EditorTarget, name: &str) -> String {
    match target {
        EditorTarget::Edit(_) => format!("Updated \"{name}\""),
        EditorTarget::Create | EditorTarget::Invalid => format!("Added \"{name}\""),
    }
}
