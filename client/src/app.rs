//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_bar::NoticeBar;
use crate::components::require_session::RequireSession;
use crate::pages::{auth::AuthPage, course_editor::CourseEditorPage, home::HomePage, list::CourseListPage};
use crate::state::auth_form::AuthMode;
use crate::state::course_list::{CourseCacheState, CourseListState};
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::storage::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let notices = RwSignal::new(NoticeState::default());
    let courses = RwSignal::new(CourseListState::default());
    let course_cache = RwSignal::new(CourseCacheState::default());

    provide_context(session);
    provide_context(notices);
    provide_context(courses);
    provide_context(course_cache);

    // Effects only run in the browser, so SSR renders an unloaded session.
    Effect::new(move || session.set(Session::load(&BrowserStore)));

    view! {
        <Title text="Courseboard"/>

        <Router>
            <NavBar/>
            <NoticeBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("list") view=CourseListPage/>
                    <Route path=StaticSegment("add") view=ProtectedEditor/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=ProtectedEditor/>
                    <Route path=StaticSegment("login") view=|| view! { <AuthPage mode=AuthMode::Login/> }/>
                    <Route path=StaticSegment("register") view=|| view! { <AuthPage mode=AuthMode::Register/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProtectedEditor() -> impl IntoView {
    view! {
        <RequireSession>
            <CourseEditorPage/>
        </RequireSession>
    }
}
