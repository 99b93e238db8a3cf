//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome to Courseboard"</h1>
            <p>"Browse the course catalogue or sign in to add and edit courses."</p>
            <A href="/list">"View courses"</A>
        </section>
    }
}
