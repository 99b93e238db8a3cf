//! Page-number buttons for the course list.

use leptos::prelude::*;

/// One button per page `1..=total`; hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pages">
                {move || {
                    (1..=total.get())
                        .map(|page| {
                            view! {
                                <button
                                    class=move || page_button_class(current.get() == page)
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </Show>
    }
}

fn page_button_class(active: bool) -> &'static str {
    if active { "pagination__page pagination__page--active" } else { "pagination__page" }
}
