use leptos::prelude::*;

use crate::shared::icons::icon;

/// Cursor pagination: first / previous / next, no page jumps.
///
/// Buttons are disabled while a fetch is pending.
#[component]
pub fn PaginationControls(
    /// 1-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    has_prev: Signal<bool>,
    #[prop(into)]
    has_next: Signal<bool>,
    #[prop(into)]
    pending: Signal<bool>,
    /// Reported by some endpoints only
    #[prop(into)]
    total_count: Signal<Option<u64>>,
    #[prop(into)]
    page_size: Signal<usize>,
    page_size_options: Vec<usize>,
    on_first: Callback<()>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_first.run(())
                disabled=move || pending.get() || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || pending.get() || !has_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || match total_count.get() {
                    Some(total) => format!("Page {} · {} total", current_page.get(), total),
                    None => format!("Page {}", current_page.get()),
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || pending.get() || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                disabled=move || pending.get()
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<usize>() {
                        Ok(size) => on_page_size_change.run(size),
                        Err(e) => log::warn!("Ignoring page size: {}", e),
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
