use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::{icon, icon_sized};

/// Placeholder while the first page loads
#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="table-state table-state--loading">
            <Spinner />
            <span>"Loading..."</span>
        </div>
    }
}

/// Shown when a load succeeded with no rows
#[component]
pub fn EmptyState(
    /// Whether a search or filter narrowed the result
    #[prop(into)]
    narrowed: Signal<bool>,
    on_clear_filters: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="table-state table-state--empty">
            {icon_sized("inbox", 32)}
            <Show
                when=move || narrowed.get()
                fallback=|| view! { <p>"No records yet"</p> }
            >
                <p>"No records match the current search and filters"</p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear_filters.run(())>
                    "Clear filters"
                </Button>
            </Show>
        </div>
    }
}

/// Full-size error when nothing could be loaded
#[component]
pub fn ErrorState(#[prop(into)] message: Signal<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="table-state table-state--error">
            {icon_sized("alert", 32)}
            <p>{move || message.get()}</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                {icon("refresh")}
                " Retry"
            </Button>
        </div>
    }
}

/// Inline error above rows that stay visible after a failed reload
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|err| {
            view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span>{err}</span>
                    {on_retry.map(|retry| view! {
                        <button class="alert__action" on:click=move |_| retry.run(())>"Retry"</button>
                    })}
                </div>
            }
        })
    }
}
