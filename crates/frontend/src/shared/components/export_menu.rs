use leptos::prelude::*;
use thaw::*;

use crate::shared::config::ExportFormats;
use crate::shared::export::ExportFormat;
use crate::shared::icons::icon;

/// Toolbar dropdown offering the enabled export formats.
/// Renders nothing when every format is disabled.
#[component]
pub fn ExportMenu(
    formats: ExportFormats,
    on_export: Callback<ExportFormat>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Button caption, "Export" by default
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    if !formats.any_enabled() {
        return view! { <></> }.into_any();
    }

    let is_open = RwSignal::new(false);
    let label = label.unwrap_or_else(|| "Export".to_string());
    let enabled: Vec<ExportFormat> = ExportFormat::ALL
        .into_iter()
        .filter(|f| f.is_enabled(&formats))
        .collect();

    view! {
        <div class="export-menu">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| is_open.update(|open| *open = !*open)
                disabled=Signal::derive(move || disabled.get().unwrap_or(false))
            >
                {icon("download")}
                {format!(" {}", label)}
            </Button>
            <Show when=move || is_open.get()>
                <div class="export-menu__dropdown" on:mouseleave=move |_| is_open.set(false)>
                    {enabled.iter().copied().map(|format| {
                        let glyph = if format == ExportFormat::Print { "printer" } else { "download" };
                        view! {
                            <button
                                class="export-menu__item"
                                on:click=move |_| {
                                    is_open.set(false);
                                    on_export.run(format);
                                }
                            >
                                {icon(glyph)}
                                <span>{format.label()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
