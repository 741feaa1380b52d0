use leptos::prelude::*;
use thaw::*;

use crate::shared::config::ExportFormats;
use crate::shared::export::ExportFormat;
use crate::shared::icons::icon;
use crate::shared::table::{TableHandle, TableRow};

/// Action applied to the selected rows
pub struct BulkAction<T: 'static> {
    pub label: String,
    pub icon: &'static str,
    pub appearance: ButtonAppearance,
    pub on_click: Callback<Vec<T>>,
}

impl<T: 'static> Clone for BulkAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon,
            appearance: self.appearance.clone(),
            on_click: self.on_click,
        }
    }
}

impl<T: 'static> BulkAction<T> {
    pub fn new(label: impl Into<String>, icon: &'static str, on_click: Callback<Vec<T>>) -> Self {
        Self {
            label: label.into(),
            icon,
            appearance: ButtonAppearance::Secondary,
            on_click,
        }
    }

    pub fn primary(mut self) -> Self {
        self.appearance = ButtonAppearance::Primary;
        self
    }
}

/// Bar shown above the table while rows are selected.
///
/// Actions receive the selected rows of the loaded page. Ids selected on pages
/// that are no longer loaded cannot be resolved and are reported as a count.
#[component]
pub fn BulkActionBar<T: TableRow>(
    table: TableHandle<T>,
    actions: Vec<BulkAction<T>>,
    export_formats: ExportFormats,
    on_export_selected: Callback<ExportFormat>,
) -> impl IntoView {
    let selected = move || table.with(|c| c.selection_len());
    let unresolved = move || table.with(|c| c.unresolved_selection_count());
    let actions = StoredValue::new(actions);

    view! {
        <Show when=move || { selected() > 0 }>
            <div class="bulk-action-bar">
                <span class="bulk-action-bar__count">
                    {move || format!("{} selected", selected())}
                </span>
                <Show when=move || { unresolved() > 0 }>
                    <span class="bulk-action-bar__note">
                        {move || format!("({} on other pages, not included)", unresolved())}
                    </span>
                </Show>
                <Space>
                    {actions.get_value().into_iter().map(|action| {
                        let on_click = action.on_click;
                        view! {
                            <Button
                                appearance=action.appearance
                                on_click=move |_| on_click.run(table.selected_rows())
                            >
                                {icon(action.icon)}
                                {format!(" {}", action.label)}
                            </Button>
                        }
                    }).collect_view()}
                    <super::export_menu::ExportMenu
                        formats=export_formats
                        on_export=on_export_selected
                        label="Export selected"
                    />
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| table.clear_selection()>
                        {icon("x")}
                        " Clear selection"
                    </Button>
                </Space>
            </div>
        </Show>
    }
}
