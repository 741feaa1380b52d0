use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::Badge;
use crate::shared::table::{ColumnDef, TableRow};

/// One formatted cell; badge formats render as a coloured pill
#[component]
pub fn DataCell<T: TableRow>(column: ColumnDef, row: T) -> impl IntoView {
    let value = column.value(&row);
    let text = column.format.format(&value);
    let variant = column.format.badge_variant(&value);
    let style = format!("width: 100%; {}", column.align.style());

    let content = match variant {
        Some(variant) if !text.is_empty() => view! { <Badge variant=variant text=text /> }.into_any(),
        _ => view! { <span>{text}</span> }.into_any(),
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                <div style=style>{content}</div>
            </TableCellLayout>
        </TableCell>
    }
}
