use leptos::prelude::*;

/// Stroke paths of the icons used across the dashboard (24x24 viewBox)
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "brokers" => &["M3 21h18", "M5 21V10l7-5 7 5v11", "M9 21v-6h6v6"],
        "keys" => &[
            "M21 2l-2 2",
            "M15.5 7.5l3 3L22 7l-3-3",
            "M11.4 11.6a5.5 5.5 0 1 1-7.8 7.8 5.5 5.5 0 0 1 7.8-7.8z",
            "M11.4 11.6L19 4",
        ],
        "trades" => &["M3 17l6-6 4 4 8-8", "M14 7h7v7"],
        "users" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z"],
        "delete" => &["M3 6h18", "M8 6V4h8v2", "M19 6l-1 14H6L5 6", "M10 11v6", "M14 11v6"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.5 9a9 9 0 0 1 14.9-3.4L23 10", "M1 14l4.6 4.4A9 9 0 0 0 20.5 15"],
        "search" => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.3-4.3"],
        "filter" => &["M22 3H2l8 9.5V19l4 2v-8.5z"],
        "columns" => &["M3 3h18v18H3z", "M9 3v18", "M15 3v18"],
        "download" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        "printer" => &["M6 9V2h12v7", "M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2", "M6 14h12v8H6z"],
        "alert" => &["M12 9v4", "M12 17h.01", "M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z"],
        "inbox" => &["M22 12h-6l-2 3h-4l-2-3H2", "M5.5 5.1L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.5-6.9A2 2 0 0 0 16.8 4H7.2a2 2 0 0 0-1.7 1.1z"],
        "lock" => &["M5 11h14v10H5z", "M8 11V7a4 4 0 0 1 8 0v4"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "logout" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z"],
    }
}

pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 16)
}

pub fn icon_sized(name: &str, size: u32) -> AnyView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths(name).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
    .into_any()
}
