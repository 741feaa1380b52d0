//! Server-driven table engine.
//!
//! Pure state lives in [`controller`] and the small modules it is built from;
//! [`hook`] binds it to Leptos signals and runs the fetches.

pub mod column;
pub mod controller;
pub mod cursor;
pub mod filters;
pub mod format;
pub mod hook;
pub mod search;
pub mod selection;
pub mod visibility;

pub use column::{Align, ColumnDef, TableRow};
pub use controller::{FetchOutcome, FetchTicket, TableController, TableSettings, TableStatus};
pub use filters::{FilterBadge, FilterDef, FilterKind, FilterOption, ALL_VALUE};
pub use format::{BadgeStyle, BadgeVariant, CellFormat};
pub use hook::{use_table_state, FetchFn, FetchFuture, TableHandle};
pub use selection::PageSelection;
