pub mod bulk_action_bar;
pub mod column_toggle;
pub mod export_menu;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
pub mod table_states;
pub mod ui;
