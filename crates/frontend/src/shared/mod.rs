pub mod api;
pub mod components;
pub mod config;
pub mod export;
pub mod forms;
pub mod icons;
pub mod modal;
pub mod resource_page;
pub mod table;
