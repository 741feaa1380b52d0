pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Debug builds log everything the table engine reports, release builds
/// only warnings and failures
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
