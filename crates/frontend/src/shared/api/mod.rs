//! API utilities for frontend-backend communication

mod error;
mod resource;

pub use error::ApiError;
pub use resource::{encode_query, RestResource};

/// Get the base URL for API requests
///
/// Built from the current window location and the configured API port,
/// e.g. "http://localhost:3000". Empty when there is no window.
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}
