//! Wire types shared between the dashboard and the REST API.

pub mod domain;
pub mod shared;
pub mod system;
