//! Public API module.
//!
//! The backend operation table, the records it returns and the registry
//! that picks a backend for a device.

pub mod backend;
pub mod models;
pub mod registry;
