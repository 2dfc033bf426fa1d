//! Shared domain logic for the GrowIQ farm dashboard
//!
//! Everything in this crate is free of I/O so it can run on the server,
//! in tests, and in the browser via the WASM bindings.

pub mod bundled;
pub mod classify;
pub mod crops;
pub mod dates;
pub mod fallback;
pub mod models;
pub mod screen;
pub mod view;

pub use classify::*;
pub use models::*;
pub use view::*;
