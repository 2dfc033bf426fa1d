//! Domain models for the GrowIQ farm dashboard

mod chat;
mod field;

pub use chat::*;
pub use field::*;
