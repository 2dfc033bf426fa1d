//! HTTP handlers

mod chat;
mod dashboard;
mod health;

pub use chat::*;
pub use dashboard::*;
pub use health::*;
