//! Stateful services behind the GrowIQ dashboard

pub mod chat;
pub mod dashboard;
pub mod farm_data;

pub use chat::{ChatSession, PendingExchange};
pub use dashboard::{ChatTranscript, Dashboard, SharedDashboard};
pub use farm_data::{FarmDataStore, RefreshOutcome, RefreshTicket};
