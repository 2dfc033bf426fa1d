//! Chat assistant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FarmSnapshot, FieldRecord};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of the append-only chat log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Time-ordered (UUID v7), so sorting by id follows append order
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// The `{role, content}` pair sent to the answering service
    pub fn turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// A message as it appears in the answering service request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Read-only summary of one field handed to the answering service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldContext {
    pub field_id: String,
    pub crop: String,
    pub days_planted: u32,
    pub progress: f64,
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub next_tasks: Vec<String>,
}

impl From<&FieldRecord> for FieldContext {
    fn from(field: &FieldRecord) -> Self {
        Self {
            field_id: field.field_id.clone(),
            crop: field.crop_name.clone(),
            days_planted: field.days_since_planting,
            progress: field.growth_progress_percent,
            soil_moisture: field.soil_moisture_percent,
            temperature: field.temperature_celsius,
            humidity: field.humidity_percent,
            next_tasks: field.timeline_instructions.clone(),
        }
    }
}

/// Farm context derived from the current snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmContext {
    pub fields: Vec<FieldContext>,
    pub timestamp: String,
}

impl From<&FarmSnapshot> for FarmContext {
    fn from(snapshot: &FarmSnapshot) -> Self {
        Self {
            fields: snapshot.fields.iter().map(FieldContext::from).collect(),
            timestamp: snapshot.timestamp.clone(),
        }
    }
}
