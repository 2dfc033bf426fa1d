//! Field telemetry models

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One monitored plot as reported by the telemetry endpoint.
///
/// Dates are kept as the raw ISO strings the endpoint sends so that a
/// malformed date never rejects the whole snapshot; they are parsed lazily
/// by [`crate::dates`] at display time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldRecord {
    pub field_id: String,
    pub crop_name: String,
    pub planting_date: String,
    pub expected_harvest_date: String,
    /// Server supplied, never recomputed from `planting_date`
    pub days_since_planting: u32,
    /// Nominally 0-100; values above 100 are kept as-is and only clamped for display
    pub growth_progress_percent: f64,
    pub soil_moisture_percent: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    /// Ordered care tasks, index 0 is the current priority
    #[serde(default)]
    pub timeline_instructions: Vec<String>,
}

impl FieldRecord {
    /// The task the field should be worked on next, if any
    pub fn current_task(&self) -> Option<&str> {
        self.timeline_instructions.first().map(String::as_str)
    }
}

/// A complete, atomically replaced set of field telemetry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmSnapshot {
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
}

impl FarmSnapshot {
    /// Look up a field by its identifier
    pub fn field(&self, field_id: &str) -> Option<&FieldRecord> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// Check the snapshot invariants: `field_id` must be unique.
    ///
    /// Returns the first duplicated identifier on failure.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.field_id.as_str()) {
                return Err(field.field_id.clone());
            }
        }
        Ok(())
    }
}

/// What the farm data store exposes to the composing layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmDataState {
    pub snapshot: Option<FarmSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FarmDataState {
    /// Nothing fetched yet: loading, no snapshot, no error
    fn default() -> Self {
        Self {
            snapshot: None,
            loading: true,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str) -> FieldRecord {
        FieldRecord {
            field_id: id.to_string(),
            crop_name: "Wheat".to_string(),
            planting_date: "2025-06-27".to_string(),
            expected_harvest_date: "2025-10-25".to_string(),
            days_since_planting: 30,
            growth_progress_percent: 25.0,
            soil_moisture_percent: 82.0,
            temperature_celsius: 34.6,
            humidity_percent: 76.0,
            timeline_instructions: vec!["Prepare soil".to_string(), "Sow seeds".to_string()],
        }
    }

    #[test]
    fn test_deserialize_endpoint_body() {
        let json = r#"{
            "message": "Live field data retrieved successfully.",
            "timestamp": "2025-07-27T03:12:50.877218",
            "fields": [{
                "field_id": "F1",
                "crop_name": "Wheat",
                "planting_date": "2025-06-27",
                "expected_harvest_date": "2025-10-25",
                "days_since_planting": 30,
                "growth_progress_percent": 125,
                "soil_moisture_percent": 82,
                "temperature_celsius": 34.6,
                "humidity_percent": 76,
                "timeline_instructions": ["Prepare soil", "Sow seeds"]
            }]
        }"#;

        let snapshot: FarmSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.fields.len(), 1);
        let f = &snapshot.fields[0];
        // stored unclamped
        assert_eq!(f.growth_progress_percent, 125.0);
        assert_eq!(f.current_task(), Some("Prepare soil"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let snapshot = FarmSnapshot {
            message: "ok".to_string(),
            timestamp: "2025-07-27T03:12:50".to_string(),
            fields: vec![field("F1"), field("F2"), field("F1")],
        };
        assert_eq!(snapshot.validate(), Err("F1".to_string()));
    }

    #[test]
    fn test_field_lookup() {
        let snapshot = FarmSnapshot {
            message: "ok".to_string(),
            timestamp: "2025-07-27T03:12:50".to_string(),
            fields: vec![field("F1"), field("F2")],
        };
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.field("F2").map(|f| f.field_id.as_str()), Some("F2"));
        assert!(snapshot.field("F9").is_none());
    }

    #[test]
    fn test_current_task_empty_timeline() {
        let mut f = field("F1");
        f.timeline_instructions.clear();
        assert_eq!(f.current_task(), None);
    }
}
