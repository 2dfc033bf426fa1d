//! Canned answers for the chat assistant when the answering service is unavailable
//!
//! Queries are matched case-insensitively against an ordered topic table;
//! the first topic with a matching keyword answers. Answers that list fields
//! render each one as `"{crop} ({field_id}): {value}{unit}"`.

use serde::{Deserialize, Serialize};

use crate::classify::{LOW_MOISTURE_BELOW, NEAR_HARVEST_ABOVE};
use crate::models::{FarmSnapshot, FieldRecord};

/// High temperature threshold used by the canned answers.
///
/// Deliberately one degree lower than the classifier's `> 33` boundary; the
/// two are kept apart until the product decides on a single value.
pub const HOT_FIELD_ABOVE: f64 = 32.0;

pub const NO_DATA_RESPONSE: &str = "Field data is not available yet, so I can't check that right now. \
Please try again once the farm data has loaded.";

pub const PEST_ADVISORY: &str = "To keep pests and diseases in check, inspect leaves and stems \
regularly and remove affected plants early. Rotate crops between seasons and only apply approved \
treatments when an outbreak is confirmed. Fields with high humidity are more prone to fungal disease.";

pub const GENERIC_PROMPT: &str = "I can help with soil moisture, temperature, harvest readiness, \
and pest or disease questions about your fields. Try asking \"Which fields need water?\"";

/// Topic a free-text query was classified into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryTopic {
    Moisture,
    Temperature,
    Harvest,
    Pests,
    General,
}

type Responder = fn(Option<&FarmSnapshot>) -> String;

struct TopicRule {
    topic: QueryTopic,
    keywords: &'static [&'static str],
    respond: Responder,
}

impl TopicRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }
}

/// Evaluated in order, first match wins
const TOPIC_RULES: [TopicRule; 4] = [
    TopicRule {
        topic: QueryTopic::Moisture,
        keywords: &["moisture", "water"],
        respond: moisture_response,
    },
    TopicRule {
        topic: QueryTopic::Temperature,
        keywords: &["temperature", "temp"],
        respond: temperature_response,
    },
    TopicRule {
        topic: QueryTopic::Harvest,
        keywords: &["harvest", "ready"],
        respond: harvest_response,
    },
    TopicRule {
        topic: QueryTopic::Pests,
        keywords: &["pest", "disease"],
        respond: pest_response,
    },
];

/// Classify a query into the topic that would answer it
pub fn classify_query(query: &str) -> QueryTopic {
    let query = query.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&query))
        .map(|rule| rule.topic)
        .unwrap_or(QueryTopic::General)
}

/// Answer a query from the snapshot alone
pub fn respond(query: &str, snapshot: Option<&FarmSnapshot>) -> String {
    let query = query.to_lowercase();
    match TOPIC_RULES.iter().find(|rule| rule.matches(&query)) {
        Some(rule) => (rule.respond)(snapshot),
        None => GENERIC_PROMPT.to_string(),
    }
}

fn moisture_response(snapshot: Option<&FarmSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return NO_DATA_RESPONSE.to_string();
    };
    let dry = matching_fields(snapshot, |f| f.soil_moisture_percent < LOW_MOISTURE_BELOW);
    if dry.is_empty() {
        return format!(
            "All fields have adequate soil moisture right now ({}% or above). \
             Keep following the regular irrigation schedule.",
            LOW_MOISTURE_BELOW
        );
    }
    format!(
        "{} low soil moisture (below {}%): {}. Consider scheduling irrigation soon.",
        count_lead(dry.len(), "has", "have"),
        LOW_MOISTURE_BELOW,
        list_fields(&dry, |f| f.soil_moisture_percent, "%")
    )
}

fn temperature_response(snapshot: Option<&FarmSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return NO_DATA_RESPONSE.to_string();
    };
    let hot = matching_fields(snapshot, |f| f.temperature_celsius > HOT_FIELD_ABOVE);
    if hot.is_empty() {
        return format!(
            "All fields are within a comfortable temperature range ({}°C or below).",
            HOT_FIELD_ABOVE
        );
    }
    format!(
        "{} experiencing high temperatures (above {}°C): {}. Watch for heat stress and consider extra irrigation.",
        count_lead(hot.len(), "is", "are"),
        HOT_FIELD_ABOVE,
        list_fields(&hot, |f| f.temperature_celsius, "°C")
    )
}

fn harvest_response(snapshot: Option<&FarmSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return NO_DATA_RESPONSE.to_string();
    };
    let ready = matching_fields(snapshot, |f| f.growth_progress_percent > NEAR_HARVEST_ABOVE);
    if ready.is_empty() {
        return format!(
            "No fields are close to harvest yet (none above {}% growth). \
             Open a field's details to see its expected harvest date.",
            NEAR_HARVEST_ABOVE
        );
    }
    format!(
        "{} nearly ready for harvest (above {}% growth): {}. Plan labour and storage ahead of time.",
        count_lead(ready.len(), "is", "are"),
        NEAR_HARVEST_ABOVE,
        list_fields(&ready, |f| f.growth_progress_percent, "%")
    )
}

fn pest_response(_snapshot: Option<&FarmSnapshot>) -> String {
    PEST_ADVISORY.to_string()
}

fn matching_fields(snapshot: &FarmSnapshot, pred: impl Fn(&FieldRecord) -> bool) -> Vec<&FieldRecord> {
    snapshot.fields.iter().filter(|f| pred(f)).collect()
}

/// `"1 field has"` / `"3 fields have"`
fn count_lead(count: usize, singular_verb: &str, plural_verb: &str) -> String {
    if count == 1 {
        format!("1 field {}", singular_verb)
    } else {
        format!("{} fields {}", count, plural_verb)
    }
}

fn list_fields(fields: &[&FieldRecord], value: impl Fn(&FieldRecord) -> f64, unit: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({}): {}{}", f.crop_name, f.field_id, value(f), unit))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundled::default_snapshot;

    fn snapshot_with(fields: Vec<FieldRecord>) -> FarmSnapshot {
        FarmSnapshot {
            message: "ok".to_string(),
            timestamp: "2025-07-27T03:12:50".to_string(),
            fields,
        }
    }

    fn field(id: &str, crop: &str, moisture: f64, temp: f64, progress: f64) -> FieldRecord {
        FieldRecord {
            field_id: id.to_string(),
            crop_name: crop.to_string(),
            planting_date: "2025-06-27".to_string(),
            expected_harvest_date: "2025-10-25".to_string(),
            days_since_planting: 30,
            growth_progress_percent: progress,
            soil_moisture_percent: moisture,
            temperature_celsius: temp,
            humidity_percent: 60.0,
            timeline_instructions: vec![],
        }
    }

    #[test]
    fn test_single_dry_field() {
        let snapshot = snapshot_with(vec![field("F1", "Wheat", 30.0, 20.0, 10.0)]);
        let answer = respond("water levels?", Some(&snapshot));
        assert!(answer.contains("Wheat (F1): 30%"), "{}", answer);
        assert!(answer.starts_with("1 field has"));
    }

    #[test]
    fn test_plural_lead_in() {
        let snapshot = snapshot_with(vec![
            field("F1", "Wheat", 30.0, 20.0, 10.0),
            field("F2", "Rice", 12.5, 20.0, 10.0),
            field("F3", "Maize", 70.0, 20.0, 10.0),
        ]);
        let answer = respond("MOISTURE report", Some(&snapshot));
        assert!(answer.starts_with("2 fields have"));
        assert!(answer.contains("Wheat (F1): 30%, Rice (F2): 12.5%"));
        assert!(!answer.contains("Maize"));
    }

    #[test]
    fn test_moisture_reassurance_when_none_dry() {
        let snapshot = snapshot_with(vec![field("F1", "Wheat", 40.0, 20.0, 10.0)]);
        let answer = respond("how is the water?", Some(&snapshot));
        assert!(answer.starts_with("All fields have adequate soil moisture"));
    }

    #[test]
    fn test_moisture_wins_over_harvest() {
        assert_eq!(
            classify_query("is the moisture ok before harvest"),
            QueryTopic::Moisture
        );
        let snapshot = snapshot_with(vec![field("F1", "Wheat", 30.0, 20.0, 95.0)]);
        let answer = respond("is the moisture ok before harvest", Some(&snapshot));
        assert!(answer.contains("low soil moisture"));
        assert!(!answer.contains("ready for harvest"));
    }

    #[test]
    fn test_temperature_uses_32_degree_threshold() {
        let snapshot = snapshot_with(vec![
            field("F1", "Wheat", 50.0, 32.5, 10.0),
            field("F2", "Rice", 50.0, 32.0, 10.0),
        ]);
        let answer = respond("Temp check", Some(&snapshot));
        assert!(answer.starts_with("1 field is experiencing"));
        assert!(answer.contains("Wheat (F1): 32.5°C"));
        assert!(!answer.contains("Rice"));
    }

    #[test]
    fn test_harvest_ready_fields() {
        let snapshot = snapshot_with(vec![
            field("F1", "Wheat", 50.0, 20.0, 85.0),
            field("F2", "Rice", 50.0, 20.0, 80.0),
            field("F3", "Maize", 50.0, 20.0, 110.0),
        ]);
        let answer = respond("what is ready?", Some(&snapshot));
        assert!(answer.starts_with("2 fields are nearly ready"));
        assert!(answer.contains("Wheat (F1): 85%, Maize (F3): 110%"));
    }

    #[test]
    fn test_pest_advisory_ignores_snapshot() {
        assert_eq!(respond("Any disease risk?", None), PEST_ADVISORY);
        let snapshot = default_snapshot();
        assert_eq!(respond("pests", Some(&snapshot)), PEST_ADVISORY);
    }

    #[test]
    fn test_generic_prompt() {
        assert_eq!(respond("hello there", None), GENERIC_PROMPT);
        assert_eq!(classify_query(""), QueryTopic::General);
    }

    #[test]
    fn test_no_snapshot_for_listing_topics() {
        assert_eq!(respond("water", None), NO_DATA_RESPONSE);
        assert_eq!(respond("temperature", None), NO_DATA_RESPONSE);
        assert_eq!(respond("harvest", None), NO_DATA_RESPONSE);
    }

    #[test]
    fn test_bundled_snapshot_answers() {
        let snapshot = default_snapshot();
        let moisture = respond("which fields need water", Some(&snapshot));
        assert!(moisture.contains("Soybean (F5): 34%"));

        let temp = respond("temperature?", Some(&snapshot));
        assert!(temp.starts_with("3 fields are experiencing"));
        assert!(temp.contains("Wheat (F1): 34.6°C, Maize (F3): 33.7°C, Peas (F12): 34.5°C"));
    }
}
