//! Threshold classification of field sensor readings
//!
//! Boundaries (exact):
//! - soil moisture: `< 40` Low, `40..60` Moderate, `>= 60` Good
//! - temperature: `< 15` Cool, `15..=33` Optimal, `> 33` High
//! - humidity: `> 80` High, otherwise Normal
//! - growth progress: `> 80` is near harvest
//!
//! Every numeric input is accepted, including negative and out-of-range values.

use serde::{Deserialize, Serialize};

pub const LOW_MOISTURE_BELOW: f64 = 40.0;
pub const GOOD_MOISTURE_FROM: f64 = 60.0;
pub const COOL_TEMPERATURE_BELOW: f64 = 15.0;
pub const HIGH_TEMPERATURE_ABOVE: f64 = 33.0;
pub const HIGH_HUMIDITY_ABOVE: f64 = 80.0;
pub const NEAR_HARVEST_ABOVE: f64 = 80.0;

/// A classified sensor metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SoilMoisture,
    Temperature,
    Humidity,
}

/// Discrete category of a reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Low,
    Moderate,
    Good,
    Cool,
    Optimal,
    High,
    Normal,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Low => write!(f, "Low"),
            Category::Moderate => write!(f, "Moderate"),
            Category::Good => write!(f, "Good"),
            Category::Cool => write!(f, "Cool"),
            Category::Optimal => write!(f, "Optimal"),
            Category::High => write!(f, "High"),
            Category::Normal => write!(f, "Normal"),
        }
    }
}

/// Classify a reading of the given metric
pub fn classify(metric: Metric, value: f64) -> Category {
    match metric {
        Metric::SoilMoisture => classify_soil_moisture(value),
        Metric::Temperature => classify_temperature(value),
        Metric::Humidity => classify_humidity(value),
    }
}

pub fn classify_soil_moisture(percent: f64) -> Category {
    if percent < LOW_MOISTURE_BELOW {
        Category::Low
    } else if percent < GOOD_MOISTURE_FROM {
        Category::Moderate
    } else {
        Category::Good
    }
}

pub fn classify_temperature(celsius: f64) -> Category {
    if celsius < COOL_TEMPERATURE_BELOW {
        Category::Cool
    } else if celsius > HIGH_TEMPERATURE_ABOVE {
        Category::High
    } else {
        Category::Optimal
    }
}

pub fn classify_humidity(percent: f64) -> Category {
    if percent > HIGH_HUMIDITY_ABOVE {
        Category::High
    } else {
        Category::Normal
    }
}

/// Whether a field's growth progress puts it close to harvest
pub fn is_near_harvest(progress_percent: f64) -> bool {
    progress_percent > NEAR_HARVEST_ABOVE
}

/// Whether a field should carry the low-moisture alert badge
pub fn is_low_moisture(percent: f64) -> bool {
    classify_soil_moisture(percent) == Category::Low
}

/// Human readable description shown next to a reading
pub fn label(metric: Metric, category: Category) -> &'static str {
    match (metric, category) {
        (Metric::SoilMoisture, Category::Low) => "Low - Needs irrigation",
        (Metric::SoilMoisture, Category::Moderate) => "Moderate - Monitor closely",
        (Metric::SoilMoisture, _) => "Good - Adequate moisture",
        (Metric::Temperature, Category::Cool) => "Cool temperature",
        (Metric::Temperature, Category::High) => "High temperature",
        (Metric::Temperature, _) => "Optimal temperature range",
        (Metric::Humidity, Category::High) => "High humidity",
        (Metric::Humidity, _) => "Normal humidity levels",
    }
}

/// Classify and describe in one step
pub fn describe(metric: Metric, value: f64) -> &'static str {
    label(metric, classify(metric, value))
}
