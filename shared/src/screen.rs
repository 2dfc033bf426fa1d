//! Screen composition from store state and navigation state
//!
//! `compose` is total: every combination of store flags, snapshot and view
//! state maps to exactly one screen.
//!
//! | loading | error | snapshot | screen |
//! |---|---|---|---|
//! | true  | any  | any  | Loading |
//! | false | some | none | Error (with retry) |
//! | false | any  | any  | Dashboard or FieldDetail per view state |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{self, Category, Metric};
use crate::crops::crop_emoji;
use crate::dates;
use crate::models::{FarmDataState, FarmSnapshot, FieldRecord};
use crate::view::ViewState;

pub const DASHBOARD_TITLE: &str = "GrowIQ Farm Dashboard";
pub const LOADING_MESSAGE: &str = "Loading farm data...";
pub const NO_TIMESTAMP: &str = "No timestamp";
pub const NO_STATUS: &str = "No status available";
pub const NO_FIELDS: &str = "No field data available";
pub const NO_TASKS: &str = "No tasks scheduled";
pub const BUNDLED_DATA_ADVISORY: &str = "Using bundled field data";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Loading { message: String },
    Error { message: String, retry: bool },
    Dashboard(DashboardView),
    FieldDetail(FieldDetailView),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub header: DashboardHeader,
    pub cards: Vec<FieldCard>,
    /// Set when there are no cards to show
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardHeader {
    pub title: String,
    pub captured_at: String,
    pub status: String,
    pub advisory: Option<String>,
}

/// A sensor value with its classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub display: String,
    pub category: Category,
    pub label: String,
}

impl Reading {
    fn new(metric: Metric, value: f64, unit: &str) -> Self {
        let category = classify::classify(metric, value);
        Self {
            value,
            display: format!("{}{}", value, unit),
            category,
            label: classify::label(metric, category).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Growth {
    /// As reported, may exceed 100
    pub percent: f64,
    /// Clamped to 0-100 for drawing
    pub bar_percent: f64,
    pub days_since_planting: u32,
    pub caption: String,
}

impl Growth {
    fn of(field: &FieldRecord) -> Self {
        Self {
            percent: field.growth_progress_percent,
            bar_percent: field.growth_progress_percent.clamp(0.0, 100.0),
            days_since_planting: field.days_since_planting,
            caption: format!(
                "{}% ({} days)",
                field.growth_progress_percent, field.days_since_planting
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldCard {
    pub field_id: String,
    pub crop_name: String,
    pub crop_emoji: String,
    pub low_moisture: bool,
    pub growth: Growth,
    pub soil_moisture: Reading,
    pub temperature: Reading,
    pub humidity: Reading,
    pub harvest_date: String,
    pub next_task: String,
}

impl From<&FieldRecord> for FieldCard {
    fn from(field: &FieldRecord) -> Self {
        Self {
            field_id: field.field_id.clone(),
            crop_name: field.crop_name.clone(),
            crop_emoji: crop_emoji(&field.crop_name).to_string(),
            low_moisture: classify::is_low_moisture(field.soil_moisture_percent),
            growth: Growth::of(field),
            soil_moisture: Reading::new(Metric::SoilMoisture, field.soil_moisture_percent, "%"),
            temperature: Reading::new(Metric::Temperature, field.temperature_celsius, "°C"),
            humidity: Reading::new(Metric::Humidity, field.humidity_percent, "%"),
            harvest_date: dates::format_date(&field.expected_harvest_date),
            next_task: field.current_task().unwrap_or(NO_TASKS).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineStep {
    /// 1-based position
    pub step: usize,
    pub instruction: String,
    pub current_priority: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDetailView {
    pub title: String,
    pub field_id: String,
    pub crop_name: String,
    pub crop_emoji: String,
    pub low_moisture_alert: bool,
    pub growth: Growth,
    /// Calendar days from `today` to the harvest date; any time of day on
    /// the harvest date is ignored. `None` when the date cannot be parsed.
    pub days_to_harvest: Option<i64>,
    pub planting_date: String,
    pub harvest_date: String,
    pub soil_moisture: Reading,
    pub temperature: Reading,
    pub humidity: Reading,
    pub timeline: Vec<TimelineStep>,
}

impl FieldDetailView {
    pub fn new(field: &FieldRecord, today: NaiveDate) -> Self {
        Self {
            title: format!("{} Field", field.crop_name),
            field_id: field.field_id.clone(),
            crop_name: field.crop_name.clone(),
            crop_emoji: crop_emoji(&field.crop_name).to_string(),
            low_moisture_alert: classify::is_low_moisture(field.soil_moisture_percent),
            growth: Growth::of(field),
            days_to_harvest: dates::days_until(&field.expected_harvest_date, today),
            planting_date: dates::format_date(&field.planting_date),
            harvest_date: dates::format_date(&field.expected_harvest_date),
            soil_moisture: Reading::new(Metric::SoilMoisture, field.soil_moisture_percent, "%"),
            temperature: Reading::new(Metric::Temperature, field.temperature_celsius, "°C"),
            humidity: Reading::new(Metric::Humidity, field.humidity_percent, "%"),
            timeline: field
                .timeline_instructions
                .iter()
                .enumerate()
                .map(|(i, instruction)| TimelineStep {
                    step: i + 1,
                    instruction: instruction.clone(),
                    current_priority: i == 0,
                })
                .collect(),
        }
    }
}

impl DashboardView {
    pub fn new(snapshot: Option<&FarmSnapshot>, error: Option<&str>) -> Self {
        let cards: Vec<FieldCard> = snapshot
            .map(|s| s.fields.iter().map(FieldCard::from).collect())
            .unwrap_or_default();
        let header = DashboardHeader {
            title: DASHBOARD_TITLE.to_string(),
            captured_at: snapshot
                .filter(|s| !s.timestamp.is_empty())
                .map(|s| dates::format_timestamp(&s.timestamp))
                .unwrap_or_else(|| NO_TIMESTAMP.to_string()),
            status: snapshot
                .filter(|s| !s.message.is_empty())
                .map(|s| s.message.clone())
                .unwrap_or_else(|| NO_STATUS.to_string()),
            advisory: error.map(|_| BUNDLED_DATA_ADVISORY.to_string()),
        };
        let empty_message = cards.is_empty().then(|| NO_FIELDS.to_string());
        Self {
            header,
            cards,
            empty_message,
        }
    }
}

/// Decide what to show for the current store and view state
pub fn compose(state: &FarmDataState, view: &ViewState, today: NaiveDate) -> Screen {
    if state.loading {
        return Screen::Loading {
            message: LOADING_MESSAGE.to_string(),
        };
    }

    let snapshot = state.snapshot.as_ref();
    if let (Some(error), None) = (&state.error, snapshot) {
        return Screen::Error {
            message: format!("Error loading farm data: {}", error),
            retry: true,
        };
    }

    match view.resolve_field(snapshot) {
        Some(field) => Screen::FieldDetail(FieldDetailView::new(field, today)),
        None => Screen::Dashboard(DashboardView::new(snapshot, state.error.as_deref())),
    }
}
