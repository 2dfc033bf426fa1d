//! WebAssembly module for the GrowIQ farm dashboard
//!
//! Provides client-side computation for:
//! - Reading classification labels
//! - Date and timestamp formatting
//! - Offline chat answers from the keyword fallback engine
//! - Screen composition from serialized store and view state

use chrono::NaiveDate;
use shared::screen::compose;
use shared::{dates, fallback, FarmDataState, FarmSnapshot, Metric, ViewState};
use wasm_bindgen::prelude::*;

/// Label for a soil moisture reading, e.g. "Low - Needs irrigation"
#[wasm_bindgen]
pub fn classify_soil_moisture(percent: f64) -> String {
    shared::describe(Metric::SoilMoisture, percent).to_string()
}

/// Label for a temperature reading in °C
#[wasm_bindgen]
pub fn classify_temperature(celsius: f64) -> String {
    shared::describe(Metric::Temperature, celsius).to_string()
}

/// Label for a humidity reading
#[wasm_bindgen]
pub fn classify_humidity(percent: f64) -> String {
    shared::describe(Metric::Humidity, percent).to_string()
}

/// Format an ISO date as `25 Oct 2025`; unparseable input is returned as is
#[wasm_bindgen]
pub fn format_date(input: &str) -> String {
    dates::format_date(input)
}

/// Format an ISO instant as `27 Jul 2025, 03:12:50`
#[wasm_bindgen]
pub fn format_timestamp(input: &str) -> String {
    dates::format_timestamp(input)
}

#[wasm_bindgen]
pub fn crop_emoji(crop_name: &str) -> String {
    shared::crops::crop_emoji(crop_name).to_string()
}

/// Answer a chat question without the assistant service.
///
/// `snapshot_json` may be absent or malformed; both are treated as no data.
#[wasm_bindgen]
pub fn fallback_response(query: &str, snapshot_json: Option<String>) -> String {
    let snapshot = snapshot_json.as_deref().and_then(parse_snapshot);
    fallback::respond(query, snapshot.as_ref())
}

/// Whole days from today until `harvest_date`, if it parses
#[wasm_bindgen]
pub fn days_until_harvest(harvest_date: &str) -> Option<i32> {
    days_until_from(harvest_date, today())
}

/// Compose the screen for serialized store and view state
#[wasm_bindgen]
pub fn compose_screen(state_json: &str, view_json: &str) -> Result<String, JsValue> {
    let state: FarmDataState = serde_json::from_str(state_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farm state JSON: {}", e)))?;
    let view: ViewState = serde_json::from_str(view_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid view state JSON: {}", e)))?;

    serde_json::to_string(&compose(&state, &view, today()))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize screen: {}", e)))
}

fn parse_snapshot(json: &str) -> Option<FarmSnapshot> {
    match serde_json::from_str(json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn(&format!("Ignoring malformed snapshot JSON: {}", e));
            None
        }
    }
}

fn days_until_from(harvest_date: &str, today: NaiveDate) -> Option<i32> {
    dates::days_until(harvest_date, today).and_then(|days| i32::try_from(days).ok())
}

#[cfg(target_arch = "wasm32")]
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_else(|| chrono::Utc::now().date_naive())
}

#[cfg(not(target_arch = "wasm32"))]
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_message: &str) {}
