//! Classification, date and navigation property tests
//!
//! Property-based tests for:
//! - Reading classification boundaries
//! - Date formatting totality and day rounding
//! - Navigation transitions
//! - Fallback keyword priority

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::dates::{days_between, format_date};
use shared::fallback::{classify_query, respond, QueryTopic};
use shared::{
    classify_humidity, classify_soil_moisture, classify_temperature, Category, FarmSnapshot,
    FieldRecord, ViewController, ViewState,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate sensor readings, including out-of-range values
fn reading_strategy() -> impl Strategy<Value = f64> {
    -50.0f64..150.0
}

/// Generate field ids like F1..F999
fn field_id_strategy() -> impl Strategy<Value = String> {
    "F[1-9][0-9]{0,2}"
}

fn field(field_id: &str, crop_name: &str, moisture: f64) -> FieldRecord {
    FieldRecord {
        field_id: field_id.to_string(),
        crop_name: crop_name.to_string(),
        planting_date: "2025-06-27".to_string(),
        expected_harvest_date: "2025-10-25".to_string(),
        days_since_planting: 30,
        growth_progress_percent: 25.0,
        soil_moisture_percent: moisture,
        temperature_celsius: 25.0,
        humidity_percent: 60.0,
        timeline_instructions: vec![],
    }
}

// ============================================================================
// Classification
// ============================================================================

proptest! {
    #[test]
    fn property_moisture_bands(v in reading_strategy()) {
        let category = classify_soil_moisture(v);
        prop_assert_eq!(category == Category::Low, v < 40.0);
        prop_assert_eq!(category == Category::Good, v >= 60.0);
        prop_assert_eq!(category == Category::Moderate, (40.0..60.0).contains(&v));
    }

    #[test]
    fn property_temperature_bands(v in reading_strategy()) {
        let category = classify_temperature(v);
        prop_assert_eq!(category == Category::Cool, v < 15.0);
        prop_assert_eq!(category == Category::High, v > 33.0);
        prop_assert_eq!(category == Category::Optimal, (15.0..=33.0).contains(&v));
    }

    #[test]
    fn property_humidity_bands(v in reading_strategy()) {
        let category = classify_humidity(v);
        prop_assert_eq!(category == Category::High, v > 80.0);
        prop_assert_eq!(category == Category::Normal, v <= 80.0);
    }
}

#[test]
fn test_band_edges() {
    assert_eq!(classify_soil_moisture(40.0), Category::Moderate);
    assert_eq!(classify_soil_moisture(60.0), Category::Good);
    assert_eq!(classify_temperature(15.0), Category::Optimal);
    assert_eq!(classify_temperature(33.0), Category::Optimal);
    assert_eq!(classify_humidity(80.0), Category::Normal);
}

// ============================================================================
// Dates
// ============================================================================

proptest! {
    /// Never panics; unparseable input is echoed back
    #[test]
    fn property_format_date_total(input in "\\PC{0,24}") {
        let formatted = format_date(&input);
        prop_assert!(!formatted.is_empty() || input.is_empty());
    }

    #[test]
    fn property_format_date_valid(days in 0i64..20000) {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(days);
        let formatted = format_date(&date.format("%Y-%m-%d").to_string());
        prop_assert_eq!(formatted, date.format("%d %b %Y").to_string());
    }

    /// Any partial day rounds up to the next whole day
    #[test]
    fn property_days_between_rounds_up(whole in 0i64..400, extra_minutes in 1i64..1440) {
        let from = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap().and_hms_opt(3, 12, 50).unwrap();
        let to = from + Duration::days(whole) + Duration::minutes(extra_minutes);
        prop_assert_eq!(days_between(from, to), whole + 1);
    }
}

#[test]
fn test_two_point_three_days_is_three() {
    let from = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let to = from + Duration::milliseconds((2.3 * 86_400_000.0) as i64);
    assert_eq!(days_between(from, to), 3);
}

#[test]
fn test_malformed_dates_echoed() {
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date("2025-13-45"), "2025-13-45");
}

// ============================================================================
// Navigation
// ============================================================================

proptest! {
    #[test]
    fn property_go_back_always_dashboard(ids in prop::collection::vec(field_id_strategy(), 0..8)) {
        let mut controller = ViewController::new();
        for id in &ids {
            controller.select_field(field(id, "Wheat", 50.0));
        }
        prop_assert_eq!(controller.go_back(), &ViewState::Dashboard);
    }

    #[test]
    fn property_select_always_detail(first in field_id_strategy(), second in field_id_strategy()) {
        let mut controller = ViewController::new();
        controller.select_field(field(&first, "Rice", 70.0));
        let selected = field(&second, "Maize", 20.0);
        prop_assert_eq!(
            controller.select_field(selected.clone()),
            &ViewState::FieldDetail(selected)
        );
    }
}

// ============================================================================
// Fallback engine
// ============================================================================

#[test]
fn test_water_query_lists_dry_field() {
    let snapshot = FarmSnapshot {
        message: String::new(),
        timestamp: String::new(),
        fields: vec![field("F1", "Wheat", 30.0)],
    };
    let reply = respond("water levels?", Some(&snapshot));
    assert!(reply.contains("Wheat (F1): 30%"), "{}", reply);
}

#[test]
fn test_moisture_outranks_harvest() {
    assert_eq!(
        classify_query("is the moisture ok before harvest"),
        QueryTopic::Moisture
    );
}
