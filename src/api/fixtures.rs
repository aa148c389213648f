//! Shared launch fixtures for tests

use super::models::Launch;
use serde_json::{json, Value};

pub const PATCH_URL: &str = "https://images2.imgbox.com/6f/c0/D3Owbmpo_o.png";

/// Two launches: 2019 (launched, landed) and 2020 (failed, not landed)
pub fn mock_launches_json() -> Value {
    json!([
        {
            "flight_number": 1,
            "mission_name": "Mission 1",
            "mission_id": "ABC123",
            "launch_year": "2019",
            "launch_success": true,
            "rocket": { "first_stage": { "cores": [ { "land_success": true } ] } },
            "links": { "mission_patch_small": PATCH_URL }
        },
        {
            "flight_number": 2,
            "mission_name": "Mission 2",
            "mission_id": "XYZ789",
            "launch_year": "2020",
            "launch_success": false,
            "rocket": { "first_stage": { "cores": [ { "land_success": false } ] } },
            "links": { "mission_patch_small": PATCH_URL }
        }
    ])
}

pub fn mock_launches() -> Vec<Launch> {
    serde_json::from_value(mock_launches_json()).expect("fixture must decode")
}

/// Minimal record with the given name and no rocket section
pub fn bare_launch(flight_number: u32, mission_name: &str) -> Launch {
    serde_json::from_value(json!({
        "flight_number": flight_number,
        "mission_name": mission_name,
        "launch_year": "2012",
        "launch_success": true
    }))
    .expect("fixture must decode")
}
