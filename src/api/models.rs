//! Launch record types as returned by the `/launches` endpoint
//!
//! Decoding is deliberately lenient: the endpoint's records carry many more
//! fields than we display, several of which are `null` for older launches.
//! Unknown fields are ignored and every optional level of nesting defaults,
//! so a record only needs a mission name and a launch year to be shown.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One historical rocket launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub flight_number: u32,

    pub mission_name: String,

    /// Single id in hand-written fixtures, a list on the live endpoint
    #[serde(default, deserialize_with = "null_as_default")]
    pub mission_id: MissionIds,

    /// A string on the wire ("2019"), but bare numbers are accepted too
    #[serde(deserialize_with = "string_or_number")]
    pub launch_year: String,

    /// `null` for launches whose outcome was never recorded
    #[serde(default)]
    pub launch_success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket: Option<Rocket>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
}

impl Launch {
    /// Whether the launch succeeded (unknown counts as no)
    pub fn launch_succeeded(&self) -> bool {
        self.launch_success.unwrap_or(false)
    }

    /// Landing outcome of the first core, if the record carries one
    ///
    /// Walks rocket → first_stage → cores[0] → land_success; any missing
    /// level yields `None`.
    pub fn land_success(&self) -> Option<bool> {
        self.rocket
            .as_ref()?
            .first_stage
            .as_ref()?
            .cores
            .first()?
            .land_success
    }

    /// Whether the first core landed (absent counts as no)
    pub fn landed(&self) -> bool {
        self.land_success().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default)]
    pub first_stage: Option<FirstStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstStage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cores: Vec<Core>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Core {
    #[serde(default)]
    pub land_success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub mission_patch_small: Option<String>,
}

/// Mission identifier(s) of a launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionIds {
    One(String),
    Many(Vec<String>),
}

impl Default for MissionIds {
    fn default() -> Self {
        MissionIds::Many(Vec::new())
    }
}

impl fmt::Display for MissionIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionIds::One(id) => write!(f, "{}", id),
            MissionIds::Many(ids) => write!(f, "{}", ids.join(", ")),
        }
    }
}

/// `null` decodes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixture_shape() {
        let json = r#"{
            "flight_number": 1,
            "mission_name": "Mission 1",
            "mission_id": "ABC123",
            "launch_year": "2019",
            "launch_success": true,
            "rocket": { "first_stage": { "cores": [ { "land_success": true } ] } },
            "links": { "mission_patch_small": "https://images2.imgbox.com/6f/c0/D3Owbmpo_o.png" }
        }"#;

        let launch: Launch = serde_json::from_str(json).unwrap();
        assert_eq!(launch.flight_number, 1);
        assert_eq!(launch.mission_id.to_string(), "ABC123");
        assert_eq!(launch.launch_year, "2019");
        assert!(launch.launch_succeeded());
        assert_eq!(launch.land_success(), Some(true));
    }

    #[test]
    fn decodes_live_endpoint_shape() {
        // Trimmed record from the v3 endpoint: id list, null outcomes, extra fields
        let json = r#"{
            "flight_number": 3,
            "mission_name": "Trailblazer",
            "mission_id": [],
            "upcoming": false,
            "launch_year": "2008",
            "launch_success": false,
            "rocket": {
                "rocket_id": "falcon1",
                "first_stage": { "cores": [ { "core_serial": "Merlin1C", "land_success": null } ] }
            },
            "links": { "mission_patch_small": null, "wikipedia": "https://en.wikipedia.org/wiki/Trailblazer_(satellite)" }
        }"#;

        let launch: Launch = serde_json::from_str(json).unwrap();
        assert_eq!(launch.mission_id.to_string(), "");
        assert_eq!(launch.land_success(), None);
        assert!(!launch.landed());
        assert_eq!(launch.links.mission_patch_small, None);
    }

    #[test]
    fn missing_rocket_means_not_landed() {
        let json = r#"{"flight_number": 9, "mission_name": "X", "launch_year": 2010}"#;
        let launch: Launch = serde_json::from_str(json).unwrap();

        assert_eq!(launch.launch_year, "2010");
        assert_eq!(launch.launch_success, None);
        assert!(!launch.launch_succeeded());
        assert!(!launch.landed());
    }

    #[test]
    fn empty_cores_means_not_landed() {
        let json = r#"{
            "flight_number": 9,
            "mission_name": "X",
            "launch_year": "2010",
            "rocket": { "first_stage": { "cores": [] } }
        }"#;
        let launch: Launch = serde_json::from_str(json).unwrap();
        assert_eq!(launch.land_success(), None);
    }

    #[test]
    fn null_nested_fields_decode_as_empty() {
        let json = r#"[
            {
                "flight_number": 4,
                "mission_name": "RatSat",
                "mission_id": null,
                "launch_year": "2008",
                "launch_success": true,
                "rocket": { "first_stage": { "cores": null } },
                "links": null
            },
            {"flight_number": 5, "mission_name": "RazakSAT", "launch_year": "2009"}
        ]"#;

        let launches: Vec<Launch> = serde_json::from_str(json).unwrap();
        assert_eq!(launches.len(), 2);

        let launch = &launches[0];
        assert_eq!(launch.mission_id.to_string(), "");
        assert_eq!(launch.links, Links::default());
        assert_eq!(launch.land_success(), None);

        let card = crate::front_page::LaunchCard::from_launch(launch, "https://fallback/p.png");
        assert_eq!(card.lines()[0], "Mission IDs: ");
        assert_eq!(card.lines()[3], "Successful Landing : False");
        assert!(card.patch.fallback);
    }

    #[test]
    fn multiple_mission_ids_are_joined() {
        let ids = MissionIds::Many(vec!["EE86F74".into(), "F4F83DE".into()]);
        assert_eq!(ids.to_string(), "EE86F74, F4F83DE");
    }
}
