use serde::{Deserialize, Serialize};

use crate::{engine::OpenState, shared::geo::Coordinate};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedPayload {
    pub locations: Vec<FeedLocation>,
}

/// One eatery as the dining feed reports it, annotations included.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeedLocation {
    pub concept_id: i64,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<FeedCoordinate>,
    pub location_state: OpenState,
    #[serde(default)]
    pub time_until: f64,
    #[serde(default)]
    pub closed_long_term: bool,
    #[serde(default)]
    pub status_msg: Option<String>,
    #[serde(default)]
    pub menu: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct FeedCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl From<FeedCoordinate> for Coordinate {
    fn from(value: FeedCoordinate) -> Self {
        Self {
            latitude: value.lat,
            longitude: value.lng,
        }
    }
}
