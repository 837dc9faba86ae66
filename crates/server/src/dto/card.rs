use nosh::engine::{DistanceMap, EateryCard, OpenState, PinnedSet};
use nosh::shared::geo::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EateryCardDto {
    pub concept_id: i64,
    pub name: String,
    pub location: String,
    pub coordinate: Option<Coordinate>,
    pub location_state: OpenState,
    pub time_until: f64,
    pub closed_long_term: bool,
    pub pinned: bool,
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

impl EateryCardDto {
    pub fn from(card: &EateryCard, pinned: &PinnedSet, distances: &DistanceMap) -> Self {
        let eatery = &card.eatery;
        let extra = card.extra.clone().unwrap_or_default();
        Self {
            concept_id: eatery.id.0,
            name: eatery.name.to_string(),
            location: eatery.address.to_string(),
            coordinate: eatery.coordinate,
            location_state: eatery.state,
            time_until: eatery.time_until,
            closed_long_term: eatery.closed_long_term,
            pinned: pinned.contains(eatery.id),
            distance_meters: distances.get(&eatery.id).map(|walk| walk.as_meters()),
            status_msg: extra.status_msg,
            menu: extra.menu,
        }
    }
}
