use std::{collections::HashMap, fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{feed::models::FeedLocation, shared::geo::Coordinate};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EateryId(pub i64);

impl Display for EateryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Where an eatery sits in its open/closed cycle right now.
///
/// The discriminants carry the display rank: lower values surface first
/// when the grid is ordered by closing time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum OpenState {
    Open = 0,
    ClosesSoon = 1,
    OpensSoon = 2,
    Closed = 3,
    ClosedLongTerm = 4,
    #[default]
    #[serde(other)]
    Unknown = 5,
}

impl OpenState {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Default, Clone)]
pub struct Eatery {
    pub id: EateryId,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub address: Arc<str>,
    pub coordinate: Option<Coordinate>,
    pub state: OpenState,
    /// Minutes until the next state change (closing or reopening).
    pub time_until: f64,
    pub closed_long_term: bool,
}

impl From<FeedLocation> for Eatery {
    fn from(value: FeedLocation) -> Self {
        Self {
            id: EateryId(value.concept_id),
            name: value.name.clone().into(),
            normalized_name: value.name.to_lowercase().into(),
            address: value.location.into(),
            coordinate: value.coordinates.map(Coordinate::from),
            state: value.location_state,
            time_until: value.time_until,
            closed_long_term: value.closed_long_term,
        }
    }
}

/// Feed data a card shows but the ordering never looks at.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraData {
    pub status_msg: Option<String>,
    pub menu: Option<String>,
}

impl ExtraData {
    pub fn is_empty(&self) -> bool {
        self.status_msg.is_none() && self.menu.is_none()
    }
}

pub type ExtraMap = HashMap<EateryId, ExtraData>;

#[derive(Debug, Default, Clone)]
pub struct EateryCard {
    pub eatery: Eatery,
    pub extra: Option<ExtraData>,
}

#[test]
fn state_ordinal_test() {
    assert!(OpenState::Open.ordinal() < OpenState::ClosesSoon.ordinal());
    assert!(OpenState::ClosesSoon.ordinal() < OpenState::OpensSoon.ordinal());
    assert!(OpenState::OpensSoon.ordinal() < OpenState::Closed.ordinal());
    assert!(OpenState::Closed.ordinal() < OpenState::ClosedLongTerm.ordinal());
    assert!(OpenState::ClosedLongTerm.ordinal() < OpenState::Unknown.ordinal());
}
