use nosh::engine::{DistanceMap, GridView, PinnedSet};
use serde::Serialize;

use crate::dto::EateryCardDto;

const FALLBACK_URL: &str = "https://apps.studentaffairs.cmu.edu/dining/conceptinfo/";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GridDto {
    Loading,
    Error { message: String },
    Empty,
    Ok { cards: Vec<EateryCardDto> },
}

impl GridDto {
    pub fn from(view: &GridView, pinned: &PinnedSet, distances: &DistanceMap) -> Self {
        match view {
            GridView::Loading => Self::Loading,
            GridView::InvalidFeed => Self::Error {
                message: format!(
                    "Received an invalid dining feed (or no data at all). \
                     Please visit {FALLBACK_URL} for now"
                ),
            },
            GridView::NoResults => Self::Empty,
            GridView::Cards(cards) => Self::Ok {
                cards: cards
                    .iter()
                    .map(|card| EateryCardDto::from(card, pinned, distances))
                    .collect(),
            },
        }
    }
}
