use thiserror::Error;

pub mod models;
use models::FeedPayload;

use crate::engine::{Eatery, ExtraData, ExtraMap};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a raw feed body into eateries plus their extra card data.
pub fn parse(body: &str) -> Result<(Vec<Eatery>, ExtraMap), self::Error> {
    let payload: FeedPayload = serde_json::from_str(body)?;
    Ok(split(payload))
}

/// Splits a payload into the list the engine orders and the sparse map
/// of extras the cards render. Eateries without extras get no entry.
pub fn split(payload: FeedPayload) -> (Vec<Eatery>, ExtraMap) {
    let mut eateries = Vec::with_capacity(payload.locations.len());
    let mut extras = ExtraMap::new();
    for location in payload.locations {
        let extra = ExtraData {
            status_msg: location.status_msg.clone(),
            menu: location.menu.clone(),
        };
        let eatery = Eatery::from(location);
        if !extra.is_empty() {
            extras.insert(eatery.id, extra);
        }
        eateries.push(eatery);
    }
    (eateries, extras)
}
