use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maps::Resolution;
use nosh::{engine::DistanceMap, shared::geo::Coordinate};
use tracing::debug;

use crate::state::AppState;

pub async fn distances(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let origin = parse_origin(&params)?;

    // Drop the feed lock before the resolver starts awaiting.
    let targets = {
        let feed = state.feed.read().await;
        match &feed.snapshot {
            Some(snapshot) => state.aliases.resolve(snapshot.directory.eateries()),
            None => return Ok(Json(DistanceMap::new()).into_response()),
        }
    };

    match state.resolver.resolve(origin, &targets).await {
        Resolution::Complete(distances) => {
            *state.distances.write().await = distances.clone();
            Ok(Json(distances).into_response())
        }
        Resolution::Superseded => {
            debug!("Distance pass was superseded by a newer request");
            Err(StatusCode::CONFLICT)
        }
    }
}

fn parse_origin(params: &HashMap<String, String>) -> Result<Coordinate, StatusCode> {
    let (Some(lat), Some(lng)) = (params.get("lat"), params.get("lng")) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let latitude: f64 = lat.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let longitude: f64 = lng.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Coordinate {
        latitude,
        longitude,
    })
}
