use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nosh::engine::EateryId;

use crate::state::AppState;

pub async fn toggle_pin(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let id = EateryId(id);
    {
        let feed = state.feed.read().await;
        let Some(snapshot) = &feed.snapshot else {
            return Err(StatusCode::NOT_FOUND);
        };
        if snapshot.directory.get_eatery(id).is_none() {
            return Err(StatusCode::NOT_FOUND);
        }
    }

    let mut pins = state.pins.write().await;
    let toggled = pins.toggled(id);
    *pins = toggled;

    let mut ids: Vec<i64> = pins.ids().map(|id| id.0).collect();
    ids.sort_unstable();
    Ok(Json(ids).into_response())
}
