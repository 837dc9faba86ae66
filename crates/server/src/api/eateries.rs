use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nosh::engine::{self, SortMode};
use tracing::error;

use crate::{
    dto::{GridDto, SortOptionDto},
    state::AppState,
};

pub async fn eateries(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mode = params
        .get("sort")
        .map(|value| SortMode::parse(value))
        .unwrap_or_default();
    let building = params.get("building").map(String::as_str).unwrap_or("");

    let feed = state.feed.read().await;
    let pins = state.pins.read().await;
    let distances = state.distances.read().await;

    let filtered = feed
        .snapshot
        .as_ref()
        .map(|snapshot| engine::filter_by_building(snapshot.directory.eateries(), building));
    let extras = feed.snapshot.as_ref().map(|snapshot| &snapshot.extras);

    let view = engine::grid_view(
        filtered.as_deref(),
        extras,
        feed.error,
        mode,
        &pins,
        &distances,
    )
    .map_err(|err| {
        error!("Refusing to order eateries: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(GridDto::from(&view, &pins, &distances)).into_response())
}

pub async fn filters(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let feed = state.feed.read().await;
    let options = match &feed.snapshot {
        Some(snapshot) => engine::building_options(snapshot.directory.eateries()),
        None => Vec::new(),
    };
    Ok(Json(options).into_response())
}

pub async fn sorts() -> Response {
    let options: Vec<SortOptionDto> = SortMode::ALL.into_iter().map(SortOptionDto::from).collect();
    Json(options).into_response()
}
