use std::{collections::HashMap, sync::Arc, time::Instant};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nosh::{engine::Directory, feed};
use reqwest::header::ACCEPT_ENCODING;
use tracing::{error, info};

use crate::state::{AppState, Snapshot};

pub async fn refresh(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(url) = params.get("url") else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let body = match fetch_feed(url).await {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to fetch dining feed: {err}");
            state.feed.write().await.error = true;
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    match feed::parse(&body) {
        Ok((eateries, extras)) => {
            let mut feed = state.feed.write().await;
            info!("Loaded {} eateries", eateries.len());
            feed.snapshot = Some(Snapshot {
                directory: Directory::new().with_eateries(eateries),
                extras,
            });
            feed.error = false;
            feed.refreshed = Some(Instant::now());
            Ok(().into_response())
        }
        Err(err) => {
            error!("Invalid dining feed payload: {err}");
            // Keep the last good snapshot, only flag the failure.
            state.feed.write().await.error = true;
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

async fn fetch_feed(url: &str) -> Result<String, reqwest::Error> {
    let response = reqwest::Client::new()
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await?;
    let response = response.error_for_status()?;
    response.text().await
}

pub async fn age(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let feed = state.feed.read().await;
    match feed.refreshed {
        Some(at) => Ok(at.elapsed().as_secs().to_string().into_response()),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
