mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use maps::{DistanceResolver, MapsClient};
use std::sync::Arc;
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing wayfinding API base url");
        std::process::exit(1);
    }

    let client = match MapsClient::new(&args[1]) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build wayfinding client: {err}");
            std::process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(DistanceResolver::new(client)));

    let app = axum::Router::new()
        .route("/eateries", get(api::eateries))
        .route("/eateries/filters", get(api::filters))
        .route("/eateries/sorts", get(api::sorts))
        .route("/pins/{id}", post(api::toggle_pin))
        .route("/distances", post(api::distances))
        .route("/feed/refresh", post(api::refresh))
        .route("/feed/age", get(api::age))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
