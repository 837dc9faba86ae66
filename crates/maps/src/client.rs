use std::time::Duration;

use thiserror::Error;

use nosh::shared::geo::Coordinate;

use crate::models::RouteResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum Error {
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bad route payload from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin wrapper around the wayfinding service. The base URL is
/// injectable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct MapsClient {
    client: reqwest::Client,
    base_url: String,
}

impl MapsClient {
    pub fn new(base_url: &str) -> Result<Self, self::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Asks for the fastest walking route between two map pins.
    pub async fn walking_path(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<RouteResponse, self::Error> {
        let url = self.path_url(from, to);
        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| self::Error::Decode {
            context: url,
            source,
        })
    }

    fn path_url(&self, from: &Coordinate, to: &Coordinate) -> String {
        format!(
            "{}/path?start={},{}&end={},{}",
            self.base_url, from.latitude, from.longitude, to.latitude, to.longitude
        )
    }
}

#[test]
fn path_url_test() {
    let client = MapsClient::new("http://maps.local/").unwrap();
    let from = Coordinate {
        latitude: 40.5,
        longitude: -79.25,
    };
    let to = Coordinate {
        latitude: 40.75,
        longitude: -80.5,
    };
    assert_eq!(
        client.path_url(&from, &to),
        "http://maps.local/path?start=40.5,-79.25&end=40.75,-80.5"
    );
}
