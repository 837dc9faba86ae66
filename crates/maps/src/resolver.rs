use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use nosh::engine::{DistanceMap, Eatery};
use nosh::shared::geo::Coordinate;

use crate::client::MapsClient;

/// Outcome of one distance pass.
#[derive(Debug)]
pub enum Resolution {
    /// Every reachable eatery got an entry; failed lookups are absent.
    Complete(DistanceMap),
    /// A newer pass started while this one ran, so its result was thrown
    /// away instead of overwriting fresher data.
    Superseded,
}

/// Resolves walking distances from one origin to every pinned eatery,
/// all requests in flight at once. Each pass draws a fresh generation
/// number, and a pass only publishes its map if it is still the latest
/// when the last request lands.
#[derive(Debug)]
pub struct DistanceResolver {
    client: MapsClient,
    pass: AtomicU64,
}

impl DistanceResolver {
    pub fn new(client: MapsClient) -> Self {
        Self {
            client,
            pass: AtomicU64::new(0),
        }
    }

    pub async fn resolve(&self, origin: Coordinate, eateries: &[Eatery]) -> Resolution {
        let token = self.pass.fetch_add(1, Ordering::SeqCst) + 1;
        let client = &self.client;

        let mut requests: FuturesUnordered<_> = eateries
            .iter()
            .filter_map(|eatery| eatery.coordinate.map(|pin| (eatery.id, pin)))
            .map(|(id, pin)| async move {
                match client.walking_path(&origin, &pin).await {
                    Ok(route) => Some((id, route.walking_distance())),
                    Err(err) => {
                        debug!("No walking distance for eatery {id}: {err}");
                        None
                    }
                }
            })
            .collect();

        let mut distances = DistanceMap::new();
        while let Some(resolved) = requests.next().await {
            if let Some((id, distance)) = resolved {
                distances.insert(id, distance);
            }
        }

        if self.pass.load(Ordering::SeqCst) != token {
            debug!("Distance pass {token} superseded before it finished");
            return Resolution::Superseded;
        }
        Resolution::Complete(distances)
    }
}
