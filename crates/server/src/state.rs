use maps::DistanceResolver;
use nosh::engine::{AliasTable, Directory, DistanceMap, ExtraMap, PinnedSet};
use std::time::Instant;
use tokio::sync::RwLock;

/// One parsed dining feed, split into the list the engine orders and
/// the extras the cards render.
#[derive(Debug)]
pub struct Snapshot {
    pub directory: Directory,
    pub extras: ExtraMap,
}

#[derive(Debug, Default)]
pub struct FeedState {
    pub snapshot: Option<Snapshot>,
    /// A failed refresh sets this without dropping the last snapshot.
    pub error: bool,
    pub refreshed: Option<Instant>,
}

pub struct AppState {
    pub feed: RwLock<FeedState>,
    pub pins: RwLock<PinnedSet>,
    pub distances: RwLock<DistanceMap>,
    pub aliases: AliasTable,
    pub resolver: DistanceResolver,
}

impl AppState {
    pub fn new(resolver: DistanceResolver) -> Self {
        Self {
            feed: RwLock::new(FeedState::default()),
            pins: RwLock::new(PinnedSet::new()),
            distances: RwLock::new(DistanceMap::new()),
            aliases: AliasTable::default(),
            resolver,
        }
    }
}
