//! A small, local-first engine for campus dining data: feed parsing,
//! open-state ordering, building filters, pinning, and map-pin aliasing
//! for walking-distance sorting.

pub mod engine;
pub mod feed;
pub mod shared;

pub mod prelude {
    pub use crate::engine::{
        AliasTable, Directory, DistanceMap, Eatery, EateryCard, EateryId, ExtraData, ExtraMap,
        GridView, OpenState, PinnedSet, SortMode,
    };
    pub use crate::shared::geo::{Coordinate, Distance};
}
