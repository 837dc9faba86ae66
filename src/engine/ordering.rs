use std::{cmp::Ordering, collections::HashMap};

use thiserror::Error;

use crate::{
    engine::{EateryCard, EateryId, OpenState, PinnedSet},
    shared::geo::Distance,
};

/// Walking distance per eatery, filled in by a resolver pass. Eateries
/// without an entry simply have no known distance yet.
pub type DistanceMap = HashMap<EateryId, Distance>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    ClosingTime,
    Location,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::ClosingTime, SortMode::Location];

    /// Unrecognized values fall back to the closing-time order.
    pub fn parse(value: &str) -> Self {
        match value {
            "location" => Self::Location,
            _ => Self::ClosingTime,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClosingTime => "closing-time",
            Self::Location => "location",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ClosingTime => "Closing Time",
            Self::Location => "Location",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("eatery {id} reports state {state:?} but closed_long_term = {flag}")]
    LongTermMismatch {
        id: EateryId,
        state: OpenState,
        flag: bool,
    },
}

/// Orders cards in place: pinned first, then the mode's own ranking,
/// with names as the final tiebreak. The sort is total, so repeating it
/// never reshuffles equal cards.
pub fn sort_cards(
    cards: &mut [EateryCard],
    mode: SortMode,
    pinned: &PinnedSet,
    distances: &DistanceMap,
) -> Result<(), self::Error> {
    check_long_term_flags(cards)?;
    cards.sort_by(|a, b| compare_cards(a, b, mode, pinned, distances));
    Ok(())
}

/// Every card must agree between its long-term flag and its long-term
/// state before any comparison runs. With per-card coherence, any pair
/// reaching the closed-long-term branch is a matched pair.
fn check_long_term_flags(cards: &[EateryCard]) -> Result<(), self::Error> {
    for card in cards {
        let eatery = &card.eatery;
        if eatery.closed_long_term != (eatery.state == OpenState::ClosedLongTerm) {
            return Err(self::Error::LongTermMismatch {
                id: eatery.id,
                state: eatery.state,
                flag: eatery.closed_long_term,
            });
        }
    }
    Ok(())
}

fn compare_cards(
    a: &EateryCard,
    b: &EateryCard,
    mode: SortMode,
    pinned: &PinnedSet,
    distances: &DistanceMap,
) -> Ordering {
    pin_rank(a, pinned)
        .cmp(&pin_rank(b, pinned))
        .then_with(|| match mode {
            SortMode::Location => compare_by_walk(a, b, distances),
            SortMode::ClosingTime => compare_by_clock(a, b),
        })
        .then_with(|| compare_names(a, b))
}

fn pin_rank(card: &EateryCard, pinned: &PinnedSet) -> u8 {
    if pinned.contains(card.eatery.id) { 0 } else { 1 }
}

/// Coarse rank for the location order: anything currently open walks
/// first, then places about to open, then closed ones.
const fn walk_bucket(state: OpenState) -> u8 {
    match state {
        OpenState::Open | OpenState::ClosesSoon => 0,
        OpenState::OpensSoon => 1,
        OpenState::Closed | OpenState::ClosedLongTerm => 2,
        OpenState::Unknown => 3,
    }
}

fn compare_by_walk(a: &EateryCard, b: &EateryCard, distances: &DistanceMap) -> Ordering {
    walk_bucket(a.eatery.state)
        .cmp(&walk_bucket(b.eatery.state))
        .then_with(
            || match (distances.get(&a.eatery.id), distances.get(&b.eatery.id)) {
                (Some(walk_a), Some(walk_b)) => walk_a.total_cmp(walk_b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        )
}

fn compare_by_clock(a: &EateryCard, b: &EateryCard) -> Ordering {
    let (ea, eb) = (&a.eatery, &b.eatery);
    ea.state.ordinal().cmp(&eb.state.ordinal()).then_with(|| {
        if ea.closed_long_term {
            // Equal ordinals here mean both are long-term closed, the
            // name tiebreak takes over.
            Ordering::Equal
        } else {
            match ea.state {
                // Open places with the most time left come first,
                // everything else reopens soonest first.
                OpenState::Open | OpenState::ClosesSoon => eb.time_until.total_cmp(&ea.time_until),
                _ => ea.time_until.total_cmp(&eb.time_until),
            }
        }
    })
}

fn compare_names(a: &EateryCard, b: &EateryCard) -> Ordering {
    a.eatery
        .normalized_name
        .cmp(&b.eatery.normalized_name)
        .then_with(|| a.eatery.name.cmp(&b.eatery.name))
}
