use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::EateryId;

/// The set of pinned eateries. Toggling builds a new set and leaves
/// the original untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedSet(HashSet<EateryId>);

impl PinnedSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn contains(&self, id: EateryId) -> bool {
        self.0.contains(&id)
    }

    pub fn toggled(&self, id: EateryId) -> Self {
        let mut pins = self.0.clone();
        if !pins.remove(&id) {
            pins.insert(id);
        }
        Self(pins)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EateryId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<EateryId> for PinnedSet {
    fn from_iter<T: IntoIterator<Item = EateryId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[test]
fn toggle_test() {
    let pins = PinnedSet::new();
    let pinned = pins.toggled(EateryId(93));
    assert!(pinned.contains(EateryId(93)));
    assert!(!pins.contains(EateryId(93)));

    let unpinned = pinned.toggled(EateryId(93));
    assert!(unpinned.is_empty());
    assert_eq!(pinned.len(), 1);
}
