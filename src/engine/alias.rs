use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::{engine::Eatery, shared::geo::Coordinate};

/// Maps eateries without map pins onto a named parent whose pin they
/// should borrow. Keys are exact display names of the sub eateries,
/// values the display names of their parents.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    parents: HashMap<String, String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::empty()
            .with_rule("Stack'd Dessert Bar", "Stack'd Underground")
            .with_rule("Zebra Lounge", "The Exchange")
            .with_rule("Sweet Plantain", "Taste Of India")
            .with_rule("De Fer Coffee & Tea At Resnik", "Taste Of India")
            .with_rule("E.a.t. (evenings At Tepper) - Rohr Commons", "Tepper Taqueria")
            .with_rule("Fire And Stone", "Tahini")
    }
}

impl AliasTable {
    pub fn empty() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    pub fn with_rule(mut self, sub: &str, parent: &str) -> Self {
        self.parents.insert(sub.to_owned(), parent.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    /// Returns a copy of the list where every pinless sub eatery carries
    /// its parent's coordinate, when that parent has one. Order and
    /// length never change, and eateries that already have a coordinate
    /// are left alone.
    pub fn resolve(&self, eateries: &[Eatery]) -> Vec<Eatery> {
        // First eatery with a given name decides, even if a later
        // namesake has a coordinate.
        let mut pins: HashMap<&str, Option<Coordinate>> = HashMap::new();
        for eatery in eateries {
            pins.entry(eatery.name.as_ref()).or_insert(eatery.coordinate);
        }

        eateries
            .iter()
            .map(|eatery| {
                if eatery.coordinate.is_none()
                    && let Some(parent) = self.parents.get(eatery.name.as_ref())
                    && let Some(Some(coordinate)) = pins.get(parent.as_str())
                {
                    debug!("{} borrows the map pin of {parent}", eatery.name);
                    let mut aliased = eatery.clone();
                    aliased.coordinate = Some(*coordinate);
                    aliased
                } else {
                    eatery.clone()
                }
            })
            .collect()
    }
}
