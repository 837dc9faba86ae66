use std::{collections::HashMap, sync::Arc};

pub mod ordering;

mod alias;
mod eatery;
mod filter;
mod pins;
mod view;
pub use alias::*;
pub use eatery::*;
pub use filter::*;
pub use ordering::*;
pub use pins::*;
pub use view::*;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    eateries: Arc<[Eatery]>,
    id_lookup: Arc<HashMap<EateryId, usize>>,
    name_lookup: Arc<HashMap<Arc<str>, usize>>,
}

impl Directory {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_eateries(mut self, eateries: Vec<Eatery>) -> Self {
        let mut id_lookup: HashMap<EateryId, usize> = HashMap::new();
        let mut name_lookup: HashMap<Arc<str>, usize> = HashMap::new();
        for (i, eatery) in eateries.iter().enumerate() {
            id_lookup.insert(eatery.id, i);
            // First eatery with a given name wins, like the alias lookup
            name_lookup.entry(eatery.name.clone()).or_insert(i);
        }
        self.eateries = eateries.into();
        self.id_lookup = id_lookup.into();
        self.name_lookup = name_lookup.into();
        self
    }

    pub fn eateries(&self) -> &[Eatery] {
        &self.eateries
    }

    pub fn len(&self) -> usize {
        self.eateries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eateries.is_empty()
    }

    pub fn get_eatery(&self, id: EateryId) -> Option<&Eatery> {
        let eatery_index = self.id_lookup.get(&id)?;
        Some(&self.eateries[*eatery_index])
    }

    pub fn get_eatery_by_name(&self, name: &str) -> Option<&Eatery> {
        let eatery_index = self.name_lookup.get(name)?;
        Some(&self.eateries[*eatery_index])
    }

    /// Pairs every eatery with its extra feed data, in feed order.
    pub fn cards(&self, extras: &ExtraMap) -> Vec<EateryCard> {
        self.eateries
            .iter()
            .map(|eatery| EateryCard {
                extra: extras.get(&eatery.id).cloned(),
                eatery: eatery.clone(),
            })
            .collect()
    }
}

#[test]
fn directory_lookup_test() {
    let tahini = Eatery {
        id: EateryId(1),
        name: "Tahini".into(),
        normalized_name: "tahini".into(),
        ..Default::default()
    };
    let fire = Eatery {
        id: EateryId(2),
        name: "Fire And Stone".into(),
        normalized_name: "fire and stone".into(),
        ..Default::default()
    };
    let directory = Directory::new().with_eateries(vec![tahini, fire]);

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.get_eatery(EateryId(2)).unwrap().name.as_ref(), "Fire And Stone");
    assert_eq!(directory.get_eatery_by_name("Tahini").unwrap().id, EateryId(1));
    assert!(directory.get_eatery(EateryId(9)).is_none());

    let mut extras = ExtraMap::new();
    extras.insert(
        EateryId(1),
        ExtraData {
            status_msg: Some("Halal".to_owned()),
            menu: None,
        },
    );
    let cards = directory.cards(&extras);
    assert_eq!(cards.len(), 2);
    assert!(cards[0].extra.is_some());
    assert!(cards[1].extra.is_none());
}
