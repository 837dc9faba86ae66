use crate::engine::{
    DistanceMap, Eatery, EateryCard, ExtraMap, PinnedSet, SortMode, ordering, sort_cards,
};

/// What the card grid should show, decided in a fixed order: missing
/// inputs beat a feed error, a feed error beats an empty list.
#[derive(Debug, Clone)]
pub enum GridView {
    Loading,
    InvalidFeed,
    NoResults,
    Cards(Vec<EateryCard>),
}

pub fn grid_view(
    eateries: Option<&[Eatery]>,
    extras: Option<&ExtraMap>,
    feed_error: bool,
    mode: SortMode,
    pinned: &PinnedSet,
    distances: &DistanceMap,
) -> Result<GridView, ordering::Error> {
    let (Some(eateries), Some(extras)) = (eateries, extras) else {
        return Ok(GridView::Loading);
    };
    if feed_error {
        return Ok(GridView::InvalidFeed);
    }
    if eateries.is_empty() {
        return Ok(GridView::NoResults);
    }

    let mut cards: Vec<EateryCard> = eateries
        .iter()
        .map(|eatery| EateryCard {
            extra: extras.get(&eatery.id).cloned(),
            eatery: eatery.clone(),
        })
        .collect();
    sort_cards(&mut cards, mode, pinned, distances)?;
    Ok(GridView::Cards(cards))
}
