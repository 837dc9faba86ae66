use std::collections::HashSet;

use crate::engine::Eatery;

/// The building part of an address: everything before the first comma,
/// or the whole address when there is none.
pub fn primary_location(address: &str) -> &str {
    match address.find(',') {
        Some(comma) => &address[..comma],
        None => address,
    }
}

/// Distinct buildings in first-seen feed order, one entry per building
/// no matter how many floors it has.
pub fn building_options(eateries: &[Eatery]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = Vec::new();
    for eatery in eateries {
        let primary = primary_location(&eatery.address);
        if seen.insert(primary) {
            options.push(primary.to_owned());
        }
    }
    options
}

/// Keeps eateries whose building matches the query exactly. An empty
/// query keeps everything.
pub fn filter_by_building(eateries: &[Eatery], query: &str) -> Vec<Eatery> {
    if query.is_empty() {
        return eateries.to_vec();
    }
    eateries
        .iter()
        .filter(|eatery| primary_location(&eatery.address) == query)
        .cloned()
        .collect()
}
