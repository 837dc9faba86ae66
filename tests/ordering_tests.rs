use nosh::engine::{
    DistanceMap, Eatery, EateryCard, EateryId, OpenState, PinnedSet, SortMode, ordering,
    sort_cards,
};
use nosh::shared::geo::Distance;

fn eatery(id: i64, name: &str, state: OpenState, time_until: f64) -> Eatery {
    Eatery {
        id: EateryId(id),
        name: name.into(),
        normalized_name: name.to_lowercase().into(),
        address: "Resnik, 1st floor".into(),
        coordinate: None,
        state,
        time_until,
        closed_long_term: state == OpenState::ClosedLongTerm,
    }
}

fn card(id: i64, name: &str, state: OpenState, time_until: f64) -> EateryCard {
    EateryCard {
        eatery: eatery(id, name, state, time_until),
        extra: None,
    }
}

fn names(cards: &[EateryCard]) -> Vec<String> {
    cards
        .iter()
        .map(|card| card.eatery.name.to_string())
        .collect()
}

fn distances(entries: &[(i64, f64)]) -> DistanceMap {
    entries
        .iter()
        .map(|(id, meters)| (EateryId(*id), Distance::from_meters(*meters)))
        .collect()
}

#[test]
fn ordering_pinned_first_in_clock_mode() {
    let mut cards = vec![
        card(1, "Alpha Grill", OpenState::Open, 120.0),
        card(2, "Beta Cafe", OpenState::Open, 45.0),
    ];
    let pinned: PinnedSet = [EateryId(2)].into_iter().collect();

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &pinned,
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Beta Cafe", "Alpha Grill"]);
}

#[test]
fn ordering_pinned_closed_beats_unpinned_open() {
    let mut cards = vec![
        card(1, "Alpha Grill", OpenState::Open, 120.0),
        card(2, "Beta Cafe", OpenState::Closed, 300.0),
    ];
    let pinned: PinnedSet = [EateryId(2)].into_iter().collect();

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &pinned,
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Beta Cafe", "Alpha Grill"]);
}

#[test]
fn ordering_pinned_first_in_walk_mode() {
    let mut cards = vec![
        card(1, "Alpha Grill", OpenState::Open, 120.0),
        card(2, "Beta Cafe", OpenState::Closed, 300.0),
    ];
    let pinned: PinnedSet = [EateryId(2)].into_iter().collect();
    let walks = distances(&[(1, 50.0), (2, 900.0)]);

    sort_cards(&mut cards, SortMode::Location, &pinned, &walks).unwrap();
    assert_eq!(names(&cards), ["Beta Cafe", "Alpha Grill"]);
}

#[test]
fn ordering_clock_groups_by_state() {
    let mut cards = vec![
        card(1, "Boarded Up", OpenState::ClosedLongTerm, 0.0),
        card(2, "Night Owl", OpenState::Closed, 420.0),
        card(3, "Last Call", OpenState::ClosesSoon, 20.0),
        card(4, "Early Bird", OpenState::OpensSoon, 15.0),
        card(5, "All Day", OpenState::Open, 240.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(
        names(&cards),
        ["All Day", "Last Call", "Early Bird", "Night Owl", "Boarded Up"]
    );
}

#[test]
fn ordering_clock_open_most_time_first() {
    let mut cards = vec![
        card(1, "Closes First", OpenState::Open, 45.0),
        card(2, "Closes Last", OpenState::Open, 300.0),
        card(3, "Closes Next", OpenState::Open, 90.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Closes Last", "Closes Next", "Closes First"]);
}

#[test]
fn ordering_clock_closes_soon_most_time_first() {
    let mut cards = vec![
        card(1, "Five Minutes", OpenState::ClosesSoon, 5.0),
        card(2, "Twenty Minutes", OpenState::ClosesSoon, 20.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Twenty Minutes", "Five Minutes"]);
}

#[test]
fn ordering_clock_closed_reopens_soonest_first() {
    let mut cards = vec![
        card(1, "Opens Tomorrow", OpenState::Closed, 720.0),
        card(2, "Opens Tonight", OpenState::Closed, 90.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Opens Tonight", "Opens Tomorrow"]);
}

#[test]
fn ordering_clock_opens_soon_ascending() {
    let mut cards = vec![
        card(1, "In An Hour", OpenState::OpensSoon, 60.0),
        card(2, "Any Minute", OpenState::OpensSoon, 3.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Any Minute", "In An Hour"]);
}

#[test]
fn ordering_clock_long_term_by_name() {
    let mut cards = vec![
        card(1, "Zulu Kitchen", OpenState::ClosedLongTerm, 0.0),
        card(2, "Alpha Grill", OpenState::ClosedLongTerm, 0.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Alpha Grill", "Zulu Kitchen"]);
}

#[test]
fn ordering_clock_ignores_distance() {
    let mut cards = vec![
        card(1, "Near But Closing", OpenState::Open, 30.0),
        card(2, "Far But Open Late", OpenState::Open, 300.0),
    ];
    let walks = distances(&[(1, 10.0), (2, 2000.0)]);

    sort_cards(&mut cards, SortMode::ClosingTime, &PinnedSet::new(), &walks).unwrap();
    assert_eq!(names(&cards), ["Far But Open Late", "Near But Closing"]);
}

#[test]
fn ordering_walk_groups_open_first() {
    let mut cards = vec![
        card(1, "Shut For Good", OpenState::ClosedLongTerm, 0.0),
        card(2, "Closed Now", OpenState::Closed, 400.0),
        card(3, "Almost Open", OpenState::OpensSoon, 10.0),
        card(4, "Wrapping Up", OpenState::ClosesSoon, 15.0),
        card(5, "Serving Now", OpenState::Open, 200.0),
    ];
    let walks = distances(&[(1, 5.0), (2, 10.0), (3, 15.0), (4, 20.0), (5, 25.0)]);

    sort_cards(&mut cards, SortMode::Location, &PinnedSet::new(), &walks).unwrap();
    assert_eq!(
        names(&cards),
        [
            "Wrapping Up",
            "Serving Now",
            "Almost Open",
            "Shut For Good",
            "Closed Now"
        ]
    );
}

#[test]
fn ordering_walk_nearest_first() {
    let mut cards = vec![
        card(1, "Across Campus", OpenState::Open, 120.0),
        card(2, "Next Door", OpenState::Open, 120.0),
    ];
    let walks = distances(&[(1, 850.0), (2, 40.0)]);

    sort_cards(&mut cards, SortMode::Location, &PinnedSet::new(), &walks).unwrap();
    assert_eq!(names(&cards), ["Next Door", "Across Campus"]);
}

#[test]
fn ordering_walk_known_distance_first() {
    let mut cards = vec![
        card(1, "No Pin", OpenState::Open, 120.0),
        card(2, "Measured", OpenState::Open, 120.0),
    ];
    let walks = distances(&[(2, 999.0)]);

    sort_cards(&mut cards, SortMode::Location, &PinnedSet::new(), &walks).unwrap();
    assert_eq!(names(&cards), ["Measured", "No Pin"]);
}

#[test]
fn ordering_walk_no_distances_by_name() {
    let mut cards = vec![
        card(1, "Zebra Lounge", OpenState::Open, 120.0),
        card(2, "Alpha Grill", OpenState::Open, 120.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::Location,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Alpha Grill", "Zebra Lounge"]);
}

#[test]
fn ordering_name_tiebreak_is_case_insensitive() {
    let mut cards = vec![
        card(1, "burger stand", OpenState::Open, 60.0),
        card(2, "Apple Cart", OpenState::Open, 60.0),
    ];

    sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    )
    .unwrap();
    assert_eq!(names(&cards), ["Apple Cart", "burger stand"]);
}

#[test]
fn ordering_is_idempotent() {
    let mut cards = vec![
        card(4, "Delta Deli", OpenState::Closed, 100.0),
        card(1, "Alpha Grill", OpenState::Open, 60.0),
        card(3, "Gamma Grain", OpenState::Open, 60.0),
        card(2, "Beta Cafe", OpenState::ClosesSoon, 10.0),
    ];
    let pinned: PinnedSet = [EateryId(3)].into_iter().collect();
    let walks = distances(&[(1, 100.0), (2, 200.0)]);

    sort_cards(&mut cards, SortMode::Location, &pinned, &walks).unwrap();
    let first_pass = names(&cards);
    sort_cards(&mut cards, SortMode::Location, &pinned, &walks).unwrap();
    assert_eq!(names(&cards), first_pass);
}

#[test]
fn ordering_rejects_flag_without_state() {
    let mut bad = eatery(7, "Flagged", OpenState::Open, 60.0);
    bad.closed_long_term = true;
    let mut cards = vec![
        EateryCard {
            eatery: bad,
            extra: None,
        },
        card(8, "Fine", OpenState::Open, 60.0),
    ];

    let result = sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    );
    assert_eq!(
        result,
        Err(ordering::Error::LongTermMismatch {
            id: EateryId(7),
            state: OpenState::Open,
            flag: true,
        })
    );
}

#[test]
fn ordering_rejects_state_without_flag() {
    let mut bad = eatery(9, "Unflagged", OpenState::ClosedLongTerm, 0.0);
    bad.closed_long_term = false;
    let mut cards = vec![EateryCard {
        eatery: bad,
        extra: None,
    }];

    let result = sort_cards(
        &mut cards,
        SortMode::ClosingTime,
        &PinnedSet::new(),
        &DistanceMap::new(),
    );
    assert_eq!(
        result,
        Err(ordering::Error::LongTermMismatch {
            id: EateryId(9),
            state: OpenState::ClosedLongTerm,
            flag: false,
        })
    );
}

#[test]
fn sort_mode_parse_location() {
    assert_eq!(SortMode::parse("location"), SortMode::Location);
}

#[test]
fn sort_mode_parse_falls_back() {
    assert_eq!(SortMode::parse("closing-time"), SortMode::ClosingTime);
    assert_eq!(SortMode::parse(""), SortMode::ClosingTime);
    assert_eq!(SortMode::parse("distance"), SortMode::ClosingTime);
}

#[test]
fn sort_mode_round_trips() {
    for mode in SortMode::ALL {
        assert_eq!(SortMode::parse(mode.as_str()), mode);
    }
}
