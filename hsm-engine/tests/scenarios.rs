use approx::assert_abs_diff_eq;
use hsm_core::models::{
    AmenityPreference, ApartmentId, Group, Map, PersonId, Preferences, RangePreference, Set,
};
use hsm_engine::{Applicant, GroupStrategy, Market, MarketError, Termination};
use rstest::*;

mod fixtures;
use fixtures::*;

#[test]
fn single_person_single_apartment() {
    let outcome = Market::new([person("1", 1000.0, 0, false)], [apartment(0, 1, false)])
        .unwrap()
        .run();

    assert_eq!(outcome.rounds, 1);
    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.termination, Termination::PeopleExhausted);

    let record = &outcome.assignments[0];
    assert_eq!(record.winning_bid, 1000.0);
    assert_eq!(record.second_bid, 0.0);
    assert_eq!(record.shares[&PersonId::from("1")].payment, 0.0);
    assert_eq!(record.shares[&PersonId::from("1")].adjusted_bid, 1000.0);
}

#[test]
fn higher_bidder_pays_runner_up() {
    let outcome = Market::new(
        [person("low", 1000.0, 0, false), person("high", 1500.0, 0, false)],
        [apartment(0, 1, false)],
    )
    .unwrap()
    .run();

    assert_eq!(outcome.assignments.len(), 1);
    let record = &outcome.assignments[0];
    assert_eq!(record.group.members(), &[PersonId::from("high")]);
    assert_eq!(record.winning_bid, 1500.0);
    assert_eq!(record.second_bid, 1000.0);
    assert_eq!(record.shares[&PersonId::from("high")].payment, 1000.0);

    assert_eq!(outcome.termination, Termination::ApartmentsExhausted);
    assert_eq!(outcome.unassigned.len(), 1);
    assert_eq!(outcome.unassigned[0].id, PersonId::from("low"));
}

#[rstest]
#[case::roommates_disallowed(false, 1)]
#[case::roommates_allowed(true, 2)]
fn apartment_roommate_policy(#[case] allows_roommates: bool, #[case] winners: usize) {
    // Together the pair bids 1800, more than either could alone
    let outcome = Market::new(
        [person("a", 900.0, 1, true), person("b", 900.0, 1, true)],
        [apartment(0, 2, allows_roommates)],
    )
    .unwrap()
    .run();

    let record = &outcome.assignments[0];
    assert_eq!(record.group.len(), winners);
    if winners == 1 {
        // Singletons tie at 900; the first proposed group wins and pays the other
        assert_eq!(record.group.members(), &[PersonId::from("a")]);
        assert_eq!(record.second_bid, 900.0);
    } else {
        assert_eq!(record.winning_bid, 1800.0);
        assert_eq!(record.second_bid, 900.0);
        assert_abs_diff_eq!(record.total_payment(), 900.0, epsilon = 1e-9);
    }
}

#[test]
fn personal_roommate_flag_blocks_groups() {
    // b proposes to share but refuses roommates in general
    let outcome = Market::new(
        [person("a", 900.0, 1, true), person("b", 900.0, 1, false)],
        [apartment(0, 2, true)],
    )
    .unwrap()
    .run();

    assert_eq!(outcome.assignments[0].group.len(), 1);
}

#[test]
fn capacity_limits_group_size() {
    let outcome = Market::new(
        [
            person("a", 500.0, 2, true),
            person("b", 500.0, 2, true),
            person("c", 500.0, 2, true),
        ],
        [apartment(0, 2, true)],
    )
    .unwrap()
    .run();

    let record = &outcome.assignments[0];
    assert_eq!(record.group.len(), 2);
    assert_eq!(record.winning_bid, 1000.0);
    assert_eq!(outcome.unassigned.len(), 1);
}

#[test]
fn negative_member_bid_sinks_the_group() {
    let picky = person_with(
        "picky",
        true,
        Preferences {
            bid_amount: 2000.0,
            max_roommates: 1,
            dryer: AmenityPreference {
                required: true,
                worth: 2500.0,
            },
            ..Default::default()
        },
    );
    let outcome = Market::new(
        [picky, person("easy", 300.0, 1, true)],
        [apartment(0, 2, true)],
    )
    .unwrap()
    .run();

    let record = &outcome.assignments[0];
    assert_eq!(record.group.members(), &[PersonId::from("easy")]);
    assert_eq!(record.second_bid, 0.0);
    assert_eq!(outcome.termination, Termination::ApartmentsExhausted);
}

#[test]
fn unacceptable_apartments_end_the_pass() {
    let picky = person_with(
        "picky",
        false,
        Preferences {
            bid_amount: 100.0,
            bedrooms: RangePreference {
                min: 3.0,
                max: 4.0,
                worth: 100.0,
            },
            ..Default::default()
        },
    );
    let outcome = Market::new([picky], [apartment(0, 1, false), apartment(1, 2, false)])
        .unwrap()
        .run();

    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.rounds, 0);
    assert_eq!(outcome.termination, Termination::NoBids);
    assert_eq!(outcome.vacant.len(), 2);
}

#[test]
fn equal_apartments_go_lowest_id_first() {
    let outcome = Market::new(
        [person("a", 1000.0, 0, false), person("b", 800.0, 0, false)],
        [apartment(5, 1, false), apartment(2, 1, false)],
    )
    .unwrap()
    .run();

    assert_eq!(outcome.assignments.len(), 2);
    assert_eq!(outcome.assignments[0].apartment.id, ApartmentId(2));
    assert_eq!(outcome.assignments[0].group.members(), &[PersonId::from("a")]);
    assert_eq!(outcome.assignments[0].second_bid, 800.0);
    assert_eq!(outcome.assignments[1].apartment.id, ApartmentId(5));
    assert_eq!(outcome.assignments[1].second_bid, 0.0);
}

#[test]
fn highest_bid_across_apartments_wins_the_round() {
    let wants_big = person_with(
        "big",
        false,
        Preferences {
            bid_amount: 1200.0,
            bedrooms: RangePreference {
                min: 2.0,
                max: 2.0,
                worth: 700.0,
            },
            ..Default::default()
        },
    );
    let outcome = Market::new(
        [wants_big, person("any", 1000.0, 0, false)],
        [apartment(0, 1, false), apartment(1, 2, false)],
    )
    .unwrap()
    .run();

    // Round 1: "big" bids 1200 on the two-bedroom, the best bid anywhere
    let first = &outcome.assignments[0];
    assert_eq!(first.apartment.id, ApartmentId(1));
    assert_eq!(first.group.members(), &[PersonId::from("big")]);
    assert_eq!(first.second_bid, 1000.0);

    let second = &outcome.assignments[1];
    assert_eq!(second.apartment.id, ApartmentId(0));
    assert_eq!(second.group.members(), &[PersonId::from("any")]);
}

#[test]
fn compatible_roommates_are_grouped() {
    let mut people = Vec::new();
    for (id, cleanliness) in [("tidy", 95.0), ("messy", 5.0), ("neat", 90.0)] {
        people.push(person_with(
            id,
            true,
            Preferences {
                bid_amount: 600.0,
                max_roommates: 1,
                social: sociable(cleanliness),
                ..Default::default()
            },
        ));
    }

    let outcome = Market::new(people, [apartment(0, 2, true)]).unwrap().run();
    let record = &outcome.assignments[0];
    assert!(record.group.contains(&PersonId::from("tidy")));
    assert!(record.group.contains(&PersonId::from("neat")));
    // The runner-up is another pair, tied at 1200
    assert_eq!(record.second_bid, 1200.0);
    assert_abs_diff_eq!(record.total_payment(), 1200.0, epsilon = 1e-9);
}

#[test]
fn duplicate_people_are_rejected() {
    let result = Market::new(
        [person("a", 1.0, 0, false), person("a", 2.0, 0, false)],
        [apartment(0, 1, false)],
    );
    assert_eq!(
        result.err(),
        Some(MarketError::DuplicatePerson(PersonId::from("a")))
    );
}

#[test]
fn empty_inputs_terminate_immediately() {
    let outcome = Market::new([], [apartment(0, 1, false)]).unwrap().run();
    assert_eq!(outcome.termination, Termination::PeopleExhausted);
    assert_eq!(outcome.rounds, 0);

    let outcome = Market::new([person("a", 1.0, 0, false)], []).unwrap().run();
    assert_eq!(outcome.termination, Termination::ApartmentsExhausted);
    assert_eq!(outcome.unassigned.len(), 1);
}

// Proposes nobody, whatever the pool
struct NoGroups;

impl GroupStrategy for NoGroups {
    fn generate(&self, _pool: &Map<PersonId, Applicant>) -> Set<Group> {
        Set::default()
    }
}

#[test]
fn strategy_without_groups_ends_the_pass() {
    let outcome = Market::with_strategy(
        [person("a", 1000.0, 0, false)],
        [apartment(0, 1, false)],
        NoGroups,
    )
    .unwrap()
    .run();

    assert_eq!(outcome.termination, Termination::NoGroups);
    assert_eq!(outcome.rounds, 0);
    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.unassigned.len(), 1);
    assert_eq!(outcome.vacant.len(), 1);
}
