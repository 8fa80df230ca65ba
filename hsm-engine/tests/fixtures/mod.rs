#![allow(dead_code)]
use hsm_core::models::{Apartment, ApartmentId, Person, Preferences, Set, SocialProfile};

// Shared builders for the integration tests

pub fn apartment(id: usize, bedrooms: u32, allows_roommates: bool) -> Apartment {
    Apartment {
        id: ApartmentId(id),
        name: format!("Apartment {id}"),
        size: 70.0,
        windows: 4,
        directions: Set::from_iter(["South".to_owned()]),
        window_area: 8.0,
        bedrooms,
        bathrooms: 1.0,
        dishwasher: true,
        washer: true,
        dryer: false,
        allows_roommates,
    }
}

pub fn person(id: &str, bid: f64, max_roommates: usize, allows_roommates: bool) -> Person {
    person_with(id, allows_roommates, Preferences {
        bid_amount: bid,
        max_roommates,
        ..Default::default()
    })
}

pub fn person_with(id: &str, allows_roommates: bool, preferences: Preferences) -> Person {
    Person::new(id, format!("Person {id}"), allows_roommates, preferences).unwrap()
}

pub fn sociable(cleanliness: f64) -> SocialProfile {
    SocialProfile {
        cleanliness: Some(cleanliness),
        quietness: Some(50.0),
        guests: Some(50.0),
        personal_space: Some(50.0),
        sleep_time: Some((1380.0, 1440.0)),
        wake_time: Some((420.0, 480.0)),
    }
}
