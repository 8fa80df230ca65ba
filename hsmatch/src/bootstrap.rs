//! Sample tables, for trying the matcher out without real data.

use crate::loader::{ApartmentRow, PersonRow};
use hsm_core::models::{
    AmenityPreference, Apartment, ApartmentId, DirectionPreference, Person, Preferences,
    RangePreference, Set, SocialProfile, ValidationError,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;

const DIRECTIONS: [&str; 4] = ["North", "East", "South", "West"];

/// The four canonical applicants, exactly as they appear in a fresh table
pub fn dummy_people() -> Vec<PersonRow> {
    [
        (
            "1",
            "Alice",
            true,
            r#"{"sqMeters": [50, 100], "sqMetersWorth": 50, "numBedrooms": [2, 3], "numBedroomsWorth": 100, "bidAmount": 1000, "maxRoommates": 1, "cleanliness": 80, "quietness": 70, "guests": 20, "personalSpace": 90, "sleepTime": [1380, 1440], "wakeTime": [420, 540]}"#,
        ),
        (
            "2",
            "Bob",
            true,
            r#"{"sqMeters": [60, 120], "sqMetersWorth": 60, "numBedrooms": [2, 2], "numBedroomsWorth": 80, "bidAmount": 1200, "maxRoommates": 2, "cleanliness": 70, "quietness": 80, "guests": 50, "personalSpace": 70, "sleepTime": [0, 120], "wakeTime": [480, 600], "hasDishwasher": true, "dishwasherWorth": 20}"#,
        ),
        (
            "3",
            "Charlie",
            false,
            r#"{"sqMeters": [40, 80], "sqMetersWorth": 0, "numBedrooms": [1, 1], "numBedroomsWorth": 0, "bidAmount": 800, "maxRoommates": 0, "cleanliness": 90, "quietness": 90, "guests": 10, "personalSpace": 100, "sleepTime": [60, 180], "wakeTime": [540, 660]}"#,
        ),
        (
            "4",
            "David",
            true,
            r#"{"sqMeters": [100, 200], "sqMetersWorth": 100, "numBedrooms": [3, 5], "numBedroomsWorth": 200, "bidAmount": 2000, "maxRoommates": 3, "cleanliness": 50, "quietness": 50, "guests": 80, "personalSpace": 50, "sleepTime": [120, 240], "wakeTime": [600, 720], "hasWasher": true, "washerWorth": 30}"#,
        ),
    ]
    .into_iter()
    .map(|(id, name, allow_roommates, preferences)| PersonRow {
        id: id.to_owned(),
        name: name.to_owned(),
        allow_roommates: crate::loader::unflag(allow_roommates),
        preferences: preferences.to_owned(),
    })
    .collect()
}

/// `count` applicants with preferences drawn from a generator seeded by `seed`
pub fn random_people(count: usize, seed: u64) -> Result<Vec<Person>, ValidationError> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let low_size = rng.random_range(30..=90) as f64;
            let low_bedrooms = rng.random_range(1..=3) as f64;
            let bedtime = rng.random_range(0..1440) as f64;
            let waketime = rng.random_range(300..720) as f64;
            let facing = if rng.random_bool(0.4) {
                Set::from_iter([DIRECTIONS[rng.random_range(0..DIRECTIONS.len())].to_owned()])
            } else {
                Set::default()
            };

            let preferences = Preferences {
                max_roommates: rng.random_range(0..=3),
                bid_amount: rng.random_range(500..=2500) as f64,
                size: RangePreference {
                    min: low_size,
                    max: low_size + rng.random_range(20..=100) as f64,
                    worth: rng.random_range(0..=100) as f64,
                },
                bedrooms: RangePreference {
                    min: low_bedrooms,
                    max: low_bedrooms + rng.random_range(0..=2) as f64,
                    worth: rng.random_range(0..=200) as f64,
                },
                directions: DirectionPreference {
                    directions: facing,
                    worth: rng.random_range(0..=80) as f64,
                },
                dishwasher: AmenityPreference {
                    required: rng.random_bool(0.3),
                    worth: rng.random_range(0..=50) as f64,
                },
                washer: AmenityPreference {
                    required: rng.random_bool(0.3),
                    worth: rng.random_range(0..=50) as f64,
                },
                social: SocialProfile {
                    cleanliness: Some(rng.random_range(0..=100) as f64),
                    quietness: Some(rng.random_range(0..=100) as f64),
                    guests: Some(rng.random_range(0..=100) as f64),
                    personal_space: Some(rng.random_range(0..=100) as f64),
                    sleep_time: Some((bedtime, (bedtime + 120.0).min(1440.0))),
                    wake_time: Some((waketime, waketime + 120.0)),
                },
                ..Default::default()
            };

            let id = (i + 1).to_string();
            Person::new(
                id.clone(),
                format!("Applicant {id}"),
                rng.random_bool(0.75),
                preferences,
            )
        })
        .collect()
}

/// A small listing that covers studios as well as shared flats
pub fn sample_apartments() -> Vec<Apartment> {
    let facing = |directions: &[&str]| directions.iter().map(|d| d.to_string()).collect::<Set<_>>();

    vec![
        Apartment {
            id: ApartmentId(0),
            name: "Birch Studio".to_owned(),
            size: 42.0,
            windows: 2,
            directions: facing(&["South"]),
            window_area: 3.0,
            bedrooms: 1,
            bathrooms: 1.0,
            dishwasher: false,
            washer: false,
            dryer: false,
            allows_roommates: false,
        },
        Apartment {
            id: ApartmentId(1),
            name: "Cedar Loft".to_owned(),
            size: 68.0,
            windows: 5,
            directions: facing(&["North", "East"]),
            window_area: 7.5,
            bedrooms: 2,
            bathrooms: 1.0,
            dishwasher: true,
            washer: false,
            dryer: false,
            allows_roommates: true,
        },
        Apartment {
            id: ApartmentId(2),
            name: "Maple House".to_owned(),
            size: 120.0,
            windows: 9,
            directions: facing(&["East", "South", "West"]),
            window_area: 14.0,
            bedrooms: 3,
            bathrooms: 2.0,
            dishwasher: true,
            washer: true,
            dryer: true,
            allows_roommates: true,
        },
        Apartment {
            id: ApartmentId(3),
            name: "Oak Flat".to_owned(),
            size: 85.0,
            windows: 6,
            directions: facing(&["West"]),
            window_area: 8.0,
            bedrooms: 2,
            bathrooms: 1.5,
            dishwasher: false,
            washer: true,
            dryer: false,
            allows_roommates: true,
        },
        Apartment {
            id: ApartmentId(4),
            name: "Willow Suite".to_owned(),
            size: 160.0,
            windows: 12,
            directions: facing(&["North", "South"]),
            window_area: 18.5,
            bedrooms: 4,
            bathrooms: 2.5,
            dishwasher: true,
            washer: true,
            dryer: false,
            allows_roommates: true,
        },
    ]
}

/// Write an applicant table
pub fn write_people<W: Write>(output: W, people: &[PersonRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for row in people {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write an apartment listing, joining window directions with `delimiter`
pub fn write_apartments<W: Write>(
    output: W,
    apartments: &[Apartment],
    delimiter: &str,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for apartment in apartments {
        writer.serialize(ApartmentRow::new(apartment, delimiter))?;
    }
    writer.flush()?;
    Ok(())
}
