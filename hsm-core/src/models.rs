mod apartment;
mod assignment;
mod bid;
mod group;
mod map;
mod person;
mod preferences;

pub use apartment::Apartment;
pub use assignment::{AssignmentRecord, Share};
pub use bid::BidEvent;
pub use group::Group;
pub use map::{Map, Set};
pub use person::Person;
pub use preferences::{
    AmenityPreference, DirectionPreference, Feature, Preferences, RangePreference, SocialProfile,
};

#[cfg(feature = "serde")]
pub use preferences::RawPreferences;

/// The various ways in which a person or apartment record can be invalid
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// Error when a numeric field is NaN or infinite
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    /// Error when a numeric field that measures a quantity is negative
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// Reject NaN and infinite values
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

/// Reject NaN, infinite and negative values
pub(crate) fn measure(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        Err(ValidationError::Negative(field))
    } else {
        Ok(value)
    }
}

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $struct {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_wrapper!(PersonId);

// Ids are compared in natural order: runs of digits compare by value, so "2"
// sorts before "10" and "P2" before "P10". Ids that only differ in leading
// zeros fall back to plain string order.
impl Ord for PersonId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        natural_cmp(&self.0, &other.0).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for PersonId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

fn natural_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    let (mut a, mut b) = (a, b);
    loop {
        let (Some(x), Some(y)) = (a.chars().next(), b.chars().next()) else {
            return a.len().cmp(&b.len());
        };

        let ordering = if x.is_ascii_digit() && y.is_ascii_digit() {
            let (da, ra) = split_digits(a);
            let (db, rb) = split_digits(b);
            a = ra;
            b = rb;
            let (da, db) = (da.trim_start_matches('0'), db.trim_start_matches('0'));
            da.len().cmp(&db.len()).then_with(|| da.cmp(db))
        } else {
            a = &a[x.len_utf8()..];
            b = &b[y.len_utf8()..];
            x.cmp(&y)
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Apartments are identified by their position in the listing they were loaded from
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ApartmentId(pub usize);

impl std::fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
