use super::Set;

/// The apartment feature categories a person can state a requirement for.
///
/// This is a closed schema: every requirement a person may express maps onto
/// exactly one of these, and each carries its own monetary "worth".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Floor area of the unit, in square meters
    Size,
    /// Number of windows in the unit
    Windows,
    /// Compass directions the windows face
    Directions,
    /// Total window area, in square meters
    WindowArea,
    /// Number of bedrooms
    Bedrooms,
    /// Number of bathrooms
    Bathrooms,
    /// Dishwasher included
    Dishwasher,
    /// Washing machine included
    Washer,
    /// Dryer included
    Dryer,
}

impl Feature {
    /// Every feature, in the order they are appraised
    pub const ALL: [Feature; 9] = [
        Feature::Size,
        Feature::Windows,
        Feature::Directions,
        Feature::WindowArea,
        Feature::Bedrooms,
        Feature::Bathrooms,
        Feature::Dishwasher,
        Feature::Washer,
        Feature::Dryer,
    ];
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feature::Size => "size",
            Feature::Windows => "windows",
            Feature::Directions => "window directions",
            Feature::WindowArea => "window area",
            Feature::Bedrooms => "bedrooms",
            Feature::Bathrooms => "bathrooms",
            Feature::Dishwasher => "dishwasher",
            Feature::Washer => "washer",
            Feature::Dryer => "dryer",
        };
        f.write_str(name)
    }
}

/// An inclusive range requirement on a numeric apartment attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePreference {
    /// The smallest acceptable value
    pub min: f64,
    /// The largest acceptable value (may be infinite)
    pub max: f64,
    /// The amount deducted from the base bid when the range is not met
    pub worth: f64,
}

impl RangePreference {
    /// A range that accepts anything at or above `min` and costs nothing to miss
    pub const fn unbounded(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
            worth: 0.0,
        }
    }

    /// Whether `value` lies within the inclusive range
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A requirement that at least one window faces one of the listed directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionPreference {
    /// The acceptable directions; empty means "no requirement"
    pub directions: Set<String>,
    /// The amount deducted from the base bid when no direction matches
    pub worth: f64,
}

impl DirectionPreference {
    /// Satisfied when no direction is requested, or any requested direction is offered
    pub fn accepts(&self, offered: &Set<String>) -> bool {
        self.directions.is_empty() || self.directions.iter().any(|d| offered.contains(d))
    }
}

/// A requirement that an amenity is included.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmenityPreference {
    /// Whether the amenity is required at all
    pub required: bool,
    /// The amount deducted from the base bid when it is required and missing
    pub worth: f64,
}

impl AmenityPreference {
    /// Satisfied when not required, or provided
    pub fn accepts(&self, provided: bool) -> bool {
        !self.required || provided
    }
}

/// Lifestyle answers used to find compatible roommates.
///
/// The four scores are on a 0–100 scale; the two times are ranges of minutes
/// after midnight. Missing answers stay `None` and count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SocialProfile {
    #[allow(missing_docs)]
    pub cleanliness: Option<f64>,
    #[allow(missing_docs)]
    pub quietness: Option<f64>,
    #[allow(missing_docs)]
    pub guests: Option<f64>,
    #[allow(missing_docs)]
    pub personal_space: Option<f64>,
    /// Usual bedtime window
    pub sleep_time: Option<(f64, f64)>,
    /// Usual wake-up window
    pub wake_time: Option<(f64, f64)>,
}

/// The full, typed preference record of a person.
///
/// Every feature has an explicit default: ranges on size, windows and window
/// area default to `[0, ∞)`, ranges on bedrooms and bathrooms to `[1, ∞)`,
/// amenities are not required, and every worth is zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawPreferences", into = "RawPreferences")
)]
pub struct Preferences {
    /// The most roommates this person is willing to live with
    pub max_roommates: usize,
    /// What this person would pay for an apartment meeting every requirement
    pub bid_amount: f64,
    #[allow(missing_docs)]
    pub size: RangePreference,
    #[allow(missing_docs)]
    pub windows: RangePreference,
    #[allow(missing_docs)]
    pub directions: DirectionPreference,
    #[allow(missing_docs)]
    pub window_area: RangePreference,
    #[allow(missing_docs)]
    pub bedrooms: RangePreference,
    #[allow(missing_docs)]
    pub bathrooms: RangePreference,
    #[allow(missing_docs)]
    pub dishwasher: AmenityPreference,
    #[allow(missing_docs)]
    pub washer: AmenityPreference,
    #[allow(missing_docs)]
    pub dryer: AmenityPreference,
    #[allow(missing_docs)]
    pub social: SocialProfile,
}

const SIZE_DEFAULT: RangePreference = RangePreference::unbounded(0.0);
const WINDOWS_DEFAULT: RangePreference = RangePreference::unbounded(0.0);
const WINDOW_AREA_DEFAULT: RangePreference = RangePreference::unbounded(0.0);
const BEDROOMS_DEFAULT: RangePreference = RangePreference::unbounded(1.0);
const BATHROOMS_DEFAULT: RangePreference = RangePreference::unbounded(1.0);

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_roommates: 0,
            bid_amount: 0.0,
            size: SIZE_DEFAULT,
            windows: WINDOWS_DEFAULT,
            directions: DirectionPreference::default(),
            window_area: WINDOW_AREA_DEFAULT,
            bedrooms: BEDROOMS_DEFAULT,
            bathrooms: BATHROOMS_DEFAULT,
            dishwasher: AmenityPreference::default(),
            washer: AmenityPreference::default(),
            dryer: AmenityPreference::default(),
            social: SocialProfile::default(),
        }
    }
}

impl Preferences {
    /// The amount deducted from the base bid when `feature` is not met
    pub fn worth(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Size => self.size.worth,
            Feature::Windows => self.windows.worth,
            Feature::Directions => self.directions.worth,
            Feature::WindowArea => self.window_area.worth,
            Feature::Bedrooms => self.bedrooms.worth,
            Feature::Bathrooms => self.bathrooms.worth,
            Feature::Dishwasher => self.dishwasher.worth,
            Feature::Washer => self.washer.worth,
            Feature::Dryer => self.dryer.worth,
        }
    }
}

// Preference payloads arrive as loosely-structured JSON objects. We accept
// them through a "raw" struct whose fields mirror the wire keys one-to-one and
// are all optional, then apply the defaults above while converting into the
// rich `Preferences`. Unknown keys are ignored by serde.

/// The wire representation of [`Preferences`].
#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_roommates: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bid_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sq_meters: Option<RawRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sq_meters_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_windows: Option<RawRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_windows_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_directions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_directions_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_window_size: Option<RawRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_window_size_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_bedrooms: Option<RawRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_bedrooms_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_bathrooms: Option<RawRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_bathrooms_worth: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_dishwasher: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dishwasher_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_washer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    washer_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_dryer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dryer_worth: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cleanliness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quietness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guests: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    personal_space: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep_time: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wake_time: Option<(f64, f64)>,
}

// A range is written `[min, max]`; JSON has no infinity, so an open upper end is `null`.
#[cfg(feature = "serde")]
type RawRange = (f64, Option<f64>);

#[cfg(feature = "serde")]
fn range_from(
    raw: Option<RawRange>,
    worth: Option<f64>,
    default: RangePreference,
) -> RangePreference {
    let (min, max) = match raw {
        Some((min, max)) => (min, max.unwrap_or(f64::INFINITY)),
        None => (default.min, default.max),
    };
    RangePreference {
        min,
        max,
        worth: worth.unwrap_or(default.worth),
    }
}

#[cfg(feature = "serde")]
fn range_into(range: RangePreference, default: RangePreference) -> Option<RawRange> {
    if range.min == default.min && range.max == default.max {
        None
    } else {
        let max = if range.max.is_finite() { Some(range.max) } else { None };
        Some((range.min, max))
    }
}

#[cfg(feature = "serde")]
fn nonzero(worth: f64) -> Option<f64> {
    if worth == 0.0 { None } else { Some(worth) }
}

#[cfg(feature = "serde")]
impl From<RawPreferences> for Preferences {
    fn from(raw: RawPreferences) -> Self {
        Self {
            max_roommates: raw.max_roommates.unwrap_or(0),
            bid_amount: raw.bid_amount.unwrap_or(0.0),
            size: range_from(raw.sq_meters, raw.sq_meters_worth, SIZE_DEFAULT),
            windows: range_from(raw.num_windows, raw.num_windows_worth, WINDOWS_DEFAULT),
            directions: DirectionPreference {
                directions: raw.window_directions.unwrap_or_default().into_iter().collect(),
                worth: raw.window_directions_worth.unwrap_or(0.0),
            },
            window_area: range_from(
                raw.total_window_size,
                raw.total_window_size_worth,
                WINDOW_AREA_DEFAULT,
            ),
            bedrooms: range_from(raw.num_bedrooms, raw.num_bedrooms_worth, BEDROOMS_DEFAULT),
            bathrooms: range_from(raw.num_bathrooms, raw.num_bathrooms_worth, BATHROOMS_DEFAULT),
            dishwasher: AmenityPreference {
                required: raw.has_dishwasher.unwrap_or(false),
                worth: raw.dishwasher_worth.unwrap_or(0.0),
            },
            washer: AmenityPreference {
                required: raw.has_washer.unwrap_or(false),
                worth: raw.washer_worth.unwrap_or(0.0),
            },
            dryer: AmenityPreference {
                required: raw.has_dryer.unwrap_or(false),
                worth: raw.dryer_worth.unwrap_or(0.0),
            },
            social: SocialProfile {
                cleanliness: raw.cleanliness,
                quietness: raw.quietness,
                guests: raw.guests,
                personal_space: raw.personal_space,
                sleep_time: raw.sleep_time,
                wake_time: raw.wake_time,
            },
        }
    }
}

#[cfg(feature = "serde")]
impl From<Preferences> for RawPreferences {
    fn from(value: Preferences) -> Self {
        let directions = value.directions.directions;
        Self {
            max_roommates: Some(value.max_roommates),
            bid_amount: Some(value.bid_amount),
            sq_meters: range_into(value.size, SIZE_DEFAULT),
            sq_meters_worth: nonzero(value.size.worth),
            num_windows: range_into(value.windows, WINDOWS_DEFAULT),
            num_windows_worth: nonzero(value.windows.worth),
            window_directions: if directions.is_empty() {
                None
            } else {
                Some(directions.into_iter().collect())
            },
            window_directions_worth: nonzero(value.directions.worth),
            total_window_size: range_into(value.window_area, WINDOW_AREA_DEFAULT),
            total_window_size_worth: nonzero(value.window_area.worth),
            num_bedrooms: range_into(value.bedrooms, BEDROOMS_DEFAULT),
            num_bedrooms_worth: nonzero(value.bedrooms.worth),
            num_bathrooms: range_into(value.bathrooms, BATHROOMS_DEFAULT),
            num_bathrooms_worth: nonzero(value.bathrooms.worth),
            has_dishwasher: value.dishwasher.required.then_some(true),
            dishwasher_worth: nonzero(value.dishwasher.worth),
            has_washer: value.washer.required.then_some(true),
            washer_worth: nonzero(value.washer.worth),
            has_dryer: value.dryer.required.then_some(true),
            dryer_worth: nonzero(value.dryer.worth),
            cleanliness: value.social.cleanliness,
            quietness: value.social.quietness,
            guests: value.social.guests,
            personal_space: value.social.personal_space,
            sleep_time: value.social.sleep_time,
            wake_time: value.social.wake_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.size.min, 0.0);
        assert!(prefs.size.max.is_infinite());
        assert_eq!(prefs.bedrooms.min, 1.0);
        assert_eq!(prefs.bathrooms.min, 1.0);
        assert!(!prefs.dishwasher.required);
    }

    #[test]
    fn test_from_payload() {
        let prefs: Preferences = serde_json::from_str(
            r#"{
                "sqMeters": [60, 120], "sqMetersWorth": 60,
                "numBedrooms": [2, 2], "numBedroomsWorth": 80,
                "bidAmount": 1200, "maxRoommates": 2,
                "cleanliness": 70, "quietness": 80, "guests": 50, "personalSpace": 70,
                "sleepTime": [0, 120], "wakeTime": [480, 600],
                "hasDishwasher": true, "dishwasherWorth": 20,
                "windowDirections": ["North", "East"],
                "favouriteColour": "green"
            }"#,
        )
        .unwrap();

        assert_eq!(prefs.max_roommates, 2);
        assert_eq!(prefs.bid_amount, 1200.0);
        assert_eq!(prefs.size, RangePreference { min: 60.0, max: 120.0, worth: 60.0 });
        assert_eq!(prefs.bedrooms, RangePreference { min: 2.0, max: 2.0, worth: 80.0 });
        assert_eq!(prefs.bathrooms, BATHROOMS_DEFAULT);
        assert_eq!(prefs.dishwasher, AmenityPreference { required: true, worth: 20.0 });
        assert_eq!(prefs.directions.directions.len(), 2);
        assert_eq!(prefs.directions.worth, 0.0);
        assert_eq!(prefs.social.sleep_time, Some((0.0, 120.0)));
        assert_eq!(prefs.social.personal_space, Some(70.0));
    }

    #[test]
    fn test_open_range() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"sqMeters": [80, null], "sqMetersWorth": 5}"#).unwrap();
        assert!(prefs.size.contains(1e9));
        assert!(!prefs.size.contains(79.0));

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["sqMeters"], serde_json::json!([80.0, null]));
        assert!(value.get("numBedrooms").is_none());
    }

    #[test]
    fn test_malformed_payload() {
        assert!(serde_json::from_str::<Preferences>(r#"{"maxRoommates": -1}"#).is_err());
        assert!(serde_json::from_str::<Preferences>(r#"{"sqMeters": "big"}"#).is_err());
        assert!(serde_json::from_str::<Preferences>("not json").is_err());
    }

    #[test]
    fn test_roundtrip_keeps_requirements() {
        let mut prefs = Preferences {
            max_roommates: 1,
            bid_amount: 900.0,
            ..Default::default()
        };
        prefs.washer = AmenityPreference { required: true, worth: 30.0 };
        prefs.bedrooms = RangePreference { min: 2.0, max: 3.0, worth: 100.0 };

        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_direction_and_amenity_rules() {
        let offered: Set<String> = ["South".to_owned()].into_iter().collect();
        assert!(DirectionPreference::default().accepts(&offered));

        let wants_north = DirectionPreference {
            directions: ["North".to_owned()].into_iter().collect(),
            worth: 10.0,
        };
        assert!(!wants_north.accepts(&offered));
        assert!(!wants_north.accepts(&Set::default()));

        let dryer = AmenityPreference { required: true, worth: 5.0 };
        assert!(dryer.accepts(true));
        assert!(!dryer.accepts(false));
        assert!(AmenityPreference::default().accepts(false));
    }
}
