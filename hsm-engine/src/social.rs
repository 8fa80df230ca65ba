use hsm_core::models::{Preferences, SocialProfile};

// Scores are on a 0-100 scale, times are minutes after midnight
const SCORE_SCALE: f64 = 100.0;
const MINUTES_PER_DAY: f64 = 1440.0;

/// A person's lifestyle, normalized to a fixed six-dimensional vector.
///
/// The dimensions are, in order: cleanliness, quietness, guests, personal
/// space, the midpoint of the sleep-time window and the midpoint of the
/// wake-time window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SocialVector(pub [f64; 6]);

impl SocialVector {
    /// Build the vector from a person's stated preferences.
    ///
    /// Missing answers count as zero.
    pub fn new(preferences: &Preferences) -> Self {
        let SocialProfile {
            cleanliness,
            quietness,
            guests,
            personal_space,
            sleep_time,
            wake_time,
        } = preferences.social;

        let score = |value: Option<f64>| value.unwrap_or(0.0) / SCORE_SCALE;
        let midpoint = |range: Option<(f64, f64)>| {
            let (a, b) = range.unwrap_or((0.0, 0.0));
            (a + b) / 2.0 / MINUTES_PER_DAY
        };

        Self([
            score(cleanliness),
            score(quietness),
            score(guests),
            score(personal_space),
            midpoint(sleep_time),
            midpoint(wake_time),
        ])
    }

    /// How well two people would get along; higher is better.
    ///
    /// This is the negative Euclidean distance between the vectors, so it is
    /// zero for identical lifestyles and unbounded below otherwise.
    pub fn compatibility(&self, other: &Self) -> f64 {
        -self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
