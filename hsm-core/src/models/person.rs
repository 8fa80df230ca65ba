use super::{PersonId, Preferences, ValidationError, finite};

/// An applicant looking for housing, alone or with roommates.
///
/// A person is built once when the applicant table is loaded and never
/// changes afterwards; whether they have been housed yet is tracked by the
/// matching engine, not by the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// The applicant's identifier, unique within a matching pass
    pub id: PersonId,
    /// The applicant's display name
    pub name: String,
    /// Whether this person is willing to share an apartment at all
    pub allows_roommates: bool,
    /// Everything the applicant asked for, and what each requirement is worth
    pub preferences: Preferences,
}

impl Person {
    /// Creates a new person, rejecting a base bid that is not a finite number.
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        allows_roommates: bool,
        preferences: Preferences,
    ) -> Result<Self, ValidationError> {
        finite("bidAmount", preferences.bid_amount)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            allows_roommates,
            preferences,
        })
    }

    /// The most roommates this person will share with
    pub fn max_roommates(&self) -> usize {
        self.preferences.max_roommates
    }

    /// The bid for an apartment meeting every stated requirement
    pub fn base_bid(&self) -> f64 {
        self.preferences.bid_amount
    }
}
