use super::{Apartment, Group, Map, PersonId};

/// A finalized assignment of an apartment to a group.
///
/// Records are created once per successful round and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRecord {
    /// The apartment, removed from the available set
    pub apartment: Apartment,
    /// The winning group
    pub group: Group,
    /// The group's winning total bid
    pub winning_bid: f64,
    /// The runner-up total bid for the same apartment, or 0 if there was none
    pub second_bid: f64,
    /// What each member bid and pays, in group order
    pub shares: Map<PersonId, Share>,
}

/// One member's part of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    /// The member's display name
    pub name: String,
    /// The member's adjusted bid within the winning group
    pub adjusted_bid: f64,
    /// The member's second-price payment
    pub payment: f64,
}

impl AssignmentRecord {
    /// The sum of all member payments
    pub fn total_payment(&self) -> f64 {
        self.shares.values().map(|share| share.payment).sum()
    }

    /// The members' names, in group order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.shares.values().map(|share| share.name.as_str())
    }
}
