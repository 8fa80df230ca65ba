use super::{ApartmentId, Group, Map, PersonId};

/// A group's eligible bid for one apartment within one round.
#[derive(Debug, Clone, PartialEq)]
pub struct BidEvent {
    /// The bidding group
    pub group: Group,
    /// The apartment being bid on
    pub apartment: ApartmentId,
    /// The sum of the members' adjusted bids
    pub total: f64,
    /// Each member's adjusted bid for the apartment
    pub bids: Map<PersonId, f64>,
}

impl BidEvent {
    /// The number of people in the bidding group
    pub fn group_size(&self) -> usize {
        self.group.len()
    }

    /// The fraction of the group total contributed by `id`, if they are a member
    pub fn share(&self, id: &PersonId) -> Option<f64> {
        self.bids.get(id).map(|bid| bid / self.total)
    }
}
