use crate::{Applicant, Set, appraise};
use hsm_core::models::{Apartment, BidEvent, Group, Map, PersonId};
use tracing::{Level, event};

/// The bids collected in one round, over a fixed pool and set of groups.
pub struct Round<'a> {
    pool: &'a Map<PersonId, Applicant>,
    groups: &'a Set<Group>,
}

/// The apartment chosen in a round, with every surviving bid for it.
#[derive(Debug)]
pub struct Selection<'a> {
    /// The apartment attracting the round's highest bid
    pub apartment: &'a Apartment,
    /// The surviving bids, highest total first; never empty
    pub bids: Vec<BidEvent>,
}

impl Selection<'_> {
    /// The winning bid
    pub fn best(&self) -> &BidEvent {
        &self.bids[0]
    }

    /// The runner-up total for the apartment, or 0 without a runner-up
    pub fn second_total(&self) -> f64 {
        self.bids.get(1).map(|bid| bid.total).unwrap_or(0.0)
    }
}

impl<'a> Round<'a> {
    /// Prepare a round in which `groups`, drawn from `pool`, bid.
    pub fn new(pool: &'a Map<PersonId, Applicant>, groups: &'a Set<Group>) -> Self {
        Self { pool, groups }
    }

    /// Every eligible bid for `apartment`, sorted by descending total.
    ///
    /// A group is eligible when the apartment admits its size, every member
    /// accepts roommates (for groups larger than one), every member's
    /// adjusted bid is non-negative and the total is strictly positive.
    ///
    /// The sort is stable: equal totals keep the order in which the groups
    /// were proposed.
    pub fn bids_for(&self, apartment: &Apartment) -> Vec<BidEvent> {
        let mut bids = self
            .groups
            .iter()
            .filter(|group| apartment.admits(group.len()))
            .filter_map(|group| self.bid(group, apartment))
            .collect::<Vec<_>>();

        bids.sort_by(|a, b| b.total.total_cmp(&a.total));
        bids
    }

    fn bid(&self, group: &Group, apartment: &Apartment) -> Option<BidEvent> {
        let size = group.len();
        let mut bids = Map::default();
        let mut total = 0.0;

        for id in group.members() {
            let person = &self.pool.get(id)?.person;
            if size > 1 && !person.allows_roommates {
                return None;
            }

            let appraisal = appraise(person, apartment, size);
            if !appraisal.is_acceptable() {
                return None;
            }

            total += appraisal.bid;
            bids.insert(id.clone(), appraisal.bid);
        }

        (total > 0.0).then(|| BidEvent {
            group: group.clone(),
            apartment: apartment.id,
            total,
            bids,
        })
    }

    /// Choose the apartment whose best bid is the highest of the round.
    ///
    /// Apartments whose best bids tie are resolved in favor of the lowest
    /// apartment id. Returns `None` if no apartment received an eligible bid.
    pub fn select<'b, I>(&self, apartments: I) -> Option<Selection<'b>>
    where
        I: IntoIterator<Item = &'b Apartment>,
    {
        let mut selected: Option<Selection<'b>> = None;

        for apartment in apartments {
            let bids = self.bids_for(apartment);
            let Some(top) = bids.first() else {
                event!(Level::DEBUG, apartment = %apartment.name, "no eligible bids");
                continue;
            };

            event!(
                Level::DEBUG,
                apartment = %apartment.name,
                bids = bids.len(),
                best = top.total,
                group = %top.group
            );

            let better = match &selected {
                None => true,
                Some(current) => {
                    let incumbent = current.best().total;
                    top.total > incumbent
                        || (top.total == incumbent && apartment.id < current.apartment.id)
                }
            };

            if better {
                selected = Some(Selection { apartment, bids });
            }
        }

        selected
    }
}
