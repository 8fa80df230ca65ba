use crate::{Applicant, Set};
use hsm_core::models::{Group, Map, PersonId};
use std::iter;

/// A strategy for proposing the groups that will bid in a round.
///
/// Implementations must be deterministic functions of the pool: the same
/// unassigned applicants, in the same order, yield the same groups in the
/// same order. The order matters, as it breaks ties between equal bids.
pub trait GroupStrategy {
    /// Propose every candidate group drawn from the unassigned `pool`.
    ///
    /// The returned set contains no group twice, and no group lists a member
    /// twice.
    fn generate(&self, pool: &Map<PersonId, Applicant>) -> Set<Group>;
}

/// The anchor-centric greedy strategy.
///
/// Every applicant in turn acts as an anchor and proposes themselves alone,
/// then themselves with their 1, 2, ... most compatible fellow applicants, up
/// to the number of roommates they accept. A fellow applicant is only
/// considered for a group of k roommates if they too accept at least k
/// roommates. Equally compatible candidates are taken in pool order.
///
/// This is a local heuristic, not a search over all coalitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorGreedy;

impl GroupStrategy for AnchorGreedy {
    fn generate(&self, pool: &Map<PersonId, Applicant>) -> Set<Group> {
        let mut groups = Set::default();

        for (anchor_id, anchor) in pool.iter() {
            groups.insert(Group::singleton(anchor_id.clone()));

            let max_roommates = anchor.person.max_roommates();
            if max_roommates == 0 {
                continue;
            }

            // Rank everyone else once; filtering a stably sorted list
            // preserves the ranking for every k.
            let mut ranked = pool
                .iter()
                .filter(|(id, _)| *id != anchor_id)
                .map(|(id, candidate)| {
                    (
                        anchor.social.compatibility(&candidate.social),
                        id,
                        candidate.person.max_roommates(),
                    )
                })
                .collect::<Vec<_>>();
            ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

            for k in 1..=max_roommates.min(ranked.len()) {
                let roommates = ranked
                    .iter()
                    .filter(|(_, _, accepts)| *accepts >= k)
                    .take(k)
                    .map(|(_, id, _)| (*id).clone())
                    .collect::<Vec<_>>();

                if roommates.len() < k {
                    continue;
                }

                groups.insert(iter::once(anchor_id.clone()).chain(roommates).collect());
            }
        }

        groups
    }
}
