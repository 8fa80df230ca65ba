use hsm_core::models::{BidEvent, Map, PersonId};

/// The ways in which payments cannot be computed
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaymentError {
    /// The winning total must be strictly positive to apportion payments
    #[error("winning bid {0} is not positive")]
    NonPositiveWinningBid(f64),
}

/// Apportion the second-highest bid across the winning group.
///
/// Each member pays `second_bid × (their bid / winning total)`: together the
/// group pays what the apartment would have fetched from the runner-up, split
/// according to each member's share of the winning bid.
pub fn second_price_payments(
    winner: &BidEvent,
    second_bid: f64,
) -> Result<Map<PersonId, f64>, PaymentError> {
    if !(winner.total > 0.0) {
        return Err(PaymentError::NonPositiveWinningBid(winner.total));
    }

    Ok(winner
        .bids
        .iter()
        .map(|(id, bid)| (id.clone(), second_bid * (bid / winner.total)))
        .collect())
}
