#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/**
 * Social vectors and the compatibility score used to rank roommates.
 */
mod social;
pub use social::*;

/**
 * Candidate group generation.
 */
mod groups;
pub use groups::*;

/**
 * Translating preferences into a bid for a specific apartment.
 */
mod bid;
pub use bid::*;

/**
 * Per-round bid collection and winner selection.
 */
mod round;
pub use round::*;

/**
 * Second-price payments.
 */
mod payment;
pub use payment::*;

/**
 * The assignment loop.
 */
mod market;
pub use market::*;

pub use hsm_core::models::{Map, Set};
