#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the housing share market.
///
/// This module contains the fundamental data structures that represent the domain entities.
///
/// The models are plain data with validation at construction time. All of the
/// matching logic lives in `hsm-engine`; the loading and reporting of these
/// types lives in `hsmatch`.
pub mod models;
