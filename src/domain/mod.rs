//! Domain layer types and invariants.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod posts;
pub mod tags;
