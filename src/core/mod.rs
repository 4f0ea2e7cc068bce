//! Core deterministic primitives.
//!
//! Grid geometry, randomness and hashing. Nothing here knows about rooms or
//! cards.

pub mod position;
pub mod rng;
pub mod hash;

// Re-export core types
pub use position::{Direction, Position};
pub use rng::{DeterministicRng, RandomSource};
pub use hash::compute_state_hash;
