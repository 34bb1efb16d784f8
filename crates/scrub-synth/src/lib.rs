//! Format-preserving synthetic replacement values
//!
//! Every value is drawn from an injected [`RandomSource`]; production runs
//! use a freshly seeded `fastrand::Rng` so no two runs agree.

pub mod factory;
pub mod iban;
pub mod names;
pub mod random;

pub use factory::{Replacement, SyntheticValueFactory};
pub use random::{RandomSource, SequenceSource};
