//! Stateless value-generation helpers.
//!
//! These are the per-value building blocks used by
//! [`FastRandom`](crate::FastRandom). They are free functions generic over
//! [`rand::Rng`] so the stateful wrapper stays the only owner of the
//! entropy source.

pub(crate) mod numeric;
pub(crate) mod string;
pub(crate) mod timestamp;
