//! Timing estimates for the three stages of an order.
//!
//! Each function draws whole minutes uniformly from a fixed inclusive
//! range. The random source is passed in by the caller, so tests can
//! seed a [`rand::rngs::StdRng`] and callers in the binary can hand over
//! `rand::rng()`.

use rand::Rng;

use crate::catalog::Pizza;

/// Minutes spent baking the given pizza.
///
/// Larger sizes shift the range up by their position in the size list:
/// L bakes in 7..=15 minutes, XL in 8..=16.
pub fn baking_time<R: Rng + ?Sized>(rng: &mut R, pizza: &Pizza) -> u32 {
    let shift = pizza.size().index() as u32;
    rng.random_range(7 + shift..=15 + shift)
}

/// Minutes spent delivering an order; independent of the pizza itself.
pub fn delivery_time<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(15..=31)
}

/// Minutes spent waiting for a self-service pickup.
pub fn pickup_time<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(5..=61)
}
