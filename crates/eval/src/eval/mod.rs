// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluators.
//!
//! The evaluators are a port of the [Cactus Kev's][kevlink] algorithm to the
//! three and four card poker variants. For each variant a lookup table maps
//! the prime product of a hand's ranks to its strength: one mapping for
//! suited hands keyed by the product of the primes of a 13-bit rank pattern,
//! and one for unsuited hands keyed by the product of the primes embedded in
//! the cards. The tables are built once by enumerating rank patterns and are
//! immutable afterwards, so evaluators can be shared freely across threads.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

mod bits;
mod lookup;

pub mod four;
pub mod three;

pub use four::{FourCardClass, FourCardEval};
pub use three::{ThreeCardClass, ThreeCardEval};
