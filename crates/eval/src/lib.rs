// SPDX-License-Identifier: Apache-2.0

//! Quads poker hand evaluator.
//!
//! Hand evaluator for three and four card poker variants, built on the
//! [Cactus Kev][kevlink] card encoding. Each distinct hand shape maps to an
//! integer rank, with 1 the best possible hand and larger ranks weaker; the
//! mapping is a perfect hash keyed by the product of the rank primes embedded
//! in the cards, so an evaluation is a couple of bit operations and one table
//! lookup.
//!
//! To use the evaluator create one for the variant you need and rank hands
//! with it:
//!
//! ```
//! # use quads_eval::{Deck, ThreeCardEval};
//! // 2C, 3C, .., 7C
//! let cards = Deck::default().into_iter().take(6).collect::<Vec<_>>();
//! let eval = ThreeCardEval::new();
//! let low = eval.evaluate(&cards[0..3], &[]); // 4 high straight flush
//! let high = eval.evaluate(&cards[3..], &[]); // 7 high straight flush
//! assert!(high < low);
//! ```
//!
//! Pools larger than the variant hand size are ranked by searching every
//! fixed size subset for the best rank:
//!
//! ```
//! # use quads_eval::{Deck, FourCardClass, FourCardEval};
//! let cards = Deck::default().into_iter().take(6).collect::<Vec<_>>();
//! let eval = FourCardEval::new();
//! // The best four card subset of 2C..7C is the 7 high straight flush.
//! let rank = eval.evaluate(&cards[0..2], &cards[2..]);
//! assert_eq!(eval.rank_class(rank).unwrap(), FourCardClass::StraightFlush);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{FourCardClass, FourCardEval, ThreeCardClass, ThreeCardEval};

// Reexport cards types.
pub use quads_cards::{Card, Deck, Rank, Suit};
