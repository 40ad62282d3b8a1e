// SPDX-License-Identifier: Apache-2.0

//! Quads poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use quads_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 3 cards hands:
//!
//! ```
//! # use quads_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 3 cards hands (22100 hands).
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! Cards parse from and display as two character strings:
//!
//! ```
//! # use quads_cards::{Card, Rank, Suit};
//! let card: Card = "TD".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(card.to_string(), "TD");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
