// SPDX-License-Identifier: Apache-2.0

//! Three card poker hand evaluator.
//!
//! Distinct hand values for this variant:
//!
//! ```text
//! Mini Royal         1
//! Straight Flush    11
//! Three of a Kind   13
//! Straight          12
//! Flush            274     [nck(13, 3) - 12 straight flushes]
//! Pair             156     [13 pair ranks * 12 kickers]
//! High Card      + 274     [nck(13, 3) - 12 straights]
//! ------------------------
//! TOTAL            741
//! ```
//!
//! The mini royal, ace-king-queen suited, is the top straight flush and
//! carries its own hand class.
use anyhow::{Result, ensure};
use std::{fmt, path::Path};

use super::lookup::{self, LookupTable};
use quads_cards::{Card, Rank};

/// Straight rank patterns, strongest to weakest.
///
/// The ace low wheel (A-2-3) sits last even though its numeric value is not
/// the smallest: the ace may complete the bottom straight, which ranks below
/// every other straight by rule.
const STRAIGHTS: [u16; 12] = [
    0b1_1100_0000_0000, // A K Q, the mini royal pattern
    0b0_1110_0000_0000,
    0b0_0111_0000_0000,
    0b0_0011_1000_0000,
    0b0_0001_1100_0000,
    0b0_0000_1110_0000,
    0b0_0000_0111_0000,
    0b0_0000_0011_1000,
    0b0_0000_0001_1100,
    0b0_0000_0000_1110,
    0b0_0000_0000_0111,
    0b1_0000_0000_0011, // A 3 2, the wheel
];

/// Three card poker hand classes, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreeCardClass {
    /// Ace, king, and queen suited.
    MiniRoyal,
    /// Three suited cards in sequence.
    StraightFlush,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Three cards in sequence.
    Straight,
    /// Three suited cards.
    Flush,
    /// Two cards of one rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl fmt::Display for ThreeCardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            ThreeCardClass::MiniRoyal => "Mini Royal",
            ThreeCardClass::StraightFlush => "Straight Flush",
            ThreeCardClass::ThreeOfAKind => "Three of a Kind",
            ThreeCardClass::Straight => "Straight",
            ThreeCardClass::Flush => "Flush",
            ThreeCardClass::Pair => "Pair",
            ThreeCardClass::HighCard => "High Card",
        };

        write!(f, "{class}")
    }
}

/// Three card poker hands evaluator.
///
/// Builds the variant lookup table once in [ThreeCardEval::new] and is
/// read-only afterwards, evaluation never mutates and the evaluator can be
/// shared across threads.
pub struct ThreeCardEval {
    table: LookupTable,
}

impl ThreeCardEval {
    /// Number of cards in a hand.
    pub const HAND_SIZE: usize = 3;

    /// The mini royal rank, the best possible hand.
    pub const MAX_MINI_ROYAL: u16 = 1;
    /// Worst straight flush rank.
    pub const MAX_STRAIGHT_FLUSH: u16 = 12;
    /// Worst three of a kind rank.
    pub const MAX_THREE_OF_A_KIND: u16 = 25;
    /// Worst straight rank.
    pub const MAX_STRAIGHT: u16 = 37;
    /// Worst flush rank.
    pub const MAX_FLUSH: u16 = 311;
    /// Worst pair rank.
    pub const MAX_PAIR: u16 = 467;
    /// Worst high card rank, the table maximum.
    pub const MAX_HIGH_CARD: u16 = 741;

    /// Number of non straight rank patterns, nck(13, 3) - 12.
    const HIGH_CARDS: usize = 274;

    /// Creates the evaluator building its lookup table.
    ///
    /// Panics if the table does not come out as a bijection onto
    /// 1..=[Self::MAX_HIGH_CARD], which would mean the band constants above
    /// are broken.
    pub fn new() -> Self {
        let mut table = LookupTable::new();
        let patterns = lookup::flush_patterns(0b111, &STRAIGHTS, Self::HIGH_CARDS);

        // Straight flushes, rank 1 is the mini royal.
        let mut rank = 1;
        for sf in STRAIGHTS {
            table.insert_flush(sf, rank);
            rank += 1;
        }

        // Flushes rank below the worst unsuited straight.
        let mut rank = Self::MAX_STRAIGHT + 1;
        for &f in &patterns {
            table.insert_flush(f, rank);
            rank += 1;
        }

        // Straights and high cards reuse the same patterns suit-free.
        let mut rank = Self::MAX_THREE_OF_A_KIND + 1;
        for s in STRAIGHTS {
            table.insert_unsuited_rankbits(s, rank);
            rank += 1;
        }

        let mut rank = Self::MAX_PAIR + 1;
        for &h in &patterns {
            table.insert_unsuited_rankbits(h, rank);
            rank += 1;
        }

        // Three of a kind, aces first.
        let mut rank = Self::MAX_STRAIGHT_FLUSH + 1;
        for trips in Rank::ranks().rev() {
            table.insert_unsuited(trips.prime().pow(3), rank);
            rank += 1;
        }

        // Pairs with a kicker.
        let mut rank = Self::MAX_FLUSH + 1;
        for pair in Rank::ranks().rev() {
            for kicker in Rank::ranks().rev().filter(|k| *k != pair) {
                table.insert_unsuited(pair.prime().pow(2) * kicker.prime(), rank);
                rank += 1;
            }
        }

        table.check_bijection(Self::MAX_HIGH_CARD);
        Self { table }
    }

    /// Ranks the cards in hand and board, the lower the rank the stronger
    /// the hand, with the mini royal at rank 1.
    ///
    /// With exactly three cards this is a single lookup, larger pools search
    /// every three card subset and keep the best rank. There is no input
    /// validation, pools with fewer than three cards or duplicate cards are
    /// the caller's bug.
    pub fn evaluate(&self, hand: &[Card], board: &[Card]) -> u16 {
        let pool = hand.iter().chain(board).copied().collect::<Vec<_>>();
        if pool.len() == Self::HAND_SIZE {
            self.rank(&pool)
        } else {
            self.pool_rank(&pool)
        }
    }

    /// Ranks an exact size hand with one lookup.
    fn rank(&self, cards: &[Card]) -> u16 {
        if cards.iter().fold(0xfu8, |acc, c| acc & c.suit_bits()) != 0 {
            let rankbits = cards.iter().fold(0, |acc, c| acc | c.id()) >> 16;
            let product = Card::prime_product_from_rankbits(rankbits as u16);
            match self.table.flush_lookup.get(&product) {
                Some(&rank) => rank,
                None => panic!("no flush entry for prime product {product}"),
            }
        } else {
            let product = Card::prime_product_from_hand(cards);
            match self.table.unsuited_lookup.get(&product) {
                Some(&rank) => rank,
                None => panic!("no unsuited entry for prime product {product}"),
            }
        }
    }

    /// Ranks every three card subset of the pool and keeps the minimum.
    fn pool_rank(&self, pool: &[Card]) -> u16 {
        let mut minimum = Self::MAX_HIGH_CARD;

        for c1 in 0..pool.len() {
            for c2 in (c1 + 1)..pool.len() {
                for c3 in (c2 + 1)..pool.len() {
                    let rank = self.rank(&[pool[c1], pool[c2], pool[c3]]);
                    minimum = minimum.min(rank);
                }
            }
        }

        minimum
    }

    /// Returns the hand class for a rank returned by [Self::evaluate].
    ///
    /// Fails if the rank is outside 1..=[Self::MAX_HIGH_CARD].
    pub fn rank_class(&self, rank: u16) -> Result<ThreeCardClass> {
        ensure!(
            (1..=Self::MAX_HIGH_CARD).contains(&rank),
            "invalid hand rank {rank}"
        );

        let class = if rank <= Self::MAX_MINI_ROYAL {
            ThreeCardClass::MiniRoyal
        } else if rank <= Self::MAX_STRAIGHT_FLUSH {
            ThreeCardClass::StraightFlush
        } else if rank <= Self::MAX_THREE_OF_A_KIND {
            ThreeCardClass::ThreeOfAKind
        } else if rank <= Self::MAX_STRAIGHT {
            ThreeCardClass::Straight
        } else if rank <= Self::MAX_FLUSH {
            ThreeCardClass::Flush
        } else if rank <= Self::MAX_PAIR {
            ThreeCardClass::Pair
        } else {
            ThreeCardClass::HighCard
        };

        Ok(class)
    }

    /// Scales a rank to the [0.0, 1.0] range, 1.0 is the worst hand.
    pub fn percentage(&self, rank: u16) -> f64 {
        rank as f64 / Self::MAX_HIGH_CARD as f64
    }

    /// Writes both lookup mappings to disk, one `product,rank` line per
    /// entry. Diagnostic export only, there is no reader.
    pub fn write_tables_to_disk(
        &self,
        flush_path: impl AsRef<Path>,
        unsuited_path: impl AsRef<Path>,
    ) -> Result<()> {
        self.table.write_flush_to_disk(flush_path.as_ref())?;
        self.table.write_unsuited_to_disk(unsuited_path.as_ref())
    }
}

impl Default for ThreeCardEval {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quads_cards::{Deck, Suit};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    #[test]
    fn table_census() {
        let eval = ThreeCardEval::new();

        // nck(13, 3) flush keys, 13 + 12 + 156 + 274 unsuited keys.
        assert_eq!(eval.table.flush_lookup.len(), 286);
        assert_eq!(eval.table.unsuited_lookup.len(), 455);
    }

    #[test]
    fn hand_bounds() {
        let eval = ThreeCardEval::new();

        // Mini royal is the best possible hand.
        assert_eq!(eval.evaluate(&cards("AH KH QH"), &[]), 1);

        // 5-3-2 offsuit is the worst possible hand.
        let rank = eval.evaluate(&cards("5C 3D 2H"), &[]);
        assert_eq!(rank, ThreeCardEval::MAX_HIGH_CARD);
        assert_eq!(eval.rank_class(rank).unwrap(), ThreeCardClass::HighCard);
    }

    #[test]
    fn band_boundaries() {
        let eval = ThreeCardEval::new();

        // The wheel is the worst straight flush and the worst straight.
        assert_eq!(eval.evaluate(&cards("AS 2S 3S"), &[]), 12);
        assert_eq!(eval.evaluate(&cards("AS 2D 3S"), &[]), 37);

        // Three aces are the best three of a kind, right below the
        // straight flushes.
        let rank = eval.evaluate(&cards("AS AD AH"), &[]);
        assert_eq!(rank, ThreeCardEval::MAX_STRAIGHT_FLUSH + 1);
        assert_eq!(
            eval.rank_class(rank).unwrap(),
            ThreeCardClass::ThreeOfAKind
        );

        // King high straight right below the mini royal band.
        assert_eq!(eval.evaluate(&cards("KC QC JC"), &[]), 2);

        // Best pair is aces with a king kicker, best flush is ace king
        // jack suited.
        assert_eq!(
            eval.evaluate(&cards("AS AD KH"), &[]),
            ThreeCardEval::MAX_FLUSH + 1
        );
        assert_eq!(
            eval.evaluate(&cards("AS KS JS"), &[]),
            ThreeCardEval::MAX_STRAIGHT + 1
        );

        // Worst pair is deuces with a trey kicker.
        assert_eq!(
            eval.evaluate(&cards("2S 2D 3H"), &[]),
            ThreeCardEval::MAX_PAIR
        );
    }

    #[test]
    fn suits_do_not_matter_without_a_flush() {
        let eval = ThreeCardEval::new();

        let r1 = eval.evaluate(&cards("9C 7D 4H"), &[]);
        let r2 = eval.evaluate(&cards("9S 7H 4C"), &[]);
        assert_eq!(r1, r2);

        // Suited is strictly better.
        assert!(eval.evaluate(&cards("9C 7C 4C"), &[]) < r1);
    }

    #[test]
    fn class_census() {
        let eval = ThreeCardEval::new();
        let mut counts = [0usize; 7];

        Deck::default().for_each(3, |hand| {
            let rank = eval.evaluate(hand, &[]);
            counts[eval.rank_class(rank).unwrap() as usize] += 1;
        });

        assert_eq!(counts[ThreeCardClass::MiniRoyal as usize], 4);
        assert_eq!(counts[ThreeCardClass::StraightFlush as usize], 44);
        assert_eq!(counts[ThreeCardClass::ThreeOfAKind as usize], 52);
        assert_eq!(counts[ThreeCardClass::Straight as usize], 720);
        assert_eq!(counts[ThreeCardClass::Flush as usize], 1096);
        assert_eq!(counts[ThreeCardClass::Pair as usize], 3744);
        assert_eq!(counts[ThreeCardClass::HighCard as usize], 16440);
        assert_eq!(counts.iter().sum::<usize>(), 22_100);
    }

    #[test]
    fn pool_search_matches_exhaustive_minimum() {
        let eval = ThreeCardEval::new();
        let mut rng = rand::rng();

        for pool_size in 4..=7 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let pool = (0..pool_size).map(|_| deck.deal()).collect::<Vec<_>>();

            let mut expected = u16::MAX;
            for c1 in 0..pool.len() {
                for c2 in (c1 + 1)..pool.len() {
                    for c3 in (c2 + 1)..pool.len() {
                        let hand = [pool[c1], pool[c2], pool[c3]];
                        expected = expected.min(eval.evaluate(&hand, &[]));
                    }
                }
            }

            // Split the pool between hand and board.
            assert_eq!(eval.evaluate(&pool[..2], &pool[2..]), expected);
            assert_eq!(eval.evaluate(&pool, &[]), expected);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let eval = ThreeCardEval::new();
        let hand = [
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Five, Suit::Diamonds),
        ];
        let board = cards("2H 7S QD");

        let rank = eval.evaluate(&hand, &board);
        for _ in 0..10 {
            assert_eq!(eval.evaluate(&hand, &board), rank);
        }
    }

    #[test]
    fn rank_class_rejects_out_of_range() {
        let eval = ThreeCardEval::new();
        assert!(eval.rank_class(0).is_err());
        assert!(eval.rank_class(ThreeCardEval::MAX_HIGH_CARD + 1).is_err());
        assert!(eval.rank_class(ThreeCardEval::MAX_HIGH_CARD).is_ok());
    }

    #[test]
    fn class_strings() {
        assert_eq!(ThreeCardClass::MiniRoyal.to_string(), "Mini Royal");
        assert_eq!(ThreeCardClass::HighCard.to_string(), "High Card");
    }

    #[test]
    fn percentage_bounds() {
        let eval = ThreeCardEval::new();
        assert!(eval.percentage(1) > 0.0);
        assert_eq!(eval.percentage(ThreeCardEval::MAX_HIGH_CARD), 1.0);
    }
}
