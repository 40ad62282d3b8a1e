// SPDX-License-Identifier: Apache-2.0

//! Four card poker hand evaluator.
//!
//! Distinct hand values for this variant:
//!
//! ```text
//! Four of a Kind    13     [nck(13, 1)]
//! Straight Flush    11
//! Three of a Kind  156     [13 trip ranks * 12 kickers]
//! Flush            704     [nck(13, 4) - 11 straight flushes]
//! Straight          11
//! Two Pair          78     [nck(13, 2)]
//! One Pair         858     [13 pair ranks * nck(12, 2) kickers]
//! High Card      + 704     [nck(13, 4) - 11 straights]
//! ------------------------
//! TOTAL           2535
//! ```
//!
//! With four cards there are fewer flushes than straights, so flushes rank
//! above straights. Quads beat everything.
use anyhow::{Result, ensure};
use std::{fmt, path::Path};

use super::lookup::{self, LookupTable};
use quads_cards::{Card, Rank};

/// Straight rank patterns, strongest to weakest.
///
/// The ace low wheel (A-2-3-4) sits last even though its numeric value is
/// not the smallest: the ace may complete the bottom straight, which ranks
/// below every other straight by rule.
const STRAIGHTS: [u16; 11] = [
    0b1_1110_0000_0000, // A K Q J
    0b0_1111_0000_0000,
    0b0_0111_1000_0000,
    0b0_0011_1100_0000,
    0b0_0001_1110_0000,
    0b0_0000_1111_0000,
    0b0_0000_0111_1000,
    0b0_0000_0011_1100,
    0b0_0000_0001_1110,
    0b0_0000_0000_1111,
    0b1_0000_0000_0111, // A 4 3 2, the wheel
];

/// Four card poker hand classes, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FourCardClass {
    /// Four cards of one rank.
    FourOfAKind,
    /// Four suited cards in sequence.
    StraightFlush,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Four suited cards.
    Flush,
    /// Four cards in sequence.
    Straight,
    /// Two cards each of two ranks.
    TwoPair,
    /// Two cards of one rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl fmt::Display for FourCardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            FourCardClass::FourOfAKind => "Four of a Kind",
            FourCardClass::StraightFlush => "Straight Flush",
            FourCardClass::ThreeOfAKind => "Three of a Kind",
            FourCardClass::Flush => "Flush",
            FourCardClass::Straight => "Straight",
            FourCardClass::TwoPair => "Two Pair",
            FourCardClass::Pair => "Pair",
            FourCardClass::HighCard => "High Card",
        };

        write!(f, "{class}")
    }
}

/// Four card poker hands evaluator.
///
/// Builds the variant lookup table once in [FourCardEval::new] and is
/// read-only afterwards, evaluation never mutates and the evaluator can be
/// shared across threads.
pub struct FourCardEval {
    table: LookupTable,
}

impl FourCardEval {
    /// Number of cards in a hand.
    pub const HAND_SIZE: usize = 4;

    /// Worst four of a kind rank, four deuces.
    pub const MAX_FOUR_OF_A_KIND: u16 = 13;
    /// Worst straight flush rank.
    pub const MAX_STRAIGHT_FLUSH: u16 = 24;
    /// Worst three of a kind rank.
    pub const MAX_THREE_OF_A_KIND: u16 = 180;
    /// Worst flush rank.
    pub const MAX_FLUSH: u16 = 884;
    /// Worst straight rank.
    pub const MAX_STRAIGHT: u16 = 895;
    /// Worst two pair rank.
    pub const MAX_TWO_PAIR: u16 = 973;
    /// Worst pair rank.
    pub const MAX_PAIR: u16 = 1831;
    /// Worst high card rank, the table maximum.
    pub const MAX_HIGH_CARD: u16 = 2535;

    /// Number of non straight rank patterns, nck(13, 4) - 11.
    const HIGH_CARDS: usize = 704;

    /// Creates the evaluator building its lookup table.
    ///
    /// Panics if the table does not come out as a bijection onto
    /// 1..=[Self::MAX_HIGH_CARD], which would mean the band constants above
    /// are broken.
    pub fn new() -> Self {
        let mut table = LookupTable::new();
        let patterns = lookup::flush_patterns(0b1111, &STRAIGHTS, Self::HIGH_CARDS);

        // Four of a kind, aces first.
        let mut rank = 1;
        for quads in Rank::ranks().rev() {
            table.insert_unsuited(quads.prime().pow(4), rank);
            rank += 1;
        }

        // Straight flushes right below the quads.
        let mut rank = Self::MAX_FOUR_OF_A_KIND + 1;
        for sf in STRAIGHTS {
            table.insert_flush(sf, rank);
            rank += 1;
        }

        // Three of a kind with a kicker.
        let mut rank = Self::MAX_STRAIGHT_FLUSH + 1;
        for trips in Rank::ranks().rev() {
            for kicker in Rank::ranks().rev().filter(|k| *k != trips) {
                table.insert_unsuited(trips.prime().pow(3) * kicker.prime(), rank);
                rank += 1;
            }
        }

        // Flushes rank below the worst three of a kind.
        let mut rank = Self::MAX_THREE_OF_A_KIND + 1;
        for &f in &patterns {
            table.insert_flush(f, rank);
            rank += 1;
        }

        // Straights and high cards reuse the same patterns suit-free.
        let mut rank = Self::MAX_FLUSH + 1;
        for s in STRAIGHTS {
            table.insert_unsuited_rankbits(s, rank);
            rank += 1;
        }

        let mut rank = Self::MAX_PAIR + 1;
        for &h in &patterns {
            table.insert_unsuited_rankbits(h, rank);
            rank += 1;
        }

        // Two pair, unordered choices of two pair ranks, high pair first.
        let mut rank = Self::MAX_STRAIGHT + 1;
        for (i, high) in Rank::ranks().rev().enumerate() {
            for low in Rank::ranks().rev().skip(i + 1) {
                table.insert_unsuited(high.prime().pow(2) * low.prime().pow(2), rank);
                rank += 1;
            }
        }

        // Pairs with two kickers, kickers as unordered descending choices.
        let mut rank = Self::MAX_TWO_PAIR + 1;
        for pair in Rank::ranks().rev() {
            let kickers = Rank::ranks()
                .rev()
                .filter(|k| *k != pair)
                .collect::<Vec<_>>();

            for (i, k1) in kickers.iter().enumerate() {
                for k2 in &kickers[i + 1..] {
                    table.insert_unsuited(pair.prime().pow(2) * k1.prime() * k2.prime(), rank);
                    rank += 1;
                }
            }
        }

        table.check_bijection(Self::MAX_HIGH_CARD);
        Self { table }
    }

    /// Ranks the cards in hand and board, the lower the rank the stronger
    /// the hand, with four aces at rank 1.
    ///
    /// With exactly four cards this is a single lookup, larger pools search
    /// every four card subset and keep the best rank. There is no input
    /// validation, pools with fewer than four cards or duplicate cards are
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

    /// Ranks every four card subset of the pool and keeps the minimum.
    fn pool_rank(&self, pool: &[Card]) -> u16 {
        let mut minimum = Self::MAX_HIGH_CARD;

        for c1 in 0..pool.len() {
            for c2 in (c1 + 1)..pool.len() {
                for c3 in (c2 + 1)..pool.len() {
                    for c4 in (c3 + 1)..pool.len() {
                        let rank = self.rank(&[pool[c1], pool[c2], pool[c3], pool[c4]]);
                        minimum = minimum.min(rank);
                    }
                }
            }
        }

        minimum
    }

    /// Returns the hand class for a rank returned by [Self::evaluate].
    ///
    /// Fails if the rank is outside 1..=[Self::MAX_HIGH_CARD].
    pub fn rank_class(&self, rank: u16) -> Result<FourCardClass> {
        ensure!(
            (1..=Self::MAX_HIGH_CARD).contains(&rank),
            "invalid hand rank {rank}"
        );

        let class = if rank <= Self::MAX_FOUR_OF_A_KIND {
            FourCardClass::FourOfAKind
        } else if rank <= Self::MAX_STRAIGHT_FLUSH {
            FourCardClass::StraightFlush
        } else if rank <= Self::MAX_THREE_OF_A_KIND {
            FourCardClass::ThreeOfAKind
        } else if rank <= Self::MAX_FLUSH {
            FourCardClass::Flush
        } else if rank <= Self::MAX_STRAIGHT {
            FourCardClass::Straight
        } else if rank <= Self::MAX_TWO_PAIR {
            FourCardClass::TwoPair
        } else if rank <= Self::MAX_PAIR {
            FourCardClass::Pair
        } else {
            FourCardClass::HighCard
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

impl Default for FourCardEval {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quads_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    #[test]
    fn table_census() {
        let eval = FourCardEval::new();

        // nck(13, 4) flush keys, 13 + 156 + 11 + 78 + 858 + 704 unsuited.
        assert_eq!(eval.table.flush_lookup.len(), 715);
        assert_eq!(eval.table.unsuited_lookup.len(), 1820);
    }

    #[test]
    fn hand_bounds() {
        let eval = FourCardEval::new();

        // Four aces are the best possible hand.
        assert_eq!(eval.evaluate(&cards("AS AD AH AC"), &[]), 1);

        // 6-4-3-2 offsuit is the worst possible hand.
        let rank = eval.evaluate(&cards("6C 4D 3H 2S"), &[]);
        assert_eq!(rank, FourCardEval::MAX_HIGH_CARD);
        assert_eq!(eval.rank_class(rank).unwrap(), FourCardClass::HighCard);
    }

    #[test]
    fn band_boundaries() {
        let eval = FourCardEval::new();

        // The ace low straight flush is the weakest straight flush, worse
        // than every other straight flush but better than the best trips.
        let wheel_sf = eval.evaluate(&cards("AS 2S 3S 4S"), &[]);
        assert_eq!(wheel_sf, FourCardEval::MAX_STRAIGHT_FLUSH);
        assert_eq!(
            eval.rank_class(wheel_sf).unwrap(),
            FourCardClass::StraightFlush
        );

        let five_high_sf = eval.evaluate(&cards("2H 3H 4H 5H"), &[]);
        assert!(five_high_sf < wheel_sf);

        let best_trips = eval.evaluate(&cards("AS AD AH KC"), &[]);
        assert_eq!(best_trips, FourCardEval::MAX_STRAIGHT_FLUSH + 1);
        assert!(wheel_sf < best_trips);

        // Four deuces close the quads band.
        assert_eq!(
            eval.evaluate(&cards("2S 2D 2H 2C"), &[]),
            FourCardEval::MAX_FOUR_OF_A_KIND
        );

        // Best flush right below the worst trips, best straight right
        // below the worst flush.
        assert_eq!(
            eval.evaluate(&cards("AS KS QS TS"), &[]),
            FourCardEval::MAX_THREE_OF_A_KIND + 1
        );
        assert_eq!(
            eval.evaluate(&cards("AS KD QH JC"), &[]),
            FourCardEval::MAX_FLUSH + 1
        );

        // Two pair band: aces over kings down to treys over deuces.
        assert_eq!(
            eval.evaluate(&cards("AS AD KH KC"), &[]),
            FourCardEval::MAX_STRAIGHT + 1
        );
        assert_eq!(
            eval.evaluate(&cards("3S 3D 2H 2C"), &[]),
            FourCardEval::MAX_TWO_PAIR
        );

        // Pair band: aces with king queen kickers down to deuces with
        // four trey kickers.
        assert_eq!(
            eval.evaluate(&cards("AS AD KH QC"), &[]),
            FourCardEval::MAX_TWO_PAIR + 1
        );
        assert_eq!(
            eval.evaluate(&cards("2S 2D 4H 3C"), &[]),
            FourCardEval::MAX_PAIR
        );
    }

    #[test]
    fn suits_do_not_matter_without_a_flush() {
        let eval = FourCardEval::new();

        let r1 = eval.evaluate(&cards("9C 7D 4H 2S"), &[]);
        let r2 = eval.evaluate(&cards("9S 7H 4C 2D"), &[]);
        assert_eq!(r1, r2);

        // Suited is strictly better.
        assert!(eval.evaluate(&cards("9C 7C 4C 2C"), &[]) < r1);
    }

    #[test]
    fn class_census() {
        let eval = FourCardEval::new();
        let mut counts = [0usize; 8];

        Deck::default().for_each(4, |hand| {
            let rank = eval.evaluate(hand, &[]);
            counts[eval.rank_class(rank).unwrap() as usize] += 1;
        });

        assert_eq!(counts[FourCardClass::FourOfAKind as usize], 13);
        assert_eq!(counts[FourCardClass::StraightFlush as usize], 44);
        assert_eq!(counts[FourCardClass::ThreeOfAKind as usize], 2496);
        assert_eq!(counts[FourCardClass::Flush as usize], 2816);
        assert_eq!(counts[FourCardClass::Straight as usize], 2772);
        assert_eq!(counts[FourCardClass::TwoPair as usize], 2808);
        assert_eq!(counts[FourCardClass::Pair as usize], 82368);
        assert_eq!(counts[FourCardClass::HighCard as usize], 177408);
        assert_eq!(counts.iter().sum::<usize>(), 270_725);
    }

    #[test]
    fn pool_search_matches_exhaustive_minimum() {
        let eval = FourCardEval::new();
        let mut rng = rand::rng();

        for pool_size in 5..=8 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let pool = (0..pool_size).map(|_| deck.deal()).collect::<Vec<_>>();

            let mut expected = u16::MAX;
            for c1 in 0..pool.len() {
                for c2 in (c1 + 1)..pool.len() {
                    for c3 in (c2 + 1)..pool.len() {
                        for c4 in (c3 + 1)..pool.len() {
                            let hand = [pool[c1], pool[c2], pool[c3], pool[c4]];
                            expected = expected.min(eval.evaluate(&hand, &[]));
                        }
                    }
                }
            }

            // Split the pool between hand and board.
            assert_eq!(eval.evaluate(&pool[..2], &pool[2..]), expected);
            assert_eq!(eval.evaluate(&pool, &[]), expected);
        }
    }

    #[test]
    fn rank_class_rejects_out_of_range() {
        let eval = FourCardEval::new();
        assert!(eval.rank_class(0).is_err());
        assert!(eval.rank_class(FourCardEval::MAX_HIGH_CARD + 1).is_err());
        assert!(eval.rank_class(FourCardEval::MAX_HIGH_CARD).is_ok());
    }
}
