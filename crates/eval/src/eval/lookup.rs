// SPDX-License-Identifier: Apache-2.0

//! Rank lookup tables machinery shared by the variants.
use ahash::AHashMap;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::bits::BitPermutations;
use quads_cards::Card;

/// Rank lookup tables for one hand size variant.
///
/// Maps the prime product of a hand's ranks to the hand rank, with 1 the
/// strongest possible hand. Suited hands go through `flush_lookup` keyed by
/// the prime product of the rank pattern, everything else through
/// `unsuited_lookup` keyed by the product of the cards primes. The two key
/// sets overlap (a suited and an unsuited hand can hold the same ranks) but
/// the rank bands they map into are disjoint, and together cover every rank
/// from 1 to the variant maximum exactly once.
pub(crate) struct LookupTable {
    pub(crate) flush_lookup: AHashMap<u32, u16>,
    pub(crate) unsuited_lookup: AHashMap<u32, u16>,
}

impl LookupTable {
    pub(crate) fn new() -> Self {
        Self {
            flush_lookup: AHashMap::default(),
            unsuited_lookup: AHashMap::default(),
        }
    }

    /// Inserts a suited rank pattern keyed by its prime product.
    pub(crate) fn insert_flush(&mut self, rankbits: u16, rank: u16) {
        let product = Card::prime_product_from_rankbits(rankbits);
        let prev = self.flush_lookup.insert(product, rank);
        assert!(
            prev.is_none(),
            "flush key collision on product {product} for rank {rank}"
        );
    }

    /// Inserts an unsuited rank pattern keyed by its prime product.
    pub(crate) fn insert_unsuited_rankbits(&mut self, rankbits: u16, rank: u16) {
        self.insert_unsuited(Card::prime_product_from_rankbits(rankbits), rank);
    }

    /// Inserts an unsuited prime product key.
    pub(crate) fn insert_unsuited(&mut self, product: u32, rank: u16) {
        let prev = self.unsuited_lookup.insert(product, rank);
        assert!(
            prev.is_none(),
            "unsuited key collision on product {product} for rank {rank}"
        );
    }

    /// Checks that the ranks in the two mappings cover 1..=max_rank with no
    /// gaps and no duplicates.
    ///
    /// A hole or a double assignment here means the variant band constants
    /// are wrong, which is a bug in the builder, so this panics rather than
    /// returning an error.
    pub(crate) fn check_bijection(&self, max_rank: u16) {
        let mut seen = vec![false; max_rank as usize + 1];

        let ranks = self
            .flush_lookup
            .values()
            .chain(self.unsuited_lookup.values());
        for &rank in ranks {
            assert!(
                (1..=max_rank).contains(&rank),
                "rank {rank} outside 1..={max_rank}"
            );
            assert!(!seen[rank as usize], "rank {rank} assigned twice");
            seen[rank as usize] = true;
        }

        let assigned = seen.iter().filter(|s| **s).count();
        assert_eq!(assigned, max_rank as usize, "unassigned ranks in table");

        log::debug!(
            "lookup table built: {} flush keys, {} unsuited keys, {} ranks",
            self.flush_lookup.len(),
            self.unsuited_lookup.len(),
            max_rank
        );
    }

    /// Writes the flush mapping to disk, one `product,rank` line per entry.
    pub(crate) fn write_flush_to_disk(&self, path: &Path) -> Result<()> {
        write_table(&self.flush_lookup, path)
    }

    /// Writes the unsuited mapping to disk, one `product,rank` line per entry.
    pub(crate) fn write_unsuited_to_disk(&self, path: &Path) -> Result<()> {
        write_table(&self.unsuited_lookup, path)
    }
}

fn write_table(table: &AHashMap<u32, u16>, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for (product, rank) in table {
        writeln!(writer, "{product},{rank}").with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

/// Generates the non straight k-rank patterns, strongest pattern first.
///
/// Drives the patterns generator from the given seed, the lowest k-bit
/// pattern, for every remaining k-of-13 combination and drops the patterns
/// that match a straight exactly. The seed itself is the lowest straight so
/// it never appears in the output either.
pub(crate) fn flush_patterns(seed: u16, straights: &[u16], high_cards: usize) -> Vec<u16> {
    for s in straights {
        assert_eq!(
            s.count_ones(),
            seed.count_ones(),
            "straight pattern {s:#b} has the wrong number of ranks"
        );
    }

    let mut patterns = BitPermutations::new(seed)
        .take(high_cards + straights.len() - 1)
        .filter(|p| !straights.contains(p))
        .collect::<Vec<_>>();

    assert_eq!(patterns.len(), high_cards, "flush patterns count mismatch");

    // The generator counts up from the weakest pattern, ranks hand out
    // strongest first.
    patterns.reverse();
    patterns
}
