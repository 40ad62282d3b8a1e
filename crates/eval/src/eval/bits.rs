// SPDX-License-Identifier: Apache-2.0

//! Rank patterns enumeration.

/// Iterator over 13-bit rank patterns with a fixed number of set bits.
///
/// Yields, in strictly increasing numeric order, every pattern with the same
/// popcount as the seed, starting from the pattern right after the seed. Uses
/// the [next bit permutation hack][hack]:
///
/// ```text
/// t = (m | (m - 1)) + 1
/// next = t | ((((t & -t) / (m & -m)) >> 1) - 1)
/// ```
///
/// The iterator never ends on its own, callers bound it with `take`.
///
/// [hack]: http://www-graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
pub(crate) struct BitPermutations {
    bits: u32,
}

impl BitPermutations {
    /// Creates an iterator seeded with the given pattern.
    pub(crate) fn new(seed: u16) -> Self {
        Self { bits: seed as u32 }
    }
}

impl Iterator for BitPermutations {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let m = self.bits;
        let t = (m | (m - 1)) + 1;
        // The quotient is a power of two >= 2, so the decrement cannot wrap.
        let next = t | ((((t & t.wrapping_neg()) / (m & m.wrapping_neg())) >> 1) - 1);
        self.bits = next;
        Some(next as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_patterns() {
        let mut perms = BitPermutations::new(0b111);
        assert_eq!(perms.next(), Some(0b1011));
        assert_eq!(perms.next(), Some(0b1101));
        assert_eq!(perms.next(), Some(0b1110));
        assert_eq!(perms.next(), Some(0b10011));
    }

    #[test]
    fn increasing_with_fixed_popcount() {
        for seed in [0b111u16, 0b1111] {
            let mut last = seed;
            for p in BitPermutations::new(seed).take(500) {
                assert!(p > last);
                assert_eq!(p.count_ones(), seed.count_ones());
                last = p;
            }
        }
    }

    #[test]
    fn covers_all_combinations() {
        // After the seed there are nck(13, 3) - 1 more 3-bit patterns that
        // fit in 13 bits.
        let patterns = BitPermutations::new(0b111)
            .take(285)
            .collect::<Vec<_>>();
        assert_eq!(patterns.len(), 285);
        assert!(patterns.iter().all(|p| *p < 1 << 13));
        assert_eq!(*patterns.last().unwrap(), 0b1_1100_0000_0000);

        // The next one overflows into the 14th bit.
        let mut perms = BitPermutations::new(*patterns.last().unwrap());
        assert_eq!(perms.next(), Some(0b10_0000_0000_0011));
    }

    #[test]
    fn restarts_from_any_seed() {
        let from_start = BitPermutations::new(0b1111).take(20).collect::<Vec<_>>();
        let resumed = BitPermutations::new(from_start[9])
            .take(10)
            .collect::<Vec<_>>();
        assert_eq!(&from_start[10..], &resumed[..]);
    }
}
