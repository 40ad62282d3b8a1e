// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all4
// Total hands      270725
// Elapsed:         0.021s
// Hands/sec:       ...
//
// Four of a Kind:  13
// Straight Flush:  44
// Three of a Kind: 2496
// Flush:           2816
// Straight:        2772
// Two Pair:        2808
// Pair:            82368
// High Card:       177408
// ```

use std::time::Instant;

use quads_eval::{Deck, FourCardClass, FourCardEval};

#[rustfmt::skip]
fn main() {
    // Evaluate all 270725 four card hands.
    let eval = FourCardEval::new();
    let now = Instant::now();
    let mut counts = [0usize; 8];

    Deck::default().for_each(4, |hand| {
        let rank = eval.evaluate(hand, &[]);
        let class = eval.rank_class(rank).unwrap();
        counts[class as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("Four of a Kind:  {}", counts[FourCardClass::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[FourCardClass::StraightFlush as usize]);
    println!("Three of a Kind: {}", counts[FourCardClass::ThreeOfAKind as usize]);
    println!("Flush:           {}", counts[FourCardClass::Flush as usize]);
    println!("Straight:        {}", counts[FourCardClass::Straight as usize]);
    println!("Two Pair:        {}", counts[FourCardClass::TwoPair as usize]);
    println!("Pair:            {}", counts[FourCardClass::Pair as usize]);
    println!("High Card:       {}", counts[FourCardClass::HighCard as usize]);
}
