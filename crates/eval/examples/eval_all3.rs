// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all3
// Total hands      22100
// Elapsed:         0.002s
// Hands/sec:       ...
//
// Mini Royal:      4
// Straight Flush:  44
// Three of a Kind: 52
// Straight:        720
// Flush:           1096
// Pair:            3744
// High Card:       16440
// ```

use std::time::Instant;

use quads_eval::{Deck, ThreeCardClass, ThreeCardEval};

#[rustfmt::skip]
fn main() {
    // Evaluate all 22100 three card hands.
    let eval = ThreeCardEval::new();
    let now = Instant::now();
    let mut counts = [0usize; 7];

    Deck::default().for_each(3, |hand| {
        let rank = eval.evaluate(hand, &[]);
        let class = eval.rank_class(rank).unwrap();
        counts[class as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("Mini Royal:      {}", counts[ThreeCardClass::MiniRoyal as usize]);
    println!("Straight Flush:  {}", counts[ThreeCardClass::StraightFlush as usize]);
    println!("Three of a Kind: {}", counts[ThreeCardClass::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[ThreeCardClass::Straight as usize]);
    println!("Flush:           {}", counts[ThreeCardClass::Flush as usize]);
    println!("Pair:            {}", counts[ThreeCardClass::Pair as usize]);
    println!("High Card:       {}", counts[ThreeCardClass::HighCard as usize]);
}
