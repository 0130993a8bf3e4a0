//! Category scoring for a 5-dice hand.
//!
//! Pure functions; no state between calls. Dice order never matters for
//! scoring, only the face counts.

use crate::category::{Category, NUM_CATS};

/// Per-face counts for a hand. `counts[f - 1]` is how many dice show face `f`.
fn face_counts(dice: [u8; 5]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for &d in &dice {
        debug_assert!((1..=6).contains(&d), "die face out of range: {}", d);
        counts[(d - 1) as usize] += 1;
    }
    counts
}

fn sum_all(dice: [u8; 5]) -> i32 {
    dice.iter().map(|&d| d as i32).sum()
}

/// Score a single category for a hand. Dice must be in 1..=6.
pub fn score_category(dice: [u8; 5], cat: Category) -> i32 {
    let counts = face_counts(dice);

    if let Some(face) = cat.upper_face() {
        return counts[(face - 1) as usize] as i32 * face as i32;
    }

    match cat {
        Category::ThreeOfAKind => {
            if counts.iter().any(|&c| c >= 3) {
                sum_all(dice)
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if counts.iter().any(|&c| c >= 4) {
                sum_all(dice)
            } else {
                0
            }
        }
        Category::FullHouse => {
            // Exactly a triple plus a pair of a different face. Five of a
            // kind does not qualify.
            let has3 = counts.iter().any(|&c| c == 3);
            let has2 = counts.iter().any(|&c| c == 2);
            if has3 && has2 {
                25
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if has_run(&counts, 1, 4) || has_run(&counts, 2, 4) || has_run(&counts, 3, 4) {
                30
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_run(&counts, 1, 5) || has_run(&counts, 2, 5) {
                40
            } else {
                0
            }
        }
        Category::Chance => sum_all(dice),
        Category::Yatzy => {
            if counts.iter().any(|&c| c == 5) {
                50
            } else {
                0
            }
        }
        // Upper section handled above.
        _ => unreachable!("upper categories handled via upper_face"),
    }
}

/// True if every face in `start..start+len` appears at least once.
fn has_run(counts: &[u8; 6], start: u8, len: u8) -> bool {
    (start..start + len).all(|f| counts[(f - 1) as usize] > 0)
}

/// Compute all category scores for a hand, in display order.
pub fn scores_for_dice(dice: [u8; 5]) -> [i32; NUM_CATS] {
    let mut out = [0i32; NUM_CATS];
    for cat in Category::ALL {
        out[cat.index()] = score_category(dice, cat);
    }
    out
}
