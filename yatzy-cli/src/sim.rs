//! Greedy-policy simulation: many solo games, score statistics, histogram.

use std::collections::HashMap;

use yatzy_core::{score_category, Category, DiceSource, TurnController, MAX_ROLLS, TOTAL_ROUNDS};
use yatzy_logging::{GameOverV1, NdjsonWriter};

pub struct SimReport {
    pub scores: Vec<i32>,
    pub summary: ScoreSummary,
}

pub struct ScoreSummary {
    pub mean: f64,
    pub median: i32,
    pub std_dev: f64,
    pub min: i32,
    pub max: i32,
}

/// Run `games` greedy games. Per-game dice seeds derive from `seed`, so the
/// whole run is reproducible.
pub fn run(games: u32, seed: u64, log: Option<&mut NdjsonWriter>) -> SimReport {
    let mut scores = Vec::with_capacity(games as usize);
    let mut writer = log;

    for g in 0..games as u64 {
        let game_seed = seed ^ g.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let score = play_greedy_game(game_seed);
        scores.push(score);
        if let Some(w) = writer.as_deref_mut() {
            // Best-effort: a failed log line shouldn't abort the run.
            let _ = w.write_event(&GameOverV1::new(g, score, false));
        }
    }

    let summary = summarize_scores(&scores);
    SimReport { scores, summary }
}

/// One full game: keep the modal face, roll three times, lock the best open
/// category.
fn play_greedy_game(seed: u64) -> i32 {
    let mut ctrl = TurnController::new(DiceSource::seeded(seed));
    ctrl.start_game();

    for _ in 0..TOTAL_ROUNDS {
        let mut state = ctrl.roll([false; 5]).expect("fresh round has rolls");
        for _ in 1..MAX_ROLLS {
            let keep = keep_modal_face(state.dice);
            state = ctrl.roll(keep).expect("roll within cap");
        }

        let cat = best_open_category(&ctrl);
        ctrl.select_category(cat).expect("open category after roll");
    }

    debug_assert!(ctrl.state().game_over);
    ctrl.state().total_score
}

/// Keep every die showing the most frequent face (ties go to the higher face).
fn keep_modal_face(dice: [u8; 5]) -> [bool; 5] {
    let mut counts = [0u8; 6];
    for &d in &dice {
        counts[(d - 1) as usize] += 1;
    }
    let mut modal = 6u8;
    for f in (1..=6u8).rev() {
        if counts[(f - 1) as usize] > counts[(modal - 1) as usize] {
            modal = f;
        }
    }
    let mut keep = [false; 5];
    for (i, &d) in dice.iter().enumerate() {
        keep[i] = d == modal;
    }
    keep
}

fn best_open_category(ctrl: &TurnController) -> Category {
    let dice = ctrl.state().dice;
    Category::ALL
        .iter()
        .copied()
        .filter(|&c| !ctrl.state().is_locked(c))
        .max_by_key(|&c| score_category(dice, c))
        .expect("at least one open category per round")
}

pub fn summarize_scores(scores: &[i32]) -> ScoreSummary {
    if scores.is_empty() {
        return ScoreSummary {
            mean: 0.0,
            median: 0,
            std_dev: 0.0,
            min: 0,
            max: 0,
        };
    }

    // Single pass for min/max/mean/std + a frequency table for exact median.
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    let mut sum = 0f64;
    let mut sum_sq = 0f64;

    for &s in scores {
        min = min.min(s);
        max = max.max(s);
        let sf = s as f64;
        sum += sf;
        sum_sq += sf * sf;
    }

    let n = scores.len() as f64;
    let mean = sum / n;
    let var = (sum_sq / n) - mean * mean;
    let std_dev = var.max(0.0).sqrt();

    let range = (max - min) as usize + 1;
    let mut freq = vec![0usize; range];
    for &s in scores {
        freq[(s - min) as usize] += 1;
    }
    let target = scores.len() / 2;
    let mut cum = 0usize;
    let mut median = min;
    for (i, &c) in freq.iter().enumerate() {
        cum += c;
        if cum > target {
            median = min + i as i32;
            break;
        }
    }

    ScoreSummary {
        mean,
        median,
        std_dev,
        min,
        max,
    }
}

/// Print a histogram of scores (bucket size = 10).
pub fn print_histogram(scores: &[i32]) {
    if scores.is_empty() {
        println!("\nScore histogram: no games.");
        return;
    }

    let min_score = *scores.iter().min().unwrap();
    let max_score = *scores.iter().max().unwrap();

    let bucket_size = 10;
    let min_bucket = (min_score / bucket_size) * bucket_size;
    let max_bucket = (max_score / bucket_size) * bucket_size;

    let mut buckets: HashMap<i32, usize> = HashMap::new();
    for &score in scores {
        let bucket = (score / bucket_size) * bucket_size;
        *buckets.entry(bucket).or_insert(0) += 1;
    }

    let max_count = *buckets.values().max().unwrap_or(&1);
    let bar_width = 50usize;

    println!("\nScore histogram (N={}, bin=10):", scores.len());
    println!("{}", "─".repeat(70));

    let mut bucket = min_bucket;
    while bucket <= max_bucket {
        let count = *buckets.get(&bucket).unwrap_or(&0);
        let bar_len = (count * bar_width) / max_count.max(1);
        let bar: String = "█".repeat(bar_len);

        println!(
            "{:3}-{:3} │{:<50} {:4} ({:.1}%)",
            bucket,
            bucket + bucket_size - 1,
            bar,
            count,
            (count as f64 / scores.len() as f64) * 100.0
        );

        bucket += bucket_size;
    }

    println!("{}", "─".repeat(70));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_game_finishes_with_a_plausible_score() {
        let score = play_greedy_game(1);
        // 13 locks, each in [0, 50].
        assert!((0..=650).contains(&score));
    }

    #[test]
    fn same_seed_same_run() {
        let a = run(5, 123, None);
        let b = run(5, 123, None);
        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn keep_modal_face_prefers_majority() {
        assert_eq!(
            keep_modal_face([3, 3, 3, 1, 2]),
            [true, true, true, false, false]
        );
        // Ties go to the higher face.
        assert_eq!(
            keep_modal_face([2, 2, 5, 5, 1]),
            [false, false, true, true, false]
        );
    }

    #[test]
    fn empty_run_yields_zeroed_summary() {
        // `--games 0` produces no scores; neither helper may panic on that.
        let report = run(0, 0, None);
        assert!(report.scores.is_empty());
        let s = &report.summary;
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.median, 0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.min, 0);
        assert_eq!(s.max, 0);

        print_histogram(&report.scores);
    }

    #[test]
    fn summary_of_constant_scores() {
        let s = summarize_scores(&[100, 100, 100]);
        assert_eq!(s.mean, 100.0);
        assert_eq!(s.median, 100);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.min, 100);
        assert_eq!(s.max, 100);
    }
}
