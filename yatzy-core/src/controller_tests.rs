use crate::category::Category;
use crate::controller::{DiceSource, InvalidMove, TurnController, MAX_ROLLS};
use crate::state::{PLACEHOLDER_DICE, TOTAL_ROUNDS};
use crate::state_tests::assert_invariants;

fn scripted(faces: &[u8]) -> TurnController {
    TurnController::new(DiceSource::scripted(faces.to_vec()))
}

#[test]
fn start_roll_score_round_trip() {
    // Scripted hand: 2,3,4,5,6 -> chance scores 20.
    let mut c = scripted(&[2, 3, 4, 5, 6]);
    c.start_game();

    let s = c.roll([false; 5]).unwrap();
    assert_invariants(&s);
    assert_eq!(s.roll_count, 1);
    assert_eq!(s.dice, [2, 3, 4, 5, 6]);

    let s = c.select_category(Category::Chance).unwrap();
    assert_invariants(&s);
    assert!(s.is_locked(Category::Chance));
    assert_eq!(s.locked[Category::Chance.index()], Some(20));
    assert_eq!(s.total_score, 20);
    assert_eq!(s.rounds_left, 12);
    // New round: roll count and dice reset.
    assert_eq!(s.roll_count, 0);
    assert_eq!(s.dice, PLACEHOLDER_DICE);

    // Same category again is rejected.
    c.roll([false; 5]).unwrap();
    let err = c.select_category(Category::Chance).unwrap_err();
    assert_eq!(err, InvalidMove::CategoryLocked(Category::Chance));
}

#[test]
fn roll_cap_is_three_per_round() {
    let mut c = scripted(&[1]);
    for i in 1..=MAX_ROLLS {
        let s = c.roll([false; 5]).unwrap();
        assert_eq!(s.roll_count, i);
    }
    assert_eq!(c.roll([false; 5]).unwrap_err(), InvalidMove::RollsExhausted);

    // Locking opens a fresh round of rolls.
    c.select_category(Category::Ones).unwrap();
    assert_eq!(c.roll([false; 5]).unwrap().roll_count, 1);
}

#[test]
fn keep_all_roll_is_legal_and_changes_nothing_but_count() {
    let mut c = scripted(&[4]);
    let s1 = c.roll([false; 5]).unwrap();
    assert_eq!(s1.dice, [4, 4, 4, 4, 4]);

    let s2 = c.roll([true; 5]).unwrap();
    assert_eq!(s2.dice, s1.dice);
    assert_eq!(s2.roll_count, 2);
}

#[test]
fn kept_dice_survive_reroll() {
    // First roll: all 2s. Second roll draws 5s for the unkept indices.
    let mut c = scripted(&[2, 2, 2, 2, 2, 5, 5]);
    c.roll([false; 5]).unwrap();
    let s = c.roll([true, false, true, false, true]).unwrap();
    assert_eq!(s.dice, [2, 5, 2, 5, 2]);
}

#[test]
fn scoring_before_first_roll_is_rejected() {
    let mut c = scripted(&[3]);
    assert_eq!(
        c.select_category(Category::Chance).unwrap_err(),
        InvalidMove::NotYetRolled
    );

    // Also right after a lock, in the next round.
    c.roll([false; 5]).unwrap();
    c.select_category(Category::Chance).unwrap();
    assert_eq!(
        c.select_category(Category::Threes).unwrap_err(),
        InvalidMove::NotYetRolled
    );
}

#[test]
fn zero_score_lock_consumes_the_round() {
    // All 2s: large straight scores zero on this hand.
    let mut c = scripted(&[2]);
    c.roll([false; 5]).unwrap();
    let s = c.select_category(Category::LargeStraight).unwrap();
    assert_eq!(s.locked[Category::LargeStraight.index()], Some(0));
    assert_eq!(s.total_score, 0);
    assert_eq!(s.rounds_left, TOTAL_ROUNDS - 1);
}

#[test]
fn rejected_operations_leave_state_untouched() {
    let mut c = scripted(&[6]);
    c.roll([false; 5]).unwrap();
    c.select_category(Category::Sixes).unwrap();
    let before = *c.state();

    assert!(c.select_category(Category::Sixes).is_err());
    assert_eq!(*c.state(), before);

    // Exhaust rolls, then a rejected roll mutates nothing either.
    for _ in 0..MAX_ROLLS {
        c.roll([false; 5]).unwrap();
    }
    let before = *c.state();
    assert!(c.roll([false; 5]).is_err());
    assert_eq!(*c.state(), before);
}

#[test]
fn full_game_locks_all_thirteen_and_terminates() {
    let mut c = scripted(&[1, 2, 3, 4, 5, 6]);
    c.start_game();

    for (i, cat) in Category::ALL.iter().enumerate() {
        c.roll([false; 5]).unwrap();
        let s = c.select_category(*cat).unwrap();
        assert_invariants(&s);
        assert_eq!(s.rounds_left as usize, TOTAL_ROUNDS as usize - i - 1);
    }

    let s = *c.state();
    assert!(s.game_over);
    assert_eq!(s.rounds_left, 0);
    assert_eq!(s.total_score, s.locked_total());

    assert_eq!(c.roll([false; 5]).unwrap_err(), InvalidMove::GameOver);
    assert_eq!(
        c.select_category(Category::Ones).unwrap_err(),
        InvalidMove::GameOver
    );
}

#[test]
fn end_game_is_idempotent_and_leaves_open_categories_open() {
    let mut c = scripted(&[5]);
    c.roll([false; 5]).unwrap();
    c.select_category(Category::Fives).unwrap(); // 25

    let total = c.end_game();
    assert_eq!(total, 25);
    assert_eq!(c.end_game(), 25);

    let s = *c.state();
    assert!(s.game_over);
    assert!(!s.is_locked(Category::Chance));
    assert_eq!(s.total_score, 25);

    // No further moves after an early end.
    assert_eq!(c.roll([false; 5]).unwrap_err(), InvalidMove::GameOver);
    assert_eq!(
        c.select_category(Category::Chance).unwrap_err(),
        InvalidMove::GameOver
    );
}

#[test]
fn start_game_resets_after_game_over() {
    let mut c = scripted(&[5]);
    c.roll([false; 5]).unwrap();
    c.end_game();

    let s = c.start_game();
    assert_invariants(&s);
    assert!(!s.game_over);
    assert_eq!(s.rounds_left, TOTAL_ROUNDS);
    assert_eq!(s.total_score, 0);
    assert!(c.roll([false; 5]).is_ok());
}

#[test]
fn potential_scores_idempotent_and_reflect_locks() {
    let mut c = scripted(&[3, 3, 3, 2, 2]);
    c.roll([false; 5]).unwrap();

    let p1 = c.potential_scores();
    let p2 = c.potential_scores();
    assert_eq!(p1, p2);
    assert_eq!(p1[Category::FullHouse.index()], 25);
    assert_eq!(p1[Category::Chance.index()], 13);

    // Lock full house; its slot keeps reporting the locked value afterwards.
    c.select_category(Category::FullHouse).unwrap();
    c.roll([false; 5]).unwrap();
    let p3 = c.potential_scores();
    assert_eq!(p3[Category::FullHouse.index()], 25);
    assert_eq!(p3[Category::ThreeOfAKind.index()], 13); // dice cycled back to 3,3,3,2,2
}

#[test]
fn seeded_dice_are_reproducible() {
    let mut a = TurnController::new(DiceSource::seeded(999));
    let mut b = TurnController::new(DiceSource::seeded(999));

    for _ in 0..3 {
        let sa = a.roll([false; 5]).unwrap();
        let sb = b.roll([false; 5]).unwrap();
        assert_eq!(sa.dice, sb.dice);
    }
}

#[test]
fn rolled_faces_stay_in_range() {
    let mut c = TurnController::new(DiceSource::seeded(7));
    for round in 0..TOTAL_ROUNDS as usize {
        for _ in 0..MAX_ROLLS {
            let s = c.roll([false; 5]).unwrap();
            assert!(s.dice.iter().all(|d| (1..=6).contains(d)));
        }
        c.select_category(Category::ALL[round]).unwrap();
    }
    assert!(c.state().game_over);
}
