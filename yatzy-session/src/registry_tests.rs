use yatzy_core::{Category, InvalidMove};

use crate::registry::{SessionError, SessionRegistry};

#[test]
fn unknown_game_id_is_rejected() {
    let reg = SessionRegistry::new();
    let err = reg.roll(999, [false; 5]).unwrap_err();
    assert!(matches!(err, SessionError::UnknownGame(999)));
    assert!(matches!(
        reg.state(999).unwrap_err(),
        SessionError::UnknownGame(999)
    ));
}

#[test]
fn games_are_independent() {
    let reg = SessionRegistry::with_seed(1);
    let (a, _) = reg.start_game();
    let (b, _) = reg.start_game();
    assert_ne!(a, b);
    assert_eq!(reg.len(), 2);

    reg.roll(a, [false; 5]).unwrap();
    let va = reg.select_category(a, Category::Chance).unwrap();
    assert!(va.row(Category::Chance).locked);

    // Game b saw none of that.
    let vb = reg.state(b).unwrap();
    assert_eq!(vb.roll_count, 0);
    assert!(!vb.row(Category::Chance).locked);
    assert_eq!(vb.total_score, 0);
}

#[test]
fn invalid_moves_surface_through_the_registry() {
    let reg = SessionRegistry::with_seed(3);
    let (id, _) = reg.start_game();
    let err = reg.select_category(id, Category::Ones).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Move(InvalidMove::NotYetRolled)
    ));
}

#[test]
fn seeded_registries_reproduce_dice() {
    let r1 = SessionRegistry::with_seed(77);
    let r2 = SessionRegistry::with_seed(77);
    let (a, _) = r1.start_game();
    let (b, _) = r2.start_game();
    let va = r1.roll(a, [false; 5]).unwrap();
    let vb = r2.roll(b, [false; 5]).unwrap();
    assert_eq!(va.dice_values, vb.dice_values);
}

#[test]
fn remove_forgets_the_game() {
    let reg = SessionRegistry::new();
    let (id, _) = reg.start_game();
    reg.remove(id).unwrap();
    assert!(reg.is_empty());
    assert!(matches!(
        reg.roll(id, [false; 5]).unwrap_err(),
        SessionError::UnknownGame(_)
    ));
}
