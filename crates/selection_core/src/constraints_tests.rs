use super::*;

#[test]
fn budget_follows_the_side_to_move() {
    let clock = ClockState {
        white_time: Some(300),
        white_inc: Some(5),
        black_time: Some(60),
        black_inc: Some(2),
        ..ClockState::default()
    };
    let white = TimeBudget::for_side(&clock, Color::White);
    assert_eq!(white.remaining, 300);
    assert_eq!(white.increment, 5);

    let black = TimeBudget::for_side(&clock, Color::Black);
    assert_eq!(black.remaining, 60);
    assert_eq!(black.increment, 2);
}

#[test]
fn move_time_overrides_the_clocks() {
    let clock = ClockState {
        move_time: Some(90),
        white_time: Some(3000),
        white_inc: Some(30),
        ..ClockState::default()
    };
    let budget = TimeBudget::for_side(&clock, Color::White);
    assert_eq!(budget.remaining, 90);
    assert_eq!(budget.increment, 0);
}

#[test]
fn missing_fields_default_to_zero() {
    let budget = TimeBudget::for_side(&ClockState::default(), Color::Black);
    assert_eq!(budget.remaining, 0);
    assert_eq!(budget.increment, 0);
    assert!(!budget.is_generous());
}

#[test]
fn generous_needs_more_than_ten_seconds_a_move() {
    let stocked = TimeBudget {
        remaining: 700,
        increment: 0,
    };
    assert!(stocked.is_generous());

    let short = TimeBudget {
        remaining: 300,
        increment: 0,
    };
    assert!(!short.is_generous());

    // Exactly ten seconds per move is not generous.
    let boundary = TimeBudget {
        remaining: 600,
        increment: 0,
    };
    assert!(!boundary.is_generous());

    // A big increment alone is enough.
    let increment_only = TimeBudget {
        remaining: 0,
        increment: 11,
    };
    assert!(increment_only.is_generous());
}
