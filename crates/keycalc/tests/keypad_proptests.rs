//! Property-based tests for the keypad and keyboard mapping

use keycalc::core::evaluator::Input;
use keycalc::core::{BinaryOp, Operator, UnaryOp};
use keycalc::keypad::Keypad;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any keyboard operator key with its operator
fn operator_key_strategy() -> impl Strategy<Value = (&'static str, Operator)> {
    prop_oneof![
        Just(("+", Operator::from(BinaryOp::Add))),
        Just(("-", Operator::from(BinaryOp::Subtract))),
        Just(("*", Operator::from(BinaryOp::Multiply))),
        Just(("/", Operator::from(BinaryOp::Divide))),
        Just(("^", Operator::from(BinaryOp::Power))),
        Just(("%", Operator::from(UnaryOp::Percent))),
    ]
}

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..9usize, 0usize..5usize)
}

// ===== Grid properties =====

proptest! {
    /// Button at valid position should exist
    #[test]
    fn prop_button_at_valid_position_exists((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Button at invalid row should not exist
    #[test]
    fn prop_button_at_invalid_row_missing(row in 9usize..100usize, col in 0usize..5usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Button at invalid col should not exist
    #[test]
    fn prop_button_at_invalid_col_missing(row in 0usize..9usize, col in 5usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Finding button by ID then looking up by position should be consistent
    #[test]
    fn prop_button_id_position_consistency((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        let found = keypad.find_button_by_id(&btn.id).unwrap();
        prop_assert_eq!(found.row, row);
        prop_assert_eq!(found.col, col);
    }

    /// Clicking a button sends the same input as pressing its label
    #[test]
    fn prop_click_matches_label(
        (row, col) in grid_position_strategy(),
        second in any::<bool>(),
    ) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        prop_assert_eq!(
            keypad.handle_click(&btn.id, second),
            keypad.resolve(btn.label, second)
        );
    }

    /// Second function only changes operator buttons
    #[test]
    fn prop_second_function_only_remaps_operators((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        let normal = btn.input_for(false);
        let second = btn.input_for(true);
        if normal != second {
            prop_assert!(matches!(normal, Input::Operator(Operator::Unary(_))));
            prop_assert!(matches!(second, Input::Operator(Operator::Unary(_))));
        }
    }

    /// All digits have a button whose id names the digit
    #[test]
    fn prop_all_digits_findable(d in digit_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.find_button_by_id(&format!("btn-{d}")).unwrap();
        prop_assert_eq!(btn.input, Input::Digit(d));
    }
}

// ===== Keyboard mapping =====

proptest! {
    /// All digit keys should map to digit inputs
    #[test]
    fn prop_digit_keys_map_to_digits(d in digit_strategy()) {
        prop_assert_eq!(Keypad::key_to_input(&d.to_string()), Some(Input::Digit(d)));
    }

    /// All operator keys should map to operator inputs
    #[test]
    fn prop_operator_keys_map_to_operators((key, op) in operator_key_strategy()) {
        prop_assert_eq!(Keypad::key_to_input(key), Some(Input::Operator(op)));
    }

    /// Unknown multi-letter keys should map to None
    #[test]
    fn prop_unknown_keys_map_to_none(key in "[a-zA-Z]{2,10}") {
        prop_assume!(!["Enter", "Escape", "Delete", "Backspace"].contains(&key.as_str()));
        prop_assert!(Keypad::key_to_input(&key).is_none());
    }

    /// Multi-digit strings are not single keys
    #[test]
    fn prop_numbers_are_not_keys(n in 10u32..100_000u32) {
        prop_assert!(Keypad::key_to_input(&n.to_string()).is_none());
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_keypad_is_9_by_5() {
    let keypad = Keypad::new();
    assert_eq!(keypad.button_count(), 45);
    assert_eq!(keypad.dimensions(), (9, 5));
}

#[test]
fn invariant_all_buttons_have_unique_ids_and_positions() {
    let keypad = Keypad::new();
    let mut ids = std::collections::HashSet::new();
    let mut positions = std::collections::HashSet::new();
    for btn in keypad.buttons() {
        assert!(ids.insert(btn.id.clone()), "Duplicate ID: {}", btn.id);
        assert!(positions.insert((btn.row, btn.col)), "Duplicate position");
    }
}

#[test]
fn invariant_keypad_has_special_buttons() {
    let keypad = Keypad::new();
    for id in [
        "btn-equals",
        "btn-clear",
        "btn-clear-entry",
        "btn-backspace",
        "btn-decimal",
        "btn-sign",
        "btn-angle",
        "btn-notation",
        "btn-second",
        "btn-mc",
        "btn-mr",
        "btn-ms",
        "btn-m+",
        "btn-m-",
        "btn-pi",
        "btn-e",
    ] {
        assert!(keypad.find_button_by_id(id).is_some(), "Missing {id}");
    }
}

#[test]
fn invariant_every_binary_operator_has_a_button() {
    let keypad = Keypad::new();
    for op in BinaryOp::ALL {
        let id = format!("btn-{}", op.name());
        assert!(keypad.find_button_by_id(&id).is_some(), "Missing {id}");
    }
}
