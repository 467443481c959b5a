//! Property-based tests for the conversion form.
//!
//! Whatever the input, a response carries exactly one of result or error,
//! and successful conversions invert each other.

use proptest::prelude::*;

use super::default_form;

fn arb_mode() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("intToRoman".to_string()),
        4 => Just("romanToInt".to_string()),
        1 => "[a-zA-Z]{0,12}",
    ]
}

proptest! {
    #[test]
    fn prop_exactly_one_field_set(mode in arb_mode(), input in "\\PC{0,20}") {
        let resp = default_form().handle(&mode, &input);
        prop_assert!(resp.result.is_empty() != resp.error.is_empty());
    }

    #[test]
    fn prop_form_round_trip(n in 1u16..=3999) {
        let form = default_form();
        let resp = form.handle("intToRoman", &n.to_string());
        let roman = resp.result.strip_prefix("Roman: ").unwrap().to_string();
        let back = form.handle("romanToInt", &roman.to_lowercase());
        prop_assert_eq!(back.result, format!("Integer: {}", n));
    }
}
