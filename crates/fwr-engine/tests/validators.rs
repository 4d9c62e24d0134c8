//! Property tests for the field validators.

use fwr_model::DataType;
use fwr_engine::validate_field;
use proptest::prelude::*;

proptest! {
    /// Two-digit years below 11 land in the 2000s, the rest in the 1900s.
    #[test]
    fn century_pivot(yy in 0u32..100, mm in 1u32..=12, dd in 1u32..=28) {
        let raw = format!("{yy:02}{mm:02}{dd:02}");
        let v = validate_field(DataType::Date, "dob", &raw);
        let expected_year = if yy < 11 { 2000 + yy } else { 1900 + yy };
        prop_assert_eq!(v.value, format!("{expected_year:04}-{mm:02}-{dd:02}"));
        prop_assert!(v.reason.is_none());
    }

    /// Out-of-range months never validate, whatever the year and day.
    #[test]
    fn bad_month_always_fails(yy in 0u32..100, mm in 13u32..100, dd in 0u32..100) {
        let raw = format!("{yy:02}{mm:02}{dd:02}");
        let v = validate_field(DataType::Date, "dob", &raw);
        prop_assert_eq!(&v.value, "");
        prop_assert_eq!(v.reason.as_deref(), Some("Invalid DOB"));
    }

    /// Anything that isn't exactly six digits fails.
    #[test]
    fn non_six_digit_input_fails(raw in "[0-9]{0,5}|[0-9]{7,10}") {
        let v = validate_field(DataType::Date, "dob", &raw);
        prop_assert_eq!(v.reason.as_deref(), Some("Invalid DOB"));
    }

    /// Pure alpha/space strings always pass the text validator unchanged.
    #[test]
    fn alpha_space_text_passes(raw in "[A-Za-z ]{0,30}") {
        let v = validate_field(DataType::Text, "first_name", &raw);
        prop_assert_eq!(v.value, raw);
        prop_assert!(v.reason.is_none());
    }

    /// A single digit or symbol anywhere poisons a text field.
    #[test]
    fn text_with_digit_fails(prefix in "[A-Za-z]{0,10}", bad in "[0-9!@#$%^&*()_+.-]", suffix in "[A-Za-z]{0,10}") {
        let raw = format!("{prefix}{bad}{suffix}");
        let v = validate_field(DataType::Text, "first_name", &raw);
        prop_assert_eq!(&v.value, "");
        let reason = v.reason.expect("reason");
        prop_assert!(reason.contains("first_name"));
    }

    /// Digit-only strings pass the integer validator unchanged.
    #[test]
    fn digits_pass_integer(raw in "[0-9]{1,18}") {
        let v = validate_field(DataType::Integer, "zip", &raw);
        prop_assert_eq!(v.value, raw);
        prop_assert!(v.reason.is_none());
    }

    /// The raw validator never fails and never alters its input.
    #[test]
    fn raw_is_identity(raw in "\\PC{0,40}") {
        let v = validate_field(DataType::Raw, "payload", &raw);
        prop_assert_eq!(v.value, raw);
        prop_assert!(v.reason.is_none());
    }
}
