//! Operator input validation.
//!
//! Names may contain only letters and whitespace, and count fields
//! (hours worked, projects completed) must be non-negative integers.
//! Decimal amounts are parsed but not range-checked.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};

/// Returns true if every character of `name` is a letter or whitespace.
///
/// An empty name passes: there is no length requirement.
///
/// # Examples
///
/// ```
/// use employee_payroll::validation::is_valid_name;
///
/// assert!(is_valid_name("John Smith"));
/// assert!(!is_valid_name("J0hn"));
/// assert!(is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// Checks a name, returning [`PayrollError::InvalidName`] if it fails [`is_valid_name`].
pub fn validate_name(name: &str) -> PayrollResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(PayrollError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Parses a non-negative integer such as hours worked or projects completed.
///
/// Surrounding whitespace is ignored. Fails with
/// [`PayrollError::InvalidNumber`] when the text is not an integer or is
/// negative.
///
/// # Examples
///
/// ```
/// use employee_payroll::validation::parse_non_negative_integer;
///
/// assert_eq!(parse_non_negative_integer(" 40 ").unwrap(), 40);
/// assert!(parse_non_negative_integer("-1").is_err());
/// assert!(parse_non_negative_integer("forty").is_err());
/// ```
pub fn parse_non_negative_integer(text: &str) -> PayrollResult<u32> {
    let trimmed = text.trim();

    let value = i64::from_str(trimmed).map_err(|_| PayrollError::InvalidNumber {
        input: text.to_string(),
        reason: "not a whole number".to_string(),
    })?;

    if value < 0 {
        return Err(PayrollError::InvalidNumber {
            input: text.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    u32::try_from(value).map_err(|_| PayrollError::InvalidNumber {
        input: text.to_string(),
        reason: format!("must be at most {}", u32::MAX),
    })
}

/// Parses a decimal amount such as a salary, wage or project payment.
///
/// Any numeric value is accepted, negatives included. Scientific notation
/// (`1e3`) is accepted as well.
pub fn parse_amount(text: &str) -> PayrollResult<Decimal> {
    let trimmed = text.trim();

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PayrollError::InvalidNumber {
            input: text.to_string(),
            reason: "not a number".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_name_with_letters_and_space_is_valid() {
        assert!(is_valid_name("John Smith"));
    }

    #[test]
    fn test_name_with_digit_is_invalid() {
        assert!(!is_valid_name("J0hn"));
    }

    #[test]
    fn test_empty_name_is_valid() {
        assert!(is_valid_name(""));
    }

    #[test]
    fn test_name_with_punctuation_is_invalid() {
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("Mary-Jane"));
    }

    #[test]
    fn test_name_with_tab_is_valid() {
        assert!(is_valid_name("Ann\tLee"));
    }

    #[test]
    fn test_validate_name_reports_offending_name() {
        match validate_name("R2D2") {
            Err(PayrollError::InvalidName { name }) => assert_eq!(name, "R2D2"),
            other => panic!("Expected InvalidName error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_negative_integer_accepts_zero() {
        assert_eq!(parse_non_negative_integer("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_non_negative_integer_rejects_negative() {
        match parse_non_negative_integer("-5") {
            Err(PayrollError::InvalidNumber { input, reason }) => {
                assert_eq!(input, "-5");
                assert_eq!(reason, "must not be negative");
            }
            other => panic!("Expected InvalidNumber error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_negative_integer_rejects_text_and_fractions() {
        assert!(parse_non_negative_integer("abc").is_err());
        assert!(parse_non_negative_integer("4.5").is_err());
        assert!(parse_non_negative_integer("").is_err());
    }

    #[test]
    fn test_parse_non_negative_integer_rejects_overflow() {
        assert!(parse_non_negative_integer("4294967296").is_err());
        assert_eq!(
            parse_non_negative_integer("4294967295").unwrap(),
            u32::MAX
        );
    }

    #[test]
    fn test_parse_amount_accepts_negative_and_fractional() {
        assert_eq!(parse_amount("3000").unwrap(), dec("3000"));
        assert_eq!(parse_amount(" 15.75\n").unwrap(), dec("15.75"));
        assert_eq!(parse_amount("-20").unwrap(), dec("-20"));
    }

    #[test]
    fn test_parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1.5e3").unwrap(), dec("1500"));
    }

    #[test]
    fn test_parse_amount_accepts_decimal_extremes() {
        assert_eq!(
            parse_amount("79228162514264337593543950335").unwrap(),
            Decimal::MAX
        );
        assert_eq!(
            parse_amount("-79228162514264337593543950335").unwrap(),
            Decimal::MIN
        );
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert!(parse_amount("lots").is_err());
    }

    proptest! {
        #[test]
        fn prop_letters_and_spaces_are_valid(name in "[A-Za-z ]{0,40}") {
            prop_assert!(is_valid_name(&name));
        }

        #[test]
        fn prop_any_digit_makes_name_invalid(prefix in "[A-Za-z]{0,10}", digit in 0u8..10, suffix in "[A-Za-z ]{0,10}") {
            let name = format!("{}{}{}", prefix, digit, suffix);
            prop_assert!(!is_valid_name(&name));
        }

        #[test]
        fn prop_non_negative_integers_parse(value in 0u32..=u32::MAX) {
            prop_assert_eq!(parse_non_negative_integer(&value.to_string()).unwrap(), value);
        }
    }
}
