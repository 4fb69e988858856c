//! Income validation
//!
//! The rule set converting raw text input into either a confirmed amount or
//! a specific user-facing error. The messages are part of the dialog
//! contract and must not change.

use thiserror::Error;

use crate::models::Money;

/// Why an income submission was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncomeError {
    /// The field was empty or whitespace-only
    #[error("Income field cannot be empty!")]
    Empty,

    /// The field did not parse as a decimal number
    #[error("Invalid input! Please enter a valid numeric amount.")]
    NotNumeric,

    /// The field parsed to a negative amount
    #[error("Income cannot be negative.")]
    Negative,
}

/// Validate a raw income entry
///
/// Rules are applied in order: empty check, numeric parse, sign check.
pub fn validate_income(input: &str) -> Result<Money, IncomeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IncomeError::Empty);
    }

    let amount = Money::parse(trimmed).map_err(|_| IncomeError::NotNumeric)?;

    if amount.is_negative() {
        return Err(IncomeError::Negative);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_income(""), Err(IncomeError::Empty));
        assert_eq!(validate_income("   "), Err(IncomeError::Empty));
        assert_eq!(validate_income("\t \n"), Err(IncomeError::Empty));
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(validate_income("abc"), Err(IncomeError::NotNumeric));
        assert_eq!(validate_income("12.3.4"), Err(IncomeError::NotNumeric));
        assert_eq!(validate_income("12a"), Err(IncomeError::NotNumeric));
        assert_eq!(validate_income("one hundred"), Err(IncomeError::NotNumeric));
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(validate_income("-5"), Err(IncomeError::Negative));
        assert_eq!(validate_income("-0.01"), Err(IncomeError::Negative));
        assert_eq!(validate_income(" -1234.56 "), Err(IncomeError::Negative));
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(validate_income("0"), Ok(Money::zero()));
        assert_eq!(validate_income("1234.5"), Ok(Money::from_cents(123_450)));
        assert_eq!(validate_income(" 42 "), Ok(Money::from_cents(4200)));
        assert_eq!(validate_income("$99.99"), Ok(Money::from_cents(9999)));
        assert_eq!(validate_income(".5"), Ok(Money::from_cents(50)));
        assert_eq!(validate_income("5."), Ok(Money::from_cents(500)));
        assert_eq!(validate_income("+7"), Ok(Money::from_cents(700)));
    }

    #[test]
    fn test_huge_input_is_rejected_not_a_panic() {
        // Amounts whose cents overflow i64 must report NotNumeric
        assert_eq!(
            validate_income("999999999999999999"),
            Err(IncomeError::NotNumeric)
        );
        assert_eq!(
            validate_income("999999999999999999.99"),
            Err(IncomeError::NotNumeric)
        );
    }

    #[test]
    fn test_empty_takes_priority_over_parse() {
        // Whitespace-only must report Empty, not NotNumeric
        assert_eq!(validate_income("  "), Err(IncomeError::Empty));
    }

    #[test]
    fn test_error_messages_match_contract() {
        assert_eq!(
            IncomeError::Empty.to_string(),
            "Income field cannot be empty!"
        );
        assert_eq!(
            IncomeError::NotNumeric.to_string(),
            "Invalid input! Please enter a valid numeric amount."
        );
        assert_eq!(IncomeError::Negative.to_string(), "Income cannot be negative.");
    }

    #[test]
    fn test_success_dialog_format() {
        let amount = validate_income("1234.5").unwrap();
        assert_eq!(
            format!("Income Recorded Successfully: {}", amount),
            "Income Recorded Successfully: $1,234.50"
        );

        let amount = validate_income(".5").unwrap();
        assert_eq!(
            format!("Income Recorded Successfully: {}", amount),
            "Income Recorded Successfully: $0.50"
        );
    }
}
