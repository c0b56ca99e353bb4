//! Candidate entry validation

use crate::domain::entry::{Candidate, EntryType};
use std::str::FromStr;
use thiserror::Error;

/// Reason a candidate entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("type must be income or expense, got '{0}'")]
    UnknownType(String),

    #[error("amount '{0}' is not a number")]
    NotANumber(String),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Check raw form input and build a candidate from it.
///
/// Fields are checked in form order and the first failure is returned.
/// Dates are only required to be non-empty.
pub fn check(
    kind: &str,
    category: &str,
    amount: &str,
    date: &str,
) -> Result<Candidate, ValidationError> {
    let kind = required("type", kind)?;
    let category = required("category", category)?;
    let amount = required("amount", amount)?;
    let date = required("date", date)?;

    let kind =
        EntryType::from_str(kind).map_err(|_| ValidationError::UnknownType(kind.to_string()))?;

    let parsed: f64 = amount
        .parse()
        .map_err(|_| ValidationError::NotANumber(amount.to_string()))?;
    if !parsed.is_finite() {
        return Err(ValidationError::NotANumber(amount.to_string()));
    }
    if parsed <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(Candidate {
        kind,
        category: category.to_string(),
        amount: parsed,
        date: date.to_string(),
    })
}

/// Whether the raw form input would be accepted
pub fn validate(kind: &str, category: &str, amount: &str, date: &str) -> bool {
    check(kind, category, amount, date).is_ok()
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_rejected() {
        assert!(!validate("income", "Food", "0", "2024-01-01"));
    }

    #[test]
    fn test_positive_decimal_accepted() {
        assert!(validate("income", "Food", "20.5", "2024-01-01"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            check("expense", "Food", "-3", "2024-01-01"),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(
            check("", "Food", "1", "2024-01-01"),
            Err(ValidationError::MissingField("type"))
        );
        assert_eq!(
            check("income", "", "1", "2024-01-01"),
            Err(ValidationError::MissingField("category"))
        );
        assert_eq!(
            check("income", "Food", "", "2024-01-01"),
            Err(ValidationError::MissingField("amount"))
        );
        assert_eq!(
            check("income", "Food", "1", ""),
            Err(ValidationError::MissingField("date"))
        );
    }

    #[test]
    fn test_blank_category_counts_as_missing() {
        assert_eq!(
            check("income", "   ", "1", "2024-01-01"),
            Err(ValidationError::MissingField("category"))
        );
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        assert_eq!(
            check("income", "Food", "abc", "2024-01-01"),
            Err(ValidationError::NotANumber("abc".to_string()))
        );
        assert!(!validate("income", "Food", "12abc", "2024-01-01"));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(!validate("income", "Food", "inf", "2024-01-01"));
        assert!(!validate("income", "Food", "NaN", "2024-01-01"));
        assert!(!validate("income", "Food", "1e400", "2024-01-01"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert_eq!(
            check("transfer", "Food", "1", "2024-01-01"),
            Err(ValidationError::UnknownType("transfer".to_string()))
        );
    }

    #[test]
    fn test_date_format_not_checked() {
        assert!(validate("expense", "Misc", "5", "sometime in march"));
    }

    #[test]
    fn test_check_trims_and_parses() {
        let candidate = check(" Expense ", " Rent ", " 1200 ", " 2024-03-01 ").unwrap();
        assert_eq!(candidate.kind, EntryType::Expense);
        assert_eq!(candidate.category, "Rent");
        assert_eq!(candidate.amount, 1200.0);
        assert_eq!(candidate.date, "2024-03-01");
    }
}
