//! Aggregate figures over a list of entries

use crate::domain::entry::{Entry, EntryType};

/// Income, expense and balance for a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl Totals {
    /// Sum amounts per entry type; balance is always `income - expense`
    pub fn from_entries(entries: &[Entry]) -> Self {
        let sum_of = |kind: EntryType| -> f64 {
            entries
                .iter()
                .filter(|entry| entry.kind == kind)
                .map(|entry| entry.amount)
                .sum()
        };

        let income = sum_of(EntryType::Income);
        let expense = sum_of(EntryType::Expense);

        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Format a figure as `<prefix><value>` with exactly two decimals.
///
/// The sign follows the prefix (`$-1200.00`).
pub fn format_currency(prefix: &str, value: f64) -> String {
    format!("{}{:.2}", prefix, normalize_zero(value))
}

/// Format an amount with thousands separators (`$1,200.00`).
pub fn format_currency_grouped(prefix: &str, value: f64) -> String {
    let value = normalize_zero(value);
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, prefix, grouped, fraction)
}

// Values that round to zero would otherwise print as "-0.00".
fn normalize_zero(value: f64) -> f64 {
    if (value * 100.0).round() == 0.0 {
        0.0
    } else {
        value
    }
}
