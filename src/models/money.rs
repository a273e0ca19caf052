//! Monetary helpers for expense amounts
//!
//! Amounts are carried as `f64` at full precision through every accumulation
//! and only rounded to cents when balances are stored or displayed. Rounding
//! is half-away-from-zero (`f64::round`).

use std::fmt;

/// Nets within this distance of zero are considered settled
pub const SETTLED_EPSILON: f64 = 1e-9;

/// Round an amount to two fractional digits, half away from zero
///
/// Negative zero is folded into `0.0` so settled balances never print as `-0`.
pub fn round_cents(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Check whether a net amount counts as settled
pub fn is_settled(amount: f64) -> bool {
    amount.abs() < SETTLED_EPSILON
}

/// Format an amount with two decimals and an optional currency symbol
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 && !is_settled(amount) {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount.abs())
    }
}

/// Parse an amount typed by a user at entry time
///
/// Accepts formats: "10.50", "10", "$10.50", "-3" (sign is kept so the caller
/// can reject it with a precise message). Non-finite values are rejected.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest).trim();

    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = rest
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
