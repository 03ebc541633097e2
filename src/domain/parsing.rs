//! Pure parsing and normalization of raw request strings.
//!
//! Every function here is synchronous, touches no store, and returns a
//! [`LedgerResult`]; the application layer lifts these outcomes into
//! pipelines. Amounts are converted to integer cents to avoid
//! floating-point rounding in balance arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::errors::{LedgerError, LedgerResult};

/// Title-cases a single word: first character upper-cased, the rest
/// lower-cased.
#[must_use]
pub fn capitalize_word(word: &str) -> String {
    let mut characters = word.trim().chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &characters.as_str().to_lowercase()
    })
}

/// Title-cases every whitespace-separated word of a sentence.
///
/// Idempotent: applying it twice yields the same string as applying it
/// once.
#[must_use]
pub fn capitalize_sentence(sentence: &str) -> String {
    sentence
        .trim()
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validates and normalizes a person name.
///
/// # Errors
///
/// Fails with `InvalidInput("name")` when the raw string is shorter than
/// two characters.
pub fn parse_name(name: &str) -> LedgerResult<String> {
    if name.chars().count() < 2 {
        return Err(LedgerError::InvalidInput("name"));
    }
    Ok(capitalize_sentence(name))
}

/// Like [`parse_name`], with the failure relabeled as the first name's.
///
/// # Errors
///
/// Fails with `InvalidInput("first name")`.
pub fn parse_first_name(name: &str) -> LedgerResult<String> {
    parse_name(name).map_err(|_| LedgerError::InvalidInput("first name"))
}

/// Like [`parse_name`], with the failure relabeled as the last name's.
///
/// # Errors
///
/// Fails with `InvalidInput("last name")`.
pub fn parse_last_name(name: &str) -> LedgerResult<String> {
    parse_name(name).map_err(|_| LedgerError::InvalidInput("last name"))
}

/// Validates and normalizes an email address.
///
/// The only shape check is a minimum length of two and the presence of an
/// `@`; the stored form is trimmed and lower-cased.
///
/// # Errors
///
/// Fails with `InvalidInput("email")`.
pub fn parse_email(email: &str) -> LedgerResult<String> {
    if email.chars().count() < 2 || !email.contains('@') {
        return Err(LedgerError::InvalidInput("email"));
    }
    Ok(email.trim().to_lowercase())
}

/// Parses a decimal amount string into signed integer cents, truncating
/// toward zero past the second fractional digit.
///
/// The integer part is taken verbatim and only the first two fractional
/// digits contribute; a single fractional digit is right-padded with a
/// zero. `"10.099"` is 1009 cents, not 1010; `"0.00011"` is 0 cents.
///
/// # Errors
///
/// Fails with `InvalidInput("amount")` when the trimmed string is not a
/// plain decimal number, or when the cent value overflows `i64`.
pub fn parse_amount(amount: &str) -> LedgerResult<i64> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidInput("amount"))?;

    value
        .checked_mul(Decimal::from(100))
        .and_then(|cents| cents.trunc().to_i64())
        .ok_or(LedgerError::InvalidInput("amount"))
}
