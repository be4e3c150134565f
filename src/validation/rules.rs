//! Field validators applied before any request is issued.
//!
//! Every validator returns [`ConsoleError::Validation`] carrying the offending
//! field and the message the console shows next to it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{ConsoleError, ConsoleResult};

/// Message for malformed identifiers.
pub const INVALID_UUID: &str = "Invalid UUID format";
/// Message for malformed phone numbers.
pub const INVALID_PHONE: &str = "Invalid phone number format";
/// Message for malformed email addresses.
pub const INVALID_EMAIL: &str = "Invalid email format";
/// Message for out-of-range multipliers.
pub const INVALID_MULTIPLIER: &str = "Multiplier must be 0 or 1";
/// Message for inverted or empty date ranges.
pub const INVALID_DATE_RANGE: &str = "Start date must be before end date";

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern compiles")
});

// E.164: optional plus, no leading zero, at most 15 digits.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern compiles")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Parses a canonical hyphenated UUID.
///
/// Braced, URN and simple (unhyphenated) forms are rejected even though the
/// `uuid` crate would accept them.
///
/// # Example
///
/// ```
/// use fund_disbursement::validation::parse_uuid;
///
/// assert!(parse_uuid("workerUuid", "5d0c3b9e-2a6f-4c1e-8f0d-1b2c3d4e5f60").is_ok());
/// assert!(parse_uuid("workerUuid", "not-a-uuid").is_err());
/// ```
pub fn parse_uuid(field: &str, input: &str) -> ConsoleResult<Uuid> {
    let candidate = input.trim();
    if !UUID_PATTERN.is_match(candidate) {
        return Err(ConsoleError::validation(field, INVALID_UUID));
    }
    Uuid::try_parse(candidate).map_err(|_| ConsoleError::validation(field, INVALID_UUID))
}

/// Checks a phone number against the E.164 shape.
pub fn validate_phone(field: &str, phone: &str) -> ConsoleResult<()> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(ConsoleError::validation(field, INVALID_PHONE))
    }
}

/// Checks an email address.
pub fn validate_email(field: &str, email: &str) -> ConsoleResult<()> {
    let well_formed = EMAIL_PATTERN.is_match(email) && !email.starts_with('.') && !email.contains("..");
    if well_formed {
        Ok(())
    } else {
        Err(ConsoleError::validation(field, INVALID_EMAIL))
    }
}

/// Checks that an amount or rate is strictly positive.
///
/// The message names the field in sentence case, e.g.
/// "Amount must be a positive number".
pub fn validate_positive(field: &str, value: Decimal) -> ConsoleResult<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ConsoleError::validation(
            field,
            format!("{} must be a positive number", humanize(field)),
        ))
    }
}

/// Checks that a position multiplier is exactly 0 or 1.
pub fn validate_multiplier(multiplier: Decimal) -> ConsoleResult<()> {
    if multiplier == Decimal::ZERO || multiplier == Decimal::ONE {
        Ok(())
    } else {
        Err(ConsoleError::validation("multiplier", INVALID_MULTIPLIER))
    }
}

/// Checks that `start` is strictly before `end`.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ConsoleResult<()> {
    if start < end {
        Ok(())
    } else {
        Err(ConsoleError::validation("startDate", INVALID_DATE_RANGE))
    }
}

/// Checks that a required text field is non-empty and at most `max` chars.
pub fn validate_required(field: &str, value: &str, max: usize) -> ConsoleResult<()> {
    let length = value.chars().count();
    if length == 0 {
        Err(ConsoleError::validation(
            field,
            format!("{} is required", humanize(field)),
        ))
    } else if length > max {
        Err(ConsoleError::validation(field, "Name too long"))
    } else {
        Ok(())
    }
}

/// Turns a camelCase field name into a sentence-case label ("fullName" -> "Full name").
fn humanize(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 2);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}
