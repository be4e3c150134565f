//! Client-side input validation and sanitisation.
//!
//! Services run these checks before touching the network, so a rejected input
//! never reaches the service.

mod rules;
mod sanitize;

pub use rules::{
    INVALID_DATE_RANGE, INVALID_EMAIL, INVALID_MULTIPLIER, INVALID_PHONE, INVALID_UUID,
    parse_uuid, validate_date_range, validate_email, validate_multiplier, validate_phone,
    validate_positive, validate_required,
};
pub use sanitize::{sanitize_optional, sanitize_text};
