use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::{FieldError, IntakeField, ValidIntake, ValidationErrors};

/// Shown when the customer field is not an email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Shown when the request text is too short.
pub const REQUEST_TOO_SHORT_MESSAGE: &str = "Request description must be at least 10 characters.";

/// Minimum request length in UTF-16 code units, counted without trimming.
///
/// Browser form validation measures strings the same way, so a request the
/// form accepts is never rejected here.
pub const MIN_REQUEST_LEN: usize = 10;

// The leading-dot and double-dot rules need lookahead, which regex-lite
// lacks; `is_valid_email` checks them separately.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+.-]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Validate the intake form fields.
///
/// Both fields are always checked, so a submission can fail on both at once.
/// Pure: the same input always gives the same result.
pub fn validate(customer: &str, request: &str) -> Result<ValidIntake, ValidationErrors> {
    let mut errors = Vec::new();

    if !is_valid_email(customer) {
        errors.push(FieldError::new(IntakeField::Customer, INVALID_EMAIL_MESSAGE));
    }

    if request.encode_utf16().count() < MIN_REQUEST_LEN {
        errors.push(FieldError::new(
            IntakeField::Request,
            REQUEST_TOO_SHORT_MESSAGE,
        ));
    }

    if errors.is_empty() {
        Ok(ValidIntake::new(customer.to_string(), request.to_string()))
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// Check that `value` has the shape of an email address.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}
