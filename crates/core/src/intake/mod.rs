//! Intake validation for new call requests.

mod types;
mod validate;

pub use types::{FieldError, IntakeField, ValidIntake, ValidationErrors};
pub use validate::{
    is_valid_email, validate, INVALID_EMAIL_MESSAGE, MIN_REQUEST_LEN, REQUEST_TOO_SHORT_MESSAGE,
};
