//! Form domain layer
//!
//! Field values, focus navigation and the validation rules for the
//! contact form.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form};
pub use validation::{check_field, is_valid_email, FieldError, ValidationError};
