//! # regform-core
//!
//! Registration form validation and state engine.
//!
//! This crate provides the logic behind a registration form:
//! - Which fields are invalid, and with what message?
//! - Which of those errors should the user see yet?
//! - Has the form been submitted successfully?
//!
//! ## Key Guarantees
//!
//! 1. **Pure validation**: Same data always produces the same [`ErrorMap`]
//! 2. **Independent rules**: Every rule runs on every pass
//! 3. **Touched gating**: An error is shown only once a field it covers is touched
//! 4. **Front-end agnostic**: State changes are reducer transitions on [`FormState`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use regform_core::{App, FormEvent, Field, Outcome};
//!
//! let mut app = App::new();
//! app.dispatch(FormEvent::edit(Field::Email, "a@b.co"));
//! app.dispatch(FormEvent::Blur(Field::Email));
//!
//! match app.dispatch(FormEvent::Submit) {
//!     Some(Outcome::Submitted(submission)) => println!("OK: {}", submission.data.email),
//!     Some(Outcome::Rejected { errors }) => println!("{} errors", errors.len()),
//!     _ => {}
//! }
//! ```

pub mod app;
pub mod controller;
pub mod form;
pub mod locations;
pub mod rules;
pub mod success;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use app::{App, Route};
pub use controller::{FormController, FormEvent, FormState, Outcome};
pub use form::{FormData, FormError};
pub use locations::{cities_for, countries};
pub use rules::{rule_for, FieldRule, FORM_RULES};
pub use success::SuccessView;
pub use types::{ErrorKey, ErrorMap, Field, FieldParseError, Submission, TouchedSet};
pub use validator::Validator;

/// Validate form data against the registration form rules.
///
/// This is the main entry point for one-off validation.
///
/// # Returns
///
/// An [`ErrorMap`] with one entry per failing rule; empty when the data is
/// valid.
pub fn validate(data: &FormData) -> ErrorMap {
    Validator::new().validate(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validation() {
        let data = FormData::from_yaml(
            r#"
firstName: "Priya"
lastName: "Shah"
username: "pshah"
email: "priya@shah.in"
password: "s3cret"
phoneCode: "+91"
phoneNumber: "9123456780"
country: "India"
city: "Mumbai"
pan: "PQRST6789Z"
aadhar: "987654321098"
"#,
        )
        .unwrap();

        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_invalid_identifiers_reported() {
        let data = FormData::default()
            .with_value(Field::Pan, "ABCDE123F")
            .with_value(Field::Aadhar, "12345");
        let errors = validate(&data);

        assert_eq!(errors.get(ErrorKey::Pan), Some("Invalid PAN number."));
        assert_eq!(errors.get(ErrorKey::Aadhar), Some("Invalid Aadhar number."));
    }
}
