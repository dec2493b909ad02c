//! Validator: runs the rule table over form data.
//!
//! Validation is pure. Every rule is evaluated on every pass, there is no
//! short-circuit between rules, and the resulting [`ErrorMap`] is built
//! from scratch each time.

use tracing::debug;

use crate::form::FormData;
use crate::rules::{FieldRule, FORM_RULES};
use crate::types::ErrorMap;

/// Applies a set of [`FieldRule`]s to form data.
pub struct Validator {
    rules: Vec<FieldRule>,
}

impl Validator {
    /// A validator over the registration form rules.
    pub fn new() -> Self {
        Self::with_rules(FORM_RULES.to_vec())
    }

    /// A validator over a custom rule set.
    pub fn with_rules(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Compute the full error map for `data`.
    pub fn validate(&self, data: &FormData) -> ErrorMap {
        let mut errors = ErrorMap::new();

        for rule in &self.rules {
            if let Some(message) = rule.violation(data) {
                errors.insert(rule.key, message);
            }
        }

        debug!(
            rules = self.rules.len(),
            failing = errors.len(),
            "Validated form data"
        );

        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorKey, Field};

    fn valid_data() -> FormData {
        FormData {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            username: "asha".to_string(),
            email: "asha@example.in".to_string(),
            password: "hunter2".to_string(),
            phone_code: "+91".to_string(),
            phone_number: "9876543210".to_string(),
            country: "India".to_string(),
            city: "Mumbai".to_string(),
            pan: "ABCDE1234F".to_string(),
            aadhar: "123456789012".to_string(),
        }
    }

    #[test]
    fn test_valid_data_has_no_errors() {
        let errors = Validator::new().validate(&valid_data());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_form_fails_every_rule() {
        let errors = Validator::new().validate(&FormData::default());
        assert_eq!(errors.len(), 10);
        assert_eq!(errors.get(ErrorKey::FirstName), Some("First name is required."));
        assert_eq!(errors.get(ErrorKey::Email), Some("Invalid email."));
        assert_eq!(errors.get(ErrorKey::Phone), Some("Valid phone number is required."));
        assert_eq!(errors.get(ErrorKey::Aadhar), Some("Invalid Aadhar number."));
    }

    #[test]
    fn test_failures_are_independent() {
        let data = valid_data()
            .with_value(Field::Email, "not-an-email")
            .with_value(Field::Pan, "ABCDE123F");
        let errors = Validator::new().validate(&data);
        let keys: Vec<ErrorKey> = errors.keys().collect();
        assert_eq!(keys, vec![ErrorKey::Email, ErrorKey::Pan]);
    }

    #[test]
    fn test_missing_phone_code_fails_with_valid_number() {
        let data = valid_data().with_value(Field::PhoneCode, "");
        let errors = Validator::new().validate(&data);
        assert!(errors.contains(ErrorKey::Phone));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_stale_city_is_not_an_error() {
        let data = valid_data().with_value(Field::Country, "USA");
        assert!(Validator::new().validate(&data).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let validator = Validator::new();
        let data = valid_data().with_value(Field::Username, "");
        assert_eq!(validator.validate(&data), validator.validate(&data));
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = FORM_RULES
            .iter()
            .copied()
            .filter(|rule| rule.key == ErrorKey::Pan)
            .collect();
        let validator = Validator::with_rules(rules);
        let errors = validator.validate(&FormData::default());
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ErrorKey::Pan));
    }
}
