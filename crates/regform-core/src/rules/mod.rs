//! Validation rule table.
//!
//! Each entry pairs an [`ErrorKey`] with a predicate over the whole
//! [`FormData`] and the fixed message reported when the predicate fails.
//! Rules are independent of one another; the validator runs all of them.

pub mod patterns;

use lazy_static::lazy_static;

use crate::form::FormData;
use crate::types::ErrorKey;

/// One named validation rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub key: ErrorKey,
    pub message: &'static str,
    predicate: fn(&FormData) -> bool,
}

impl FieldRule {
    pub const fn new(
        key: ErrorKey,
        message: &'static str,
        predicate: fn(&FormData) -> bool,
    ) -> Self {
        Self {
            key,
            message,
            predicate,
        }
    }

    /// `true` when `data` satisfies this rule.
    pub fn check(&self, data: &FormData) -> bool {
        (self.predicate)(data)
    }

    /// The failure message, or `None` when the rule holds.
    pub fn violation(&self, data: &FormData) -> Option<&'static str> {
        if self.check(data) {
            None
        } else {
            Some(self.message)
        }
    }
}

lazy_static! {
    /// The registration form rules, one per error key.
    pub static ref FORM_RULES: Vec<FieldRule> = vec![
        FieldRule::new(ErrorKey::FirstName, "First name is required.", |d| {
            patterns::is_present(&d.first_name)
        }),
        FieldRule::new(ErrorKey::LastName, "Last name is required.", |d| {
            patterns::is_present(&d.last_name)
        }),
        FieldRule::new(ErrorKey::Username, "Username is required.", |d| {
            patterns::is_present(&d.username)
        }),
        FieldRule::new(ErrorKey::Email, "Invalid email.", |d| patterns::is_email(&d.email)),
        // Password has no strength requirement and is not trimmed.
        FieldRule::new(ErrorKey::Password, "Password is required.", |d| {
            !d.password.is_empty()
        }),
        FieldRule::new(ErrorKey::Phone, "Valid phone number is required.", |d| {
            !d.phone_code.is_empty() && patterns::is_phone_number(&d.phone_number)
        }),
        FieldRule::new(ErrorKey::Country, "Country is required.", |d| !d.country.is_empty()),
        FieldRule::new(ErrorKey::City, "City is required.", |d| !d.city.is_empty()),
        FieldRule::new(ErrorKey::Pan, "Invalid PAN number.", |d| patterns::is_pan(&d.pan)),
        FieldRule::new(ErrorKey::Aadhar, "Invalid Aadhar number.", |d| {
            patterns::is_aadhar(&d.aadhar)
        }),
    ];
}

/// Look up the rule registered for `key`.
pub fn rule_for(key: ErrorKey) -> Option<&'static FieldRule> {
    FORM_RULES.iter().find(|rule| rule.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    fn rule(key: ErrorKey) -> &'static FieldRule {
        rule_for(key).unwrap()
    }

    #[test]
    fn test_one_rule_per_key() {
        let mut keys: Vec<ErrorKey> = FORM_RULES.iter().map(|r| r.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), FORM_RULES.len());
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_first_name_rule() {
        let r = rule(ErrorKey::FirstName);
        assert_eq!(r.violation(&FormData::default()), Some("First name is required."));
        let data = FormData::default().with_value(Field::FirstName, "  ");
        assert!(!r.check(&data));
        let data = FormData::default().with_value(Field::FirstName, "Asha");
        assert!(r.check(&data));
    }

    #[test]
    fn test_password_rule_does_not_trim() {
        let r = rule(ErrorKey::Password);
        assert!(!r.check(&FormData::default()));
        let data = FormData::default().with_value(Field::Password, " ");
        assert!(r.check(&data));
    }

    #[test]
    fn test_phone_rule_needs_code_and_number() {
        let r = rule(ErrorKey::Phone);
        let valid = FormData::default()
            .with_value(Field::PhoneCode, "+1")
            .with_value(Field::PhoneNumber, "1234567890");
        assert!(r.check(&valid));

        let short = valid.with_value(Field::PhoneNumber, "12345");
        assert_eq!(r.violation(&short), Some("Valid phone number is required."));

        let no_code = valid.with_value(Field::PhoneCode, "");
        assert!(!r.check(&no_code));
    }

    #[test]
    fn test_email_rule() {
        let r = rule(ErrorKey::Email);
        let bad = FormData::default().with_value(Field::Email, "not-an-email");
        assert_eq!(r.violation(&bad), Some("Invalid email."));
        let good = FormData::default().with_value(Field::Email, "a@b.co");
        assert_eq!(r.violation(&good), None);
    }

    #[test]
    fn test_country_and_city_rules_only_check_presence() {
        let data = FormData::default()
            .with_value(Field::Country, "India")
            .with_value(Field::City, "Chicago");
        assert!(rule(ErrorKey::Country).check(&data));
        assert!(rule(ErrorKey::City).check(&data));
    }

    #[test]
    fn test_pan_and_aadhar_rules() {
        let data = FormData::default()
            .with_value(Field::Pan, "ABCDE1234F")
            .with_value(Field::Aadhar, "123456789012");
        assert!(rule(ErrorKey::Pan).check(&data));
        assert!(rule(ErrorKey::Aadhar).check(&data));

        let data = data
            .with_value(Field::Pan, "abcde1234f")
            .with_value(Field::Aadhar, "12345678901A");
        assert_eq!(rule(ErrorKey::Pan).violation(&data), Some("Invalid PAN number."));
        assert_eq!(
            rule(ErrorKey::Aadhar).violation(&data),
            Some("Invalid Aadhar number.")
        );
    }
}
