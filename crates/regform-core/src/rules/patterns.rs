//! Shared field patterns.
//!
//! Every pattern is anchored at both ends: a value passes only if the whole
//! string matches, never a substring of it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Simplified email shape: `local@domain.tld`, no whitespace, single `@`.
    /// Not RFC 5322.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    /// Ten-digit phone number without code or separators.
    pub static ref PHONE_NUMBER_PATTERN: Regex = Regex::new(
        r"^[0-9]{10}$"
    ).unwrap();

    /// PAN: five uppercase letters, four digits, one uppercase letter.
    pub static ref PAN_PATTERN: Regex = Regex::new(
        r"^[A-Z]{5}[0-9]{4}[A-Z]$"
    ).unwrap();

    /// Aadhar: exactly twelve digits.
    pub static ref AADHAR_PATTERN: Regex = Regex::new(
        r"^[0-9]{12}$"
    ).unwrap();
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_phone_number(value: &str) -> bool {
    PHONE_NUMBER_PATTERN.is_match(value)
}

pub fn is_pan(value: &str) -> bool {
    PAN_PATTERN.is_match(value)
}

pub fn is_aadhar(value: &str) -> bool {
    AADHAR_PATTERN.is_match(value)
}

/// Non-empty once surrounding whitespace is removed.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b.co"));
        assert!(is_email("user.name+tag@domain.co.uk"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("a@@b.c"));
        assert!(!is_email(" a@b.co"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_phone_number("1234567890"));
        assert!(!is_phone_number("12345"));
        assert!(!is_phone_number("12345678901"));
        assert!(!is_phone_number("123-456-7890"));
        assert!(!is_phone_number("123456789O"));
    }

    #[test]
    fn test_pan() {
        assert!(is_pan("ABCDE1234F"));
        assert!(!is_pan("abcde1234f"));
        assert!(!is_pan("ABCDE123F"));
        assert!(!is_pan("ABCDE1234FG"));
        assert!(!is_pan("ABCD12345F"));
    }

    #[test]
    fn test_aadhar() {
        assert!(is_aadhar("123456789012"));
        assert!(!is_aadhar("12345"));
        assert!(!is_aadhar("12345678901A"));
        assert!(!is_aadhar("1234567890123"));
    }

    #[test]
    fn test_digit_classes_are_ascii_only() {
        // Devanagari digits
        assert!(!is_phone_number("१२३४५६७८९०"));
    }

    #[test]
    fn test_presence_trims() {
        assert!(is_present(" Asha "));
        assert!(!is_present("   "));
        assert!(!is_present("\t\n"));
    }

    #[test]
    fn test_whitespace_is_unicode_white_space() {
        // NEL and NBSP are whitespace; the byte order mark is not
        assert!(!is_present("\u{85}"));
        assert!(!is_present("\u{A0}\u{3000}"));
        assert!(is_present("\u{FEFF}"));

        assert!(!is_email("a\u{85}b@c.de"));
        assert!(is_email("a\u{FEFF}b@c.de"));
    }
}
