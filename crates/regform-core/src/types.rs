//! Shared types for the registration form.
//!
//! Field names serialize as the camelCase keys used on the wire and in the
//! success display (`firstName`, `phoneCode`, ...).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FormData;

/// Error returned when a string does not name a known field or error key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field: {0}")]
pub struct FieldParseError(pub String);

/// One input field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PhoneCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// The camelCase key of this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PhoneCode => "phoneCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Country => "country",
            Field::City => "city",
            Field::Pan => "pan",
            Field::Aadhar => "aadhar",
        }
    }

    /// Human label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "E-mail",
            Field::Password => "Password",
            Field::PhoneCode => "Phone Code",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::City => "City",
            Field::Pan => "PAN Number",
            Field::Aadhar => "Aadhar Number",
        }
    }

    /// The validation key whose error is shown beside this field.
    pub fn error_key(&self) -> ErrorKey {
        match self {
            Field::FirstName => ErrorKey::FirstName,
            Field::LastName => ErrorKey::LastName,
            Field::Username => ErrorKey::Username,
            Field::Email => ErrorKey::Email,
            Field::Password => ErrorKey::Password,
            Field::PhoneCode | Field::PhoneNumber => ErrorKey::Phone,
            Field::Country => ErrorKey::Country,
            Field::City => ErrorKey::City,
            Field::Pan => ErrorKey::Pan,
            Field::Aadhar => ErrorKey::Aadhar,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// Key under which a validation failure is recorded.
///
/// Mostly one per field, except `Phone`, which covers both the phone code
/// and the phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKey {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    City,
    Pan,
    Aadhar,
}

impl ErrorKey {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKey::FirstName => "firstName",
            ErrorKey::LastName => "lastName",
            ErrorKey::Username => "username",
            ErrorKey::Email => "email",
            ErrorKey::Password => "password",
            ErrorKey::Phone => "phone",
            ErrorKey::Country => "country",
            ErrorKey::City => "city",
            ErrorKey::Pan => "pan",
            ErrorKey::Aadhar => "aadhar",
        }
    }

    /// Fields whose touched flag reveals this key's error.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            ErrorKey::FirstName => &[Field::FirstName],
            ErrorKey::LastName => &[Field::LastName],
            ErrorKey::Username => &[Field::Username],
            ErrorKey::Email => &[Field::Email],
            ErrorKey::Password => &[Field::Password],
            ErrorKey::Phone => &[Field::PhoneCode, Field::PhoneNumber],
            ErrorKey::Country => &[Field::Country],
            ErrorKey::City => &[Field::City],
            ErrorKey::Pan => &[Field::Pan],
            ErrorKey::Aadhar => &[Field::Aadhar],
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current validation failures, keyed by [`ErrorKey`].
///
/// Holds entries only for failing keys. Always rebuilt in full by the
/// validator; never patched one key at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<ErrorKey, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = ErrorKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> + '_ {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }
}

/// Fields the user has blurred at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchedSet(BTreeSet<Field>);

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with every field touched.
    pub fn all() -> Self {
        Self(Field::ALL.iter().copied().collect())
    }

    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    /// Whether any field covered by `key` has been touched.
    pub fn reveals(&self, key: ErrorKey) -> bool {
        key.fields().iter().any(|field| self.is_touched(*field))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Form data accepted by a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub data: FormData,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            submitted_at: Utc::now(),
        }
    }
}
