//! Form data record and loading from JSON/YAML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_form_schema;
use crate::types::Field;

/// Errors that can occur when loading form data.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Failed to read form data file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Form data does not match schema: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Unsupported form data format: {0}")]
    UnsupportedFormat(String),
}

/// Values of every registration form field.
///
/// Treated as a value: an edit produces a new record via
/// [`FormData::with_value`] rather than mutating a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl FormData {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PhoneCode => &self.phone_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PhoneCode => &mut self.phone_code,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
        }
    }

    /// A copy of this record with `field` replaced by `value`.
    pub fn with_value(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot(field) = value.into();
        next
    }

    /// Field/value pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |field| (*field, self.get(*field)))
    }

    /// Parse form data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse form data from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, FormError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Load form data from a file, picking the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml(&fs::read_to_string(path)?),
            _ => Err(FormError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn from_value(value: serde_json::Value) -> Result<Self, FormError> {
        validate_form_schema(&value).map_err(FormError::SchemaError)?;
        Ok(serde_json::from_value(value)?)
    }
}
