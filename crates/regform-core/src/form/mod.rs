//! Form data and its file formats.
//!
//! Form data files are JSON or YAML objects keyed by camelCase field name,
//! checked against an embedded JSON Schema before deserializing.

mod data;
mod schema;

pub use data::{FormData, FormError};
pub use schema::validate_form_schema;
