//! JSON Schema validation for form data files.
//!
//! Form data is checked against `schema/form.schema.json` before it is
//! deserialized, so unknown keys and non-string values are reported with
//! their location instead of as a bare serde error.

use lazy_static::lazy_static;

const FORM_SCHEMA_JSON: &str = include_str!("../../schema/form.schema.json");

lazy_static! {
    // Compiled once; a broken embedded schema surfaces as a message on
    // every validation call.
    static ref FORM_SCHEMA: Result<jsonschema::Validator, String> = compile_form_schema();
}

fn compile_form_schema() -> Result<jsonschema::Validator, String> {
    let schema: serde_json::Value = serde_json::from_str(FORM_SCHEMA_JSON)
        .map_err(|e| format!("Invalid form schema JSON: {}", e))?;
    jsonschema::validator_for(&schema).map_err(|e| format!("Invalid form schema: {}", e))
}

/// Validate a form data JSON value against the schema.
///
/// Returns every violation as `"<message> at <instance path>"`.
pub fn validate_form_schema(value: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = FORM_SCHEMA.as_ref().map_err(|e| vec![e.clone()])?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
