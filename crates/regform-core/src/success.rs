//! Success display for a submitted form.

use serde::Serialize;

use crate::controller::FormState;
use crate::types::Submission;

pub const SUCCESS_HEADING: &str = "Form Submitted Successfully!";
pub const NO_SUBMISSION_MESSAGE: &str = "No form data submitted.";

/// Read-only view of a submission.
///
/// The payload is optional: reaching this view without submitting shows a
/// fallback message instead of the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuccessView {
    submission: Option<Submission>,
}

impl SuccessView {
    pub fn new(submission: Option<Submission>) -> Self {
        Self { submission }
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// `key: value` lines in form order, or `None` without a payload.
    pub fn entries(&self) -> Option<Vec<(&'static str, &str)>> {
        self.submission.as_ref().map(|submission| {
            submission
                .data
                .entries()
                .map(|(field, value)| (field.name(), value))
                .collect()
        })
    }

    /// Plain text rendering, one line per entry.
    pub fn render(&self) -> Vec<String> {
        match self.entries() {
            None => vec![NO_SUBMISSION_MESSAGE.to_string()],
            Some(entries) => std::iter::once(SUCCESS_HEADING.to_string())
                .chain(entries.into_iter().map(|(key, value)| format!("{}: {}", key, value)))
                .collect(),
        }
    }

    /// Leave the view. The returned form is empty; nothing is prefilled.
    pub fn go_back(self) -> FormState {
        FormState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;
    use crate::types::Field;

    #[test]
    fn test_fallback_without_payload() {
        let view = SuccessView::new(None);
        assert_eq!(view.render(), vec!["No form data submitted.".to_string()]);
        assert!(view.entries().is_none());
    }

    #[test]
    fn test_renders_every_field_in_order() {
        let data = FormData::default()
            .with_value(Field::FirstName, "Asha")
            .with_value(Field::City, "New York");
        let view = SuccessView::new(Some(Submission::new(data)));
        let lines = view.render();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], SUCCESS_HEADING);
        assert_eq!(lines[1], "firstName: Asha");
        assert_eq!(lines[9], "city: New York");
        assert_eq!(lines[11], "aadhar: ");
    }

    #[test]
    fn test_go_back_returns_empty_form() {
        let data = FormData::default().with_value(Field::Username, "asha");
        let view = SuccessView::new(Some(Submission::new(data)));
        let form = view.go_back();
        assert_eq!(form, FormState::new());
    }
}
