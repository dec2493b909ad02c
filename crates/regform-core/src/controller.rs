//! Form state controller.
//!
//! [`FormState`] is the whole state of one form instance. Events are
//! applied by [`FormState::reduce`], a pure transition that returns the
//! next state together with an [`Outcome`]. [`FormController`] owns a
//! state and a validator and feeds events through the reducer one at a
//! time.
//!
//! ## Transitions
//!
//! | Event | Effect |
//! |-------|--------|
//! | **Edit** | Replace the value; re-validate only if the field is touched |
//! | **Blur** | Mark the field touched; re-validate everything |
//! | **Submit** | Re-validate; touch every field; succeed if no errors |
//! | **TogglePassword** | Flip password visibility |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::FormData;
use crate::locations;
use crate::types::{ErrorKey, ErrorMap, Field, Submission, TouchedSet};
use crate::validator::Validator;

/// An input event on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Blur(Field),
    Submit,
    TogglePassword,
}

impl FormEvent {
    pub fn edit(field: Field, value: impl Into<String>) -> Self {
        FormEvent::Edit {
            field,
            value: value.into(),
        }
    }
}

/// What an event led to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The form state changed (or stayed the same); keep showing the form.
    Updated,
    /// Submit was blocked by validation errors.
    Rejected { errors: ErrorMap },
    /// Submit succeeded; the payload is a copy of the form data.
    Submitted(Submission),
}

/// Values, touched flags, errors and password visibility of one form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub data: FormData,
    pub touched: TouchedSet,
    pub errors: ErrorMap,
    pub show_password: bool,
}

impl FormState {
    /// An empty, untouched form.
    pub fn new() -> Self {
        Self::default()
    }

    /// An untouched form prefilled with `data`.
    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Apply `event`, returning the next state and the outcome.
    pub fn reduce(&self, event: FormEvent, validator: &Validator) -> (FormState, Outcome) {
        match event {
            FormEvent::Edit { field, value } => {
                let data = self.data.with_value(field, value);
                let errors = if self.touched.is_touched(field) {
                    validator.validate(&data)
                } else {
                    self.errors.clone()
                };
                debug!(field = %field, live = self.touched.is_touched(field), "Edit");
                let next = FormState {
                    data,
                    errors,
                    ..self.clone()
                };
                (next, Outcome::Updated)
            }
            FormEvent::Blur(field) => {
                let mut touched = self.touched.clone();
                touched.touch(field);
                let errors = validator.validate(&self.data);
                debug!(field = %field, errors = errors.len(), "Blur");
                let next = FormState {
                    touched,
                    errors,
                    ..self.clone()
                };
                (next, Outcome::Updated)
            }
            FormEvent::Submit => {
                let errors = validator.validate(&self.data);
                let next = FormState {
                    touched: TouchedSet::all(),
                    errors: errors.clone(),
                    ..self.clone()
                };
                if errors.is_empty() {
                    debug!("Submit accepted");
                    let submission = Submission::new(self.data.clone());
                    (next, Outcome::Submitted(submission))
                } else {
                    debug!(errors = errors.len(), "Submit rejected");
                    (next, Outcome::Rejected { errors })
                }
            }
            FormEvent::TogglePassword => {
                let next = FormState {
                    show_password: !self.show_password,
                    ..self.clone()
                };
                (next, Outcome::Updated)
            }
        }
    }

    /// The error to show beside `field`: failing, and revealed by a touched
    /// field under the same key.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let key = field.error_key();
        if self.touched.reveals(key) {
            self.errors.get(key)
        } else {
            None
        }
    }

    /// Every error currently shown, keyed by error key.
    pub fn visible_errors(&self) -> impl Iterator<Item = (ErrorKey, &str)> + '_ {
        self.errors
            .iter()
            .filter(|(key, _)| self.touched.reveals(*key))
    }

    /// City options for the currently selected country.
    pub fn city_options(&self) -> &'static [&'static str] {
        locations::cities_for(&self.data.country)
    }

    /// `false` when a city is selected that the current country does not
    /// offer (country changed after the city was picked).
    pub fn city_is_consistent(&self) -> bool {
        self.data.city.is_empty() || locations::is_city_in(&self.data.country, &self.data.city)
    }
}

/// Owns one form's state and applies events to it in order.
pub struct FormController {
    state: FormState,
    validator: Validator,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_state(FormState::new())
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            validator: Validator::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply one event and replace the held state with the result.
    pub fn dispatch(&mut self, event: FormEvent) -> Outcome {
        let (next, outcome) = self.state.reduce(event, &self.validator);
        self.state = next;
        outcome
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Outcome {
        self.dispatch(FormEvent::edit(field, value))
    }

    pub fn blur(&mut self, field: Field) -> Outcome {
        self.dispatch(FormEvent::Blur(field))
    }

    pub fn submit(&mut self) -> Outcome {
        self.dispatch(FormEvent::Submit)
    }

    pub fn toggle_password(&mut self) -> Outcome {
        self.dispatch(FormEvent::TogglePassword)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
