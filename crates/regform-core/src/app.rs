//! Navigation between the form and the success view.
//!
//! A successful submit moves to [`Route::Success`] carrying the submission
//! as payload. Going back always lands on a fresh form.

use tracing::{info, warn};

use crate::controller::{FormController, FormEvent, Outcome};
use crate::success::SuccessView;

/// The view currently shown.
pub enum Route {
    Form(FormController),
    Success(SuccessView),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Form(_) => "form",
            Route::Success(_) => "success",
        }
    }
}

/// Single-form application: one active route at a time.
pub struct App {
    route: Route,
}

impl App {
    pub fn new() -> Self {
        Self::with_controller(FormController::new())
    }

    pub fn with_controller(controller: FormController) -> Self {
        Self {
            route: Route::Form(controller),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Send an event to the form. Ignored (returns `None`) on the success
    /// route.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<Outcome> {
        let Route::Form(controller) = &mut self.route else {
            warn!(event = event_kind(&event), "Form event ignored outside the form route");
            return None;
        };

        let outcome = controller.dispatch(event);
        if let Outcome::Submitted(submission) = &outcome {
            info!("Navigating to success view");
            self.route = Route::Success(SuccessView::new(Some(submission.clone())));
        }
        Some(outcome)
    }

    /// Open the success view directly, without a submission.
    pub fn open_success(&mut self) {
        self.route = Route::Success(SuccessView::new(None));
    }

    /// Return to an empty form. A no-op when already on the form.
    pub fn go_back(&mut self) {
        let route = std::mem::replace(&mut self.route, Route::Form(FormController::new()));
        self.route = match route {
            Route::Success(view) => {
                info!("Navigating back to form");
                Route::Form(FormController::with_state(view.go_back()))
            }
            form @ Route::Form(_) => form,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// Event values may carry a password, so only the kind is logged.
fn event_kind(event: &FormEvent) -> &'static str {
    match event {
        FormEvent::Edit { .. } => "edit",
        FormEvent::Blur(_) => "blur",
        FormEvent::Submit => "submit",
        FormEvent::TogglePassword => "toggle_password",
    }
}
