//! Plain text rendering of the two routes.

use regform_core::{countries, ErrorMap, Field, FormState, Route, SuccessView};

pub const FORM_TITLE: &str = "Registration Form";

/// Render the form: one line per field, visible errors indented below.
///
/// The combined phone error is printed once, after the phone number.
pub fn render_form(state: &FormState) -> Vec<String> {
    let mut lines = vec![FORM_TITLE.to_string()];

    for field in Field::ALL {
        let value = state.data.get(field);
        let shown = match field {
            Field::Password if !state.show_password => "*".repeat(value.chars().count()),
            _ => value.to_string(),
        };

        let mut line = format!("{}: {}", field.label(), shown);
        match field {
            Field::Password => {
                line.push_str(if state.show_password { "  [shown]" } else { "  [hidden]" });
            }
            Field::Country => {
                line.push_str(&format!("  (options: {})", countries().collect::<Vec<_>>().join(", ")));
            }
            Field::City => {
                line.push_str(&format!("  (options: {})", state.city_options().join(", ")));
            }
            _ => {}
        }
        lines.push(line);

        if field == Field::City && !state.city_is_consistent() {
            lines.push(format!(
                "  ~ {} is not offered for {}",
                value,
                if state.data.country.is_empty() { "no country" } else { state.data.country.as_str() }
            ));
        }

        let key = field.error_key();
        if key.fields().last() == Some(&field) && state.touched.reveals(key) {
            if let Some(message) = state.errors.get(key) {
                lines.push(format!("  ! {}", message));
            }
        }
    }

    lines
}

pub fn render_success(view: &SuccessView) -> Vec<String> {
    view.render()
}

pub fn render_route(route: &Route) -> Vec<String> {
    match route {
        Route::Form(controller) => render_form(controller.state()),
        Route::Success(view) => render_success(view),
    }
}

/// `key: message` per error, in key order.
pub fn render_errors(errors: &ErrorMap) -> Vec<String> {
    errors
        .iter()
        .map(|(key, message)| format!("{}: {}", key, message))
        .collect()
}
