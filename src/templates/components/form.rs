use crate::domain::guest::{messages_for, FieldError};
use maud::{html, Markup};

/// Inline messages under an input; renders nothing when the field is clean.
pub fn field_errors(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for message in messages_for(errors, field) {
            p class="field-error" role="alert" { (message) }
        }
    }
}

/// Single form-level message, e.g. from a rejected booking.
pub fn form_alert(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            div class="alert alert-error" role="alert" { (message) }
        }
    }
}

pub fn text_input(
    label: &str,
    name: &str,
    value: Option<&str>,
    required: bool,
    errors: &[FieldError],
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) @if required { " *" } }
            input type="text" id=(name) name=(name) value=[value] required[required];
            (field_errors(errors, name))
        }
    }
}
