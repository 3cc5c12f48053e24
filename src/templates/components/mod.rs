pub mod card;
pub mod email_cta;
pub mod form;
pub mod nav;

pub use card::{card, stat_card};
pub use email_cta::email_cta_form;
pub use form::{field_errors, form_alert, text_input};
pub use nav::property_nav;
