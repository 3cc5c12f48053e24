pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, email_cta_form, stat_card};
pub use layouts::desktop::desktop_layout;
