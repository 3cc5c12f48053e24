pub mod login;
pub mod sessions;
pub mod token;

pub use sessions::{current_user, SessionUser};
