pub mod booking;
pub mod dates;
pub mod guest;
pub mod property;
pub mod stats;

pub use dates::format_date;
