pub mod auth;
pub mod bookings;
pub mod connection;
pub mod guests;
pub mod properties;
pub mod rooms;
pub mod users;
