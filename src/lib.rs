//! HostelPulse: guest, room and booking records for small hostels, served as
//! server-rendered pages, plus the client-side utility state machines the
//! pages rely on.

pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod hooks;
pub mod responses;
pub mod router;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
