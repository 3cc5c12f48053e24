// src/domain/booking.rs
use crate::domain::dates::is_valid_date_range;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }

    /// Holds beds: the guest is expected or already in the house.
    pub fn occupies_beds(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("unknown booking status '{s}'"))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking joined with the names the UI shows next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub property_id: i64,
    pub guest_id: i64,
    pub guest_name: String,
    pub room_id: i64,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub beds: i64,
    pub status: BookingStatus,
}

/// Validated booking input. Room capacity is checked by the db layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub beds: i64,
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub guest_id: String,
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub beds: String,
}

impl BookingForm {
    pub fn parse(&self) -> Result<NewBooking, String> {
        let guest_id = self
            .guest_id
            .trim()
            .parse()
            .map_err(|_| "Choose a guest".to_string())?;
        let room_id = self
            .room_id
            .trim()
            .parse()
            .map_err(|_| "Choose a room".to_string())?;
        let (check_in, check_out) = parse_stay(&self.check_in, &self.check_out)?;
        let beds = match self.beds.trim() {
            "" => 1,
            raw => raw
                .parse()
                .map_err(|_| "Beds must be a whole number".to_string())?,
        };
        if beds < 1 {
            return Err("A booking needs at least one bed".into());
        }
        Ok(NewBooking {
            guest_id,
            room_id,
            check_in,
            check_out,
            beds,
        })
    }
}

/// A `YYYY-MM-DD` check-in/check-out pair, check-out strictly later.
pub fn parse_stay(check_in: &str, check_out: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let check_in = parse_day(check_in, "check-in")?;
    let check_out = parse_day(check_out, "check-out")?;
    if !is_valid_date_range(check_in, check_out) {
        return Err("Check-out must be after check-in".into());
    }
    Ok((check_in, check_out))
}

fn parse_day(raw: &str, what: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid {what} date"))
}
