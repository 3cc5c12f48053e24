// src/domain/dates.rs
//! Display formatting for dates ("2nd January 2020") and the calendar
//! helpers bookings are checked against.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Returned for anything that is not a resolvable calendar date.
pub const NOT_AVAILABLE: &str = "N/A";

/// Anything that may resolve to a local calendar date.
///
/// Instants are converted to the local timezone before the day is read, so
/// `format_date` shows the day the user sees on their wall clock.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> Option<NaiveDate>;
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        Some(self.with_timezone(&Local).date_naive())
    }
}

/// Milliseconds since the Unix epoch.
impl ToCalendarDate for i64 {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(*self).and_then(|dt| dt.to_calendar_date())
    }
}

/// Milliseconds since the Unix epoch; NaN and infinities resolve to nothing.
impl ToCalendarDate for f64 {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        if !self.is_finite() || self.fract() != 0.0 {
            return None;
        }
        if *self < i64::MIN as f64 || *self > i64::MAX as f64 {
            return None;
        }
        (*self as i64).to_calendar_date()
    }
}

impl ToCalendarDate for str {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        let s = self.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return dt.to_calendar_date();
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(d);
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }
}

impl ToCalendarDate for String {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        self.as_str().to_calendar_date()
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        (**self).to_calendar_date()
    }
}

impl<T: ToCalendarDate> ToCalendarDate for Option<T> {
    fn to_calendar_date(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(|v| v.to_calendar_date())
    }
}

/// 1, 21, 31 -> "st"; 2, 22 -> "nd"; 3, 23 -> "rd"; 11, 12, 13 and the rest -> "th".
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// "{day}{suffix} {Month} {year}", or "N/A". Never panics.
pub fn format_date<T: ToCalendarDate + ?Sized>(value: &T) -> String {
    match value.to_calendar_date() {
        Some(date) => format!(
            "{}{} {} {}",
            date.day(),
            ordinal_suffix(date.day()),
            date.format("%B"),
            date.year()
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Check-out strictly after check-in.
pub fn is_valid_date_range(check_in: NaiveDate, check_out: NaiveDate) -> bool {
    check_out > check_in
}

/// Half-open ranges `[start, end)` overlap.
pub fn date_ranges_overlap(
    start1: NaiveDate,
    end1: NaiveDate,
    start2: NaiveDate,
    end2: NaiveDate,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Inclusive start, exclusive end.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date < end
}
