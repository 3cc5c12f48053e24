// src/db/bookings.rs
use crate::db::{guests, rooms};
use crate::domain::booking::{Booking, BookingStatus, NewBooking};
use crate::domain::property::RoomAvailability;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};

impl ToSql for BookingStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for BookingStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// Why a booking could not be stored. Shown back on the form.
#[derive(Debug, PartialEq)]
pub enum BookingRejected {
    UnknownGuest,
    UnknownRoom,
    UnknownBooking,
    NotEnoughBeds { free: i64 },
}

impl std::fmt::Display for BookingRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingRejected::UnknownGuest => write!(f, "Guest not found at this property"),
            BookingRejected::UnknownRoom => write!(f, "Room not found at this property"),
            BookingRejected::UnknownBooking => write!(f, "Booking not found at this property"),
            BookingRejected::NotEnoughBeds { free } => {
                write!(f, "Only {free} bed(s) free in that room for those dates")
            }
        }
    }
}

const BOOKING_SELECT: &str = r#"
    select b.id, b.property_id, b.guest_id, g.first_name || ' ' || g.last_name,
           b.room_id, r.name, b.check_in, b.check_out, b.beds, b.status
    from bookings b
    join guests g on g.id = b.guest_id
    join rooms r on r.id = b.room_id
"#;

fn booking_from_row(row: &Row) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        property_id: row.get(1)?,
        guest_id: row.get(2)?,
        guest_name: row.get(3)?,
        room_id: row.get(4)?,
        room_name: row.get(5)?,
        check_in: row.get(6)?,
        check_out: row.get(7)?,
        beds: row.get(8)?,
        status: row.get(9)?,
    })
}

/// Beds in `room_id` held by live bookings overlapping `[check_in, check_out)`,
/// leaving out booking `exclude`.
fn beds_taken(
    conn: &Connection,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    exclude: Option<i64>,
) -> Result<i64, ServerError> {
    conn.query_row(
        r#"
        select coalesce(sum(beds), 0)
        from bookings
        where room_id = ?1
          and status in ('confirmed', 'checked_in')
          and check_in < ?3
          and ?2 < check_out
          and (?4 is null or id != ?4)
        "#,
        params![room_id, check_in, check_out, exclude],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("bed count failed: {e}")))
}

/// Stores a confirmed booking if the guest and room belong to the property
/// and the room still has enough beds over the stay.
pub fn create_booking(
    conn: &mut Connection,
    property_id: i64,
    booking: &NewBooking,
    now: i64,
) -> Result<Result<i64, BookingRejected>, ServerError> {
    let tx = conn.transaction()?;

    if guests::find_guest(&tx, property_id, booking.guest_id)?.is_none() {
        return Ok(Err(BookingRejected::UnknownGuest));
    }
    let Some(room) = rooms::find_room(&tx, property_id, booking.room_id)? else {
        return Ok(Err(BookingRejected::UnknownRoom));
    };

    let free = room.beds - beds_taken(&tx, room.id, booking.check_in, booking.check_out, None)?;
    if booking.beds > free {
        return Ok(Err(BookingRejected::NotEnoughBeds { free: free.max(0) }));
    }

    tx.execute(
        r#"
        insert into bookings (property_id, guest_id, room_id, check_in, check_out, beds, status, created_at)
        values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            property_id,
            booking.guest_id,
            booking.room_id,
            booking.check_in,
            booking.check_out,
            booking.beds,
            BookingStatus::Confirmed,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert booking failed: {e}")))?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Ok(id))
}

/// Bookings newest stay first, optionally narrowed to those whose guest name
/// or room name contains `query` (case and accent-case insensitive).
pub fn list_bookings(
    conn: &Connection,
    property_id: i64,
    query: Option<&str>,
) -> Result<Vec<Booking>, ServerError> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let mut stmt = conn.prepare(&format!(
        r#"{BOOKING_SELECT}
        where b.property_id = ?1
          and (?2 is null
               or instr(casefold(g.first_name || ' ' || g.last_name), ?2) > 0
               or instr(casefold(r.name), ?2) > 0)
        order by b.check_in desc, b.id desc"#
    ))?;
    let rows = stmt.query_map(params![property_id, needle], booking_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

/// Free beds per room of the property over `[check_in, check_out)`.
pub fn room_availability(
    conn: &Connection,
    property_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<RoomAvailability>, ServerError> {
    rooms::list_rooms(conn, property_id)?
        .into_iter()
        .map(|room| {
            let taken = beds_taken(conn, room.id, check_in, check_out, None)?;
            Ok(RoomAvailability {
                free_beds: (room.beds - taken).max(0),
                room,
            })
        })
        .collect()
}

pub fn guest_bookings(
    conn: &Connection,
    property_id: i64,
    guest_id: i64,
) -> Result<Vec<Booking>, ServerError> {
    let mut stmt = conn.prepare(&format!(
        "{BOOKING_SELECT} where b.property_id = ? and b.guest_id = ? order by b.check_in desc"
    ))?;
    let rows = stmt.query_map(params![property_id, guest_id], booking_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

/// Live bookings arriving on `day`, earliest first.
pub fn arrivals_on(
    conn: &Connection,
    property_id: i64,
    day: NaiveDate,
) -> Result<Vec<Booking>, ServerError> {
    let mut stmt = conn.prepare(&format!(
        "{BOOKING_SELECT} where b.property_id = ? and b.check_in = ? \
         and b.status not in ('cancelled', 'checked_out', 'no_show') order by b.id"
    ))?;
    let rows = stmt.query_map(params![property_id, day], booking_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

/// Bookings still in the house that leave on `day`.
pub fn departures_on(
    conn: &Connection,
    property_id: i64,
    day: NaiveDate,
) -> Result<Vec<Booking>, ServerError> {
    let mut stmt = conn.prepare(&format!(
        "{BOOKING_SELECT} where b.property_id = ? and b.check_out = ? \
         and b.status in ('confirmed', 'checked_in') order by b.id"
    ))?;
    let rows = stmt.query_map(params![property_id, day], booking_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

/// Moves a booking to `status`. Bringing a booking back into a bed-holding
/// status re-checks the room's capacity over its stay.
pub fn set_status(
    conn: &mut Connection,
    property_id: i64,
    booking_id: i64,
    status: BookingStatus,
) -> Result<Result<(), BookingRejected>, ServerError> {
    let tx = conn.transaction()?;

    let current = tx
        .query_row(
            r#"
            select b.room_id, r.beds, b.check_in, b.check_out, b.beds, b.status
            from bookings b
            join rooms r on r.id = b.room_id
            where b.id = ?1 and b.property_id = ?2
            "#,
            params![booking_id, property_id],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, i64>(1)?,
                    r.get::<_, NaiveDate>(2)?,
                    r.get::<_, NaiveDate>(3)?,
                    r.get::<_, i64>(4)?,
                    r.get::<_, BookingStatus>(5)?,
                ))
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("booking lookup failed: {e}")))?;
    let Some((room_id, room_beds, check_in, check_out, beds, previous)) = current else {
        return Ok(Err(BookingRejected::UnknownBooking));
    };

    if status.occupies_beds() && !previous.occupies_beds() {
        let free = room_beds - beds_taken(&tx, room_id, check_in, check_out, Some(booking_id))?;
        if beds > free {
            return Ok(Err(BookingRejected::NotEnoughBeds { free: free.max(0) }));
        }
    }

    tx.execute(
        "update bookings set status = ? where id = ? and property_id = ?",
        params![status, booking_id, property_id],
    )
    .map_err(|e| ServerError::DbError(format!("update booking status failed: {e}")))?;
    tx.commit()?;

    Ok(Ok(()))
}
