// src/db/rooms.rs
use crate::domain::property::{NewRoom, Room};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fmt;

fn room_from_row(row: &Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        property_id: row.get(1)?,
        name: row.get(2)?,
        beds: row.get(3)?,
    })
}

/// Why a room change was refused. Shown back on the room form.
#[derive(Debug, PartialEq)]
pub enum RoomRejected {
    UnknownRoom,
    /// Live bookings need this many beds at once somewhere in their stays.
    BedsInUse { needed: i64 },
    HasLiveBookings,
}

impl fmt::Display for RoomRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomRejected::UnknownRoom => write!(f, "Room not found at this property"),
            RoomRejected::BedsInUse { needed } => {
                write!(f, "Current bookings need {needed} bed(s) in this room")
            }
            RoomRejected::HasLiveBookings => {
                write!(f, "Cannot delete a room with confirmed or checked-in bookings")
            }
        }
    }
}

pub fn create_room(conn: &Connection, property_id: i64, room: &NewRoom) -> Result<i64, ServerError> {
    conn.execute(
        "insert into rooms (property_id, name, beds) values (?, ?, ?)",
        params![property_id, room.name, room.beds],
    )
    .map_err(|e| ServerError::DbError(format!("insert room failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_rooms(conn: &Connection, property_id: i64) -> Result<Vec<Room>, ServerError> {
    let mut stmt = conn.prepare(
        "select id, property_id, name, beds from rooms where property_id = ? order by name collate nocase",
    )?;
    let rows = stmt.query_map(params![property_id], room_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

pub fn find_room(
    conn: &Connection,
    property_id: i64,
    room_id: i64,
) -> Result<Option<Room>, ServerError> {
    conn.query_row(
        "select id, property_id, name, beds from rooms where id = ? and property_id = ?",
        params![room_id, property_id],
        room_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("room lookup failed: {e}")))
}

/// Most beds live bookings hold in `room_id` on any single night. Occupancy
/// only rises on a check-in night, so those are the nights to check.
fn peak_beds(conn: &Connection, room_id: i64) -> Result<i64, ServerError> {
    conn.query_row(
        r#"
        select coalesce(max(taken), 0) from (
            select (
                select sum(o.beds) from bookings o
                where o.room_id = b.room_id
                  and o.status in ('confirmed', 'checked_in')
                  and o.check_in <= b.check_in
                  and b.check_in < o.check_out
            ) as taken
            from bookings b
            where b.room_id = ?1
              and b.status in ('confirmed', 'checked_in')
        )
        "#,
        params![room_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("peak bed count failed: {e}")))
}

/// Renames or resizes a room. A room never shrinks below what its live
/// bookings already hold.
pub fn update_room(
    conn: &mut Connection,
    property_id: i64,
    room_id: i64,
    room: &NewRoom,
) -> Result<Result<(), RoomRejected>, ServerError> {
    let tx = conn.transaction()?;

    if find_room(&tx, property_id, room_id)?.is_none() {
        return Ok(Err(RoomRejected::UnknownRoom));
    }
    let needed = peak_beds(&tx, room_id)?;
    if room.beds < needed {
        return Ok(Err(RoomRejected::BedsInUse { needed }));
    }

    tx.execute(
        "update rooms set name = ?, beds = ? where id = ? and property_id = ?",
        params![room.name, room.beds, room_id, property_id],
    )
    .map_err(|e| ServerError::DbError(format!("update room failed: {e}")))?;
    tx.commit()?;

    Ok(Ok(()))
}

/// Deletes a room and its past bookings. Refused while any booking in the
/// room is confirmed or checked in.
pub fn delete_room(
    conn: &mut Connection,
    property_id: i64,
    room_id: i64,
) -> Result<Result<(), RoomRejected>, ServerError> {
    let tx = conn.transaction()?;

    if find_room(&tx, property_id, room_id)?.is_none() {
        return Ok(Err(RoomRejected::UnknownRoom));
    }
    let live: i64 = tx
        .query_row(
            "select count(*) from bookings where room_id = ? and status in ('confirmed', 'checked_in')",
            params![room_id],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("live booking count failed: {e}")))?;
    if live > 0 {
        return Ok(Err(RoomRejected::HasLiveBookings));
    }

    tx.execute(
        "delete from rooms where id = ? and property_id = ?",
        params![room_id, property_id],
    )
    .map_err(|e| ServerError::DbError(format!("delete room failed: {e}")))?;
    tx.commit()?;

    Ok(Ok(()))
}
