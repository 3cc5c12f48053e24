// src/db/properties.rs
use crate::domain::property::{NewProperty, Property};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn property_from_row(row: &Row) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        city: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn create_property(
    conn: &Connection,
    owner_id: i64,
    new: &NewProperty,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into properties (owner_id, name, city, created_at) values (?, ?, ?, ?)",
        params![owner_id, new.name, new.city, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert property failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_properties(conn: &Connection, owner_id: i64) -> Result<Vec<Property>, ServerError> {
    let mut stmt = conn.prepare(
        "select id, owner_id, name, city, created_at from properties where owner_id = ? order by name",
    )?;
    let rows = stmt.query_map(params![owner_id], property_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}

/// The property, but only if `owner_id` owns it.
pub fn find_owned_property(
    conn: &Connection,
    owner_id: i64,
    property_id: i64,
) -> Result<Option<Property>, ServerError> {
    conn.query_row(
        "select id, owner_id, name, city, created_at from properties where id = ? and owner_id = ?",
        params![property_id, owner_id],
        property_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("property lookup failed: {e}")))
}
