// src/db/guests.rs
use crate::domain::guest::{DocumentType, Guest, NewGuest};
use crate::errors::ServerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};

impl ToSql for DocumentType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for DocumentType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

const GUEST_COLUMNS: &str = "id, property_id, first_name, last_name, email, phone, nationality, \
     document_type, document_id, notes, created_at";

fn guest_from_row(row: &Row) -> rusqlite::Result<Guest> {
    Ok(Guest {
        id: row.get(0)?,
        property_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        nationality: row.get(6)?,
        document_type: row.get(7)?,
        document_id: row.get(8)?,
        notes: row.get(9)?,
        created_at: row.get(10)?,
    })
}

pub fn create_guest(
    conn: &Connection,
    property_id: i64,
    guest: &NewGuest,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into guests (
            property_id, first_name, last_name, email, phone, nationality,
            document_type, document_id, notes, created_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
        params![
            property_id,
            guest.first_name,
            guest.last_name,
            guest.email,
            guest.phone,
            guest.nationality,
            guest.document_type,
            guest.document_id,
            guest.notes,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert guest failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Returns false when the guest does not belong to the property.
pub fn update_guest(
    conn: &Connection,
    property_id: i64,
    guest_id: i64,
    guest: &NewGuest,
) -> Result<bool, ServerError> {
    let changed = conn
        .execute(
            r#"
            update guests set
                first_name = ?1, last_name = ?2, email = ?3, phone = ?4, nationality = ?5,
                document_type = ?6, document_id = ?7, notes = ?8
            where id = ?9 and property_id = ?10
            "#,
            params![
                guest.first_name,
                guest.last_name,
                guest.email,
                guest.phone,
                guest.nationality,
                guest.document_type,
                guest.document_id,
                guest.notes,
                guest_id,
                property_id,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update guest failed: {e}")))?;
    Ok(changed == 1)
}

pub fn find_guest(
    conn: &Connection,
    property_id: i64,
    guest_id: i64,
) -> Result<Option<Guest>, ServerError> {
    conn.query_row(
        &format!("select {GUEST_COLUMNS} from guests where id = ? and property_id = ?"),
        params![guest_id, property_id],
        guest_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("guest lookup failed: {e}")))
}

/// Guests ordered by last name. `query` matches first name, last name or
/// email, case-insensitively.
pub fn list_guests(
    conn: &Connection,
    property_id: i64,
    query: Option<&str>,
) -> Result<Vec<Guest>, ServerError> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    // instr, not like: `%` and `_` in the query are plain characters
    let mut stmt = conn.prepare(&format!(
        r#"
        select {GUEST_COLUMNS}
        from guests
        where property_id = ?1
          and (?2 is null
               or instr(casefold(first_name), ?2) > 0
               or instr(casefold(last_name), ?2) > 0
               or instr(casefold(coalesce(email, '')), ?2) > 0)
        order by last_name collate nocase, first_name collate nocase
        "#
    ))?;
    let rows = stmt.query_map(params![property_id, needle], guest_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(ServerError::from)
}
