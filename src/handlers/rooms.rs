use super::{owned_property, parse_id, query_param, require_user, FormData};
use crate::app::AppContext;
use crate::db::bookings::room_availability;
use crate::db::rooms::{create_room, delete_room, find_room, list_rooms, update_room, RoomRejected};
use crate::domain::booking::parse_stay;
use crate::domain::property::{NewRoom, Property, Room};
use crate::errors::ServerError;
use crate::responses::{html_response, html_with_status, redirect, xlsx_response, ResultResp};
use crate::spreadsheets::rooms_workbook;
use crate::templates::pages::{room_edit_page, rooms_page, RoomsVm};
use astra::Request;
use chrono::{DateTime, Utc};

/// Room list. With `from` and `to` in the query it also shows free beds for
/// that stay.
pub fn list(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let from = query_param(req, "from").filter(|v| !v.trim().is_empty());
    let to = query_param(req, "to").filter(|v| !v.trim().is_empty());

    let rooms = app.db.with_conn(|conn| list_rooms(conn, property.id))?;
    let (availability, error) = match (&from, &to) {
        (Some(f), Some(t)) => match parse_stay(f, t) {
            Ok((check_in, check_out)) => {
                let free = app
                    .db
                    .with_conn(|conn| room_availability(conn, property.id, check_in, check_out))?;
                (Some(free), None)
            }
            Err(msg) => (None, Some(msg)),
        },
        (None, None) => (None, None),
        _ => (None, Some("Give both dates to check availability".to_string())),
    };

    let page = rooms_page(&RoomsVm {
        email: &user.email,
        property: &property,
        rooms: &rooms,
        availability: availability.as_deref(),
        from: from.as_deref(),
        to: to.as_deref(),
        error: error.as_deref(),
    });
    if error.is_some() {
        html_with_status(422, page)
    } else {
        html_response(page)
    }
}

pub fn create(mut req: Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let form = FormData::read(&mut req)?;

    match NewRoom::parse(&form.get("name"), &form.get("beds")) {
        Ok(room) => {
            let id = app.db.with_conn(|conn| create_room(conn, property.id, &room))?;
            log::info!("property {}: room {id} ({} beds) created", property.id, room.beds);
            redirect(&format!("/properties/{}/rooms", property.id), None)
        }
        Err(msg) => {
            let rooms = app.db.with_conn(|conn| list_rooms(conn, property.id))?;
            html_with_status(
                422,
                rooms_page(&RoomsVm {
                    email: &user.email,
                    property: &property,
                    rooms: &rooms,
                    availability: None,
                    from: None,
                    to: None,
                    error: Some(msg.as_str()),
                }),
            )
        }
    }
}

pub fn edit_form(
    req: &Request,
    app: &AppContext,
    raw_id: &str,
    raw_room_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let room = owned_room(app, &property, raw_room_id)?;
    html_response(room_edit_page(
        &user.email,
        &property,
        &room,
        &room.name,
        &room.beds.to_string(),
        None,
    ))
}

pub fn update(
    mut req: Request,
    app: &AppContext,
    raw_id: &str,
    raw_room_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let room = owned_room(app, &property, raw_room_id)?;
    let form = FormData::read(&mut req)?;
    let (name, beds) = (form.get("name"), form.get("beds"));

    let refused = match NewRoom::parse(&name, &beds) {
        Ok(changes) => {
            match app
                .db
                .with_conn(|conn| update_room(conn, property.id, room.id, &changes))?
            {
                Ok(()) => {
                    log::info!("property {}: room {} now {} beds", property.id, room.id, changes.beds);
                    return redirect(&format!("/properties/{}/rooms", property.id), None);
                }
                Err(RoomRejected::UnknownRoom) => return Err(ServerError::NotFound),
                Err(rejected) => rejected.to_string(),
            }
        }
        Err(msg) => msg,
    };
    html_with_status(
        422,
        room_edit_page(&user.email, &property, &room, &name, &beds, Some(refused.as_str())),
    )
}

pub fn delete(
    req: &Request,
    app: &AppContext,
    raw_id: &str,
    raw_room_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let room = owned_room(app, &property, raw_room_id)?;

    match app.db.with_conn(|conn| delete_room(conn, property.id, room.id))? {
        Ok(()) => {
            log::info!("property {}: room {} deleted", property.id, room.id);
            redirect(&format!("/properties/{}/rooms", property.id), None)
        }
        Err(RoomRejected::UnknownRoom) => Err(ServerError::NotFound),
        Err(rejected) => html_with_status(
            422,
            room_edit_page(
                &user.email,
                &property,
                &room,
                &room.name,
                &room.beds.to_string(),
                Some(rejected.to_string().as_str()),
            ),
        ),
    }
}

pub fn export(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;

    let rooms = app.db.with_conn(|conn| list_rooms(conn, property.id))?;
    let buffer = rooms_workbook(&rooms)?;
    log::info!("property {}: exported {} rooms", property.id, rooms.len());

    xlsx_response(buffer, &format!("rooms-{}.xlsx", property.id))
}

fn owned_room(app: &AppContext, property: &Property, raw_room_id: &str) -> Result<Room, ServerError> {
    let room_id = parse_id(raw_room_id)?;
    app.db
        .with_conn(|conn| find_room(conn, property.id, room_id))?
        .ok_or(ServerError::NotFound)
}
