use super::{owned_property, parse_id, query_param, require_user, FormData};
use crate::app::AppContext;
use crate::db::bookings::{create_booking, list_bookings, set_status, BookingRejected};
use crate::db::guests::list_guests;
use crate::db::rooms::list_rooms;
use crate::domain::booking::{BookingForm, BookingStatus};
use crate::domain::property::Property;
use crate::errors::ServerError;
use crate::responses::{html_response, html_with_status, redirect, xlsx_response, ResultResp};
use crate::spreadsheets::bookings_workbook;
use crate::templates::pages::{bookings_page, BookingsVm};
use astra::Request;
use chrono::{DateTime, Utc};

pub fn list(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let query = query_param(req, "q").filter(|q| !q.trim().is_empty());
    render(app, &user.email, &property, query.as_deref(), None, 200)
}

/// Same filter as the list page, so an export matches what was on screen.
pub fn export(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let query = query_param(req, "q").filter(|q| !q.trim().is_empty());

    let bookings = app
        .db
        .with_conn(|conn| list_bookings(conn, property.id, query.as_deref()))?;
    let buffer = bookings_workbook(&bookings)?;
    log::info!("property {}: exported {} bookings", property.id, bookings.len());

    xlsx_response(buffer, &format!("bookings-{}.xlsx", property.id))
}

pub fn create(mut req: Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let body = FormData::read(&mut req)?;
    let form = BookingForm {
        guest_id: body.get("guestId"),
        room_id: body.get("roomId"),
        check_in: body.get("checkIn"),
        check_out: body.get("checkOut"),
        beds: body.get("beds"),
    };

    let booking = match form.parse() {
        Ok(b) => b,
        Err(msg) => return render(app, &user.email, &property, None, Some(msg.as_str()), 422),
    };

    let stored = app
        .db
        .with_conn(|conn| create_booking(conn, property.id, &booking, now.timestamp()))?;
    match stored {
        Ok(id) => {
            log::info!(
                "property {}: booking {id} for guest {} in room {}",
                property.id,
                booking.guest_id,
                booking.room_id
            );
            redirect(&format!("/properties/{}/bookings", property.id), None)
        }
        Err(rejected) => render(app, &user.email, &property, None, Some(rejected.to_string().as_str()), 422),
    }
}

pub fn change_status(
    mut req: Request,
    app: &AppContext,
    raw_id: &str,
    raw_booking_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let booking_id = parse_id(raw_booking_id)?;
    let status: BookingStatus = FormData::read(&mut req)?
        .get("status")
        .parse()
        .map_err(ServerError::BadRequest)?;

    let changed = app
        .db
        .with_conn(|conn| set_status(conn, property.id, booking_id, status))?;
    match changed {
        Ok(()) => {
            log::info!("property {}: booking {booking_id} is now {status}", property.id);
            redirect(&format!("/properties/{}/bookings", property.id), None)
        }
        Err(BookingRejected::UnknownBooking) => Err(ServerError::NotFound),
        Err(rejected) => render(app, &user.email, &property, None, Some(rejected.to_string().as_str()), 422),
    }
}

fn render(
    app: &AppContext,
    email: &str,
    property: &Property,
    query: Option<&str>,
    error: Option<&str>,
    status: u16,
) -> ResultResp {
    let (bookings, guests, rooms) = app.db.with_conn(|conn| {
        Ok((
            list_bookings(conn, property.id, query)?,
            list_guests(conn, property.id, None)?,
            list_rooms(conn, property.id)?,
        ))
    })?;

    let page = bookings_page(&BookingsVm {
        email,
        property,
        bookings: &bookings,
        guests: &guests,
        rooms: &rooms,
        query,
        error,
    });
    if status == 200 {
        html_response(page)
    } else {
        html_with_status(status, page)
    }
}
