use super::{owned_property, parse_id, query_param, require_user, FormData};
use crate::app::AppContext;
use crate::db::bookings::guest_bookings;
use crate::db::guests::{create_guest, find_guest, list_guests, update_guest};
use crate::domain::guest::{validate_guest, GuestForm};
use crate::errors::ServerError;
use crate::responses::{html_response, html_with_status, redirect, xlsx_response, ResultResp};
use crate::spreadsheets::guests_workbook;
use crate::templates::pages::{guest_form_page, guest_list_page, GuestFormMode};
use astra::Request;
use chrono::{DateTime, Utc};

pub fn list(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let query = query_param(req, "q").filter(|q| !q.trim().is_empty());

    let guests = app
        .db
        .with_conn(|conn| list_guests(conn, property.id, query.as_deref()))?;
    html_response(guest_list_page(&user.email, &property, &guests, query.as_deref()))
}

pub fn new_form(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    html_response(guest_form_page(
        &user.email,
        &property,
        GuestFormMode::Create,
        &GuestForm::default(),
        &[],
    ))
}

pub fn create(mut req: Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let body = FormData::read(&mut req)?;
    let form = GuestForm::from_pairs(body.pairs()).normalized();

    match validate_guest(form.clone()) {
        Ok(guest) => {
            let id = app
                .db
                .with_conn(|conn| create_guest(conn, property.id, &guest, now.timestamp()))?;
            log::info!("property {}: guest {id} created", property.id);
            redirect(&format!("/properties/{}/guests/{id}", property.id), None)
        }
        Err(errors) => html_with_status(
            422,
            guest_form_page(&user.email, &property, GuestFormMode::Create, &form, &errors),
        ),
    }
}

pub fn edit_form(
    req: &Request,
    app: &AppContext,
    raw_id: &str,
    raw_guest_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let guest_id = parse_id(raw_guest_id)?;

    let (guest, bookings) = app.db.with_conn(|conn| {
        let guest = find_guest(conn, property.id, guest_id)?.ok_or(ServerError::NotFound)?;
        let bookings = guest_bookings(conn, property.id, guest_id)?;
        Ok((guest, bookings))
    })?;

    html_response(guest_form_page(
        &user.email,
        &property,
        GuestFormMode::Edit {
            guest: &guest,
            bookings: &bookings,
        },
        &GuestForm::from(&guest),
        &[],
    ))
}

pub fn update(
    mut req: Request,
    app: &AppContext,
    raw_id: &str,
    raw_guest_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(&req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let guest_id = parse_id(raw_guest_id)?;
    let body = FormData::read(&mut req)?;
    let form = GuestForm::from_pairs(body.pairs()).normalized();

    match validate_guest(form.clone()) {
        Ok(changes) => {
            let updated = app
                .db
                .with_conn(|conn| update_guest(conn, property.id, guest_id, &changes))?;
            if !updated {
                return Err(ServerError::NotFound);
            }
            log::info!("property {}: guest {guest_id} updated", property.id);
            redirect(&format!("/properties/{}/guests/{guest_id}", property.id), None)
        }
        Err(errors) => {
            let (guest, bookings) = app.db.with_conn(|conn| {
                let guest = find_guest(conn, property.id, guest_id)?.ok_or(ServerError::NotFound)?;
                let bookings = guest_bookings(conn, property.id, guest_id)?;
                Ok((guest, bookings))
            })?;
            html_with_status(
                422,
                guest_form_page(
                    &user.email,
                    &property,
                    GuestFormMode::Edit {
                        guest: &guest,
                        bookings: &bookings,
                    },
                    &form,
                    &errors,
                ),
            )
        }
    }
}

pub fn export(req: &Request, app: &AppContext, raw_id: &str, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;

    let guests = app.db.with_conn(|conn| list_guests(conn, property.id, None))?;
    let buffer = guests_workbook(&guests)?;
    log::info!("property {}: exported {} guests", property.id, guests.len());

    xlsx_response(buffer, &format!("guests-{}.xlsx", property.id))
}
