use super::{owned_property, require_user, FormData};
use crate::app::AppContext;
use crate::db::bookings::{arrivals_on, departures_on};
use crate::db::properties::{create_property, list_properties};
use crate::domain::property::NewProperty;
use crate::responses::{html_response, html_with_status, redirect, ResultResp};
use crate::templates::pages::{
    dashboard_page, properties_page, property_dashboard_page, DashboardVm, PropertyDashboardVm,
};
use astra::Request;
use chrono::{DateTime, Local, Utc};

pub fn dashboard(req: &Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let properties = app.db.with_conn(|conn| list_properties(conn, user.id))?;

    html_response(dashboard_page(&DashboardVm {
        email: user.email,
        properties,
    }))
}

pub fn list(req: &Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(req, app, now);
    let properties = app.db.with_conn(|conn| list_properties(conn, user.id))?;
    html_response(properties_page(&user.email, &properties, None))
}

pub fn create(mut req: Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let user = require_user!(&req, app, now);
    let form = FormData::read(&mut req)?;
    let city = form.get("city");

    match NewProperty::parse(&form.get("name"), Some(city.as_str())) {
        Ok(new) => {
            let id = app
                .db
                .with_conn(|conn| create_property(conn, user.id, &new, now.timestamp()))?;
            log::info!("user {} created property {id} ({})", user.id, new.name);
            redirect(&format!("/properties/{id}/dashboard"), None)
        }
        Err(msg) => {
            let properties = app.db.with_conn(|conn| list_properties(conn, user.id))?;
            html_with_status(422, properties_page(&user.email, &properties, Some(msg.as_str())))
        }
    }
}

pub fn show_dashboard(
    req: &Request,
    app: &AppContext,
    raw_id: &str,
    now: DateTime<Utc>,
) -> ResultResp {
    let user = require_user!(req, app, now);
    let property = owned_property(app, &user, raw_id)?;
    let today = now.with_timezone(&Local).date_naive();

    let (stats, arrivals, departures) = app.db.with_conn(|conn| {
        Ok((
            app.stats.dashboard_stats(conn, property.id, today)?,
            arrivals_on(conn, property.id, today)?,
            departures_on(conn, property.id, today)?,
        ))
    })?;

    html_response(property_dashboard_page(&PropertyDashboardVm {
        email: user.email,
        property,
        today,
        stats,
        arrivals,
        departures,
    }))
}
