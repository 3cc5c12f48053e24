use crate::app::AppContext;
use crate::errors::ServerError;
use crate::handlers::{api, auth, bookings, guests, properties, rooms};
use crate::responses::{error_response, html_response, ResultResp};
use crate::templates;
use astra::{Request, Response};
use chrono::Utc;

/// Entry point for the server loop: never fails, errors become pages (or JSON under /api).
pub fn serve(req: Request, app: &AppContext) -> Response {
    let path = req.uri().path().to_string();
    let method = req.method().clone();
    match handle(req, app) {
        Ok(resp) => {
            log::debug!("{method} {path} -> {}", resp.status());
            resp
        }
        Err(err) => error_response(err, &path),
    }
}

pub fn handle(req: Request, app: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let now = Utc::now();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => auth::home(&req, app, now),
        ("GET", ["login"]) => html_response(templates::pages::login_page()),
        ("POST", ["auth", "request-link"]) => auth::request_link(req, app, now),
        ("GET", ["auth", "magic"]) => auth::redeem_link(&req, app, now),
        ("POST", ["logout"]) => auth::logout(&req, app, now),

        (_, ["api", rest @ ..]) => api::handle(&method, rest, now),

        ("GET", ["dashboard"]) => properties::dashboard(&req, app, now),
        ("GET", ["properties"]) => properties::list(&req, app, now),
        ("POST", ["properties"]) => properties::create(req, app, now),
        ("GET", ["properties", id, "dashboard"]) => properties::show_dashboard(&req, app, id, now),

        ("GET", ["properties", id, "guests"]) => guests::list(&req, app, id, now),
        ("GET", ["properties", id, "guests", "new"]) => guests::new_form(&req, app, id, now),
        ("GET", ["properties", id, "guests", "export"]) => guests::export(&req, app, id, now),
        ("POST", ["properties", id, "guests"]) => guests::create(req, app, id, now),
        ("GET", ["properties", id, "guests", guest_id]) => {
            guests::edit_form(&req, app, id, guest_id, now)
        }
        ("POST", ["properties", id, "guests", guest_id]) => {
            guests::update(req, app, id, guest_id, now)
        }

        ("GET", ["properties", id, "rooms"]) => rooms::list(&req, app, id, now),
        ("GET", ["properties", id, "rooms", "export"]) => rooms::export(&req, app, id, now),
        ("POST", ["properties", id, "rooms"]) => rooms::create(req, app, id, now),
        ("GET", ["properties", id, "rooms", room_id]) => {
            rooms::edit_form(&req, app, id, room_id, now)
        }
        ("POST", ["properties", id, "rooms", room_id]) => rooms::update(req, app, id, room_id, now),
        ("POST", ["properties", id, "rooms", room_id, "delete"]) => {
            rooms::delete(&req, app, id, room_id, now)
        }

        ("GET", ["properties", id, "bookings"]) => bookings::list(&req, app, id, now),
        ("GET", ["properties", id, "bookings", "export"]) => bookings::export(&req, app, id, now),
        ("POST", ["properties", id, "bookings"]) => bookings::create(req, app, id, now),
        ("POST", ["properties", id, "bookings", booking_id, "status"]) => {
            bookings::change_status(req, app, id, booking_id, now)
        }

        _ => Err(ServerError::NotFound),
    }
}
