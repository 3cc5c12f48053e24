use crate::db::rooms::list_rooms;
use crate::tests::utils::{body_string, header, id_from_location, test_app, TestApp};

struct Desk {
    cookie: String,
    pid: i64,
    rid: i64,
    gid: i64,
}

fn desk_with_room(t: &TestApp, beds: u32) -> Desk {
    desk_for(t, "bookings@hostel.pt", beds)
}

/// Signs `email` in and sets up a property with one room and one guest.
fn desk_for(t: &TestApp, email: &str, beds: u32) -> Desk {
    let cookie = t.sign_in(email);
    let pid = t.create_property(&cookie, "Riverside");
    t.post_form(&format!("/properties/{pid}/rooms"), &format!("name=Dorm+A&beds={beds}"), Some(&cookie));
    let rid = t.app.db.with_conn(|conn| list_rooms(conn, pid)).unwrap()[0].id;
    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=Ines&lastName=Costa",
        Some(&cookie),
    );
    let gid = id_from_location(&resp, &format!("/properties/{pid}/guests/"));
    Desk { cookie, pid, rid, gid }
}

fn book(t: &TestApp, d: &Desk, check_in: &str, check_out: &str, beds: u32) -> astra::Response {
    t.post_form(
        &format!("/properties/{}/bookings", d.pid),
        &format!(
            "guestId={}&roomId={}&checkIn={check_in}&checkOut={check_out}&beds={beds}",
            d.gid, d.rid
        ),
        Some(&d.cookie),
    )
}

fn set_status(t: &TestApp, d: &Desk, booking_id: i64, status: &str) -> astra::Response {
    t.post_form(
        &format!("/properties/{}/bookings/{booking_id}/status", d.pid),
        &format!("status={status}"),
        Some(&d.cookie),
    )
}

#[test]
fn rooms_need_at_least_one_bed() {
    let t = test_app();
    let cookie = t.sign_in("rooms@hostel.pt");
    let pid = t.create_property(&cookie, "Tiny");

    let resp = t.post_form(&format!("/properties/{pid}/rooms"), "name=Closet&beds=0", Some(&cookie));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("at least one bed"));
}

#[test]
fn booking_is_listed_with_formatted_dates() {
    let t = test_app();
    let d = desk_with_room(&t, 4);

    assert_eq!(book(&t, &d, "2024-06-01", "2024-06-03", 2).status(), 303);

    let body = body_string(t.get(&format!("/properties/{}/bookings", d.pid), Some(&d.cookie)));
    assert!(body.contains("Ines Costa"));
    assert!(body.contains("1st June 2024"));
    assert!(body.contains("3rd June 2024"));
}

#[test]
fn checkout_must_follow_checkin() {
    let t = test_app();
    let d = desk_with_room(&t, 4);

    let resp = book(&t, &d, "2024-06-03", "2024-06-03", 1);
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Check-out must be after check-in"));
}

#[test]
fn overbooking_is_refused() {
    let t = test_app();
    let d = desk_with_room(&t, 2);

    assert_eq!(book(&t, &d, "2024-06-01", "2024-06-05", 2).status(), 303);
    let resp = book(&t, &d, "2024-06-04", "2024-06-06", 1);
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Only 0 bed(s) free"));

    // back-to-back stays share the turnover day
    assert_eq!(book(&t, &d, "2024-06-05", "2024-06-07", 2).status(), 303);
}

#[test]
fn cancelling_frees_the_beds() {
    let t = test_app();
    let d = desk_with_room(&t, 1);
    assert_eq!(book(&t, &d, "2024-07-01", "2024-07-03", 1).status(), 303);

    assert_eq!(set_status(&t, &d, 1, "cancelled").status(), 303);
    assert_eq!(book(&t, &d, "2024-07-01", "2024-07-03", 1).status(), 303);
}

#[test]
fn unknown_status_is_a_bad_request() {
    let t = test_app();
    let d = desk_with_room(&t, 1);
    assert_eq!(book(&t, &d, "2024-07-01", "2024-07-03", 1).status(), 303);

    assert_eq!(set_status(&t, &d, 1, "teleported").status(), 400);
    assert_eq!(set_status(&t, &d, 1, "").status(), 400);

    let body = body_string(t.get(&format!("/properties/{}/bookings", d.pid), Some(&d.cookie)));
    assert!(body.contains("<option value=\"confirmed\" selected>"));
}

#[test]
fn another_propertys_booking_is_not_found() {
    let t = test_app();
    let mine = desk_for(&t, "mine@hostel.pt", 2);
    let theirs = desk_for(&t, "theirs@hostel.pt", 2);
    assert_eq!(book(&t, &theirs, "2024-07-01", "2024-07-03", 1).status(), 303);
    let their_booking = 1;

    // their booking id under my property
    assert_eq!(set_status(&t, &mine, their_booking, "cancelled").status(), 404);
    // my session against their property
    let resp = t.post_form(
        &format!("/properties/{}/bookings/{their_booking}/status", theirs.pid),
        "status=cancelled",
        Some(&mine.cookie),
    );
    assert_eq!(resp.status(), 404);
    assert_eq!(set_status(&t, &mine, 999, "cancelled").status(), 404);

    // still confirmed for its owner
    let body = body_string(t.get(&format!("/properties/{}/bookings", theirs.pid), Some(&theirs.cookie)));
    assert!(body.contains("<option value=\"confirmed\" selected>"));
}

#[test]
fn reconfirming_a_cancelled_booking_cannot_overbook() {
    let t = test_app();
    let d = desk_with_room(&t, 2);
    assert_eq!(book(&t, &d, "2024-08-01", "2024-08-04", 2).status(), 303);
    assert_eq!(set_status(&t, &d, 1, "cancelled").status(), 303);
    assert_eq!(book(&t, &d, "2024-08-02", "2024-08-05", 2).status(), 303);

    let resp = set_status(&t, &d, 1, "confirmed");
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Only 0 bed(s) free"));

    // once the beds are released it goes through
    assert_eq!(set_status(&t, &d, 2, "no_show").status(), 303);
    assert_eq!(set_status(&t, &d, 1, "checked_in").status(), 303);
}

#[test]
fn search_narrows_the_booking_list() {
    let t = test_app();
    let d = desk_with_room(&t, 4);
    let resp = t.post_form(
        &format!("/properties/{}/guests", d.pid),
        "firstName=%C3%82ngela&lastName=Silva",
        Some(&d.cookie),
    );
    let angela = id_from_location(&resp, &format!("/properties/{}/guests/", d.pid));
    assert_eq!(book(&t, &d, "2024-06-01", "2024-06-03", 1).status(), 303);
    let resp = t.post_form(
        &format!("/properties/{}/bookings", d.pid),
        &format!("guestId={angela}&roomId={}&checkIn=2024-06-01&checkOut=2024-06-02&beds=1", d.rid),
        Some(&d.cookie),
    );
    assert_eq!(resp.status(), 303);

    let body = body_string(t.get(&format!("/properties/{}/bookings?q=%C3%A2ngela", d.pid), Some(&d.cookie)));
    assert!(body.contains("<td>Ângela Silva</td>"));
    assert!(!body.contains("<td>Ines Costa</td>"));
    assert!(body.contains("export?q=%C3%A2ngela"));

    let none = body_string(t.get(&format!("/properties/{}/bookings?q=zzz", d.pid), Some(&d.cookie)));
    assert!(none.contains("No bookings match that search."));
}

#[test]
fn bookings_export_downloads_a_workbook() {
    let t = test_app();
    let d = desk_with_room(&t, 4);
    assert_eq!(book(&t, &d, "2024-06-01", "2024-06-03", 2).status(), 303);

    let resp = t.get(&format!("/properties/{}/bookings/export?q=costa", d.pid), Some(&d.cookie));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Disposition").unwrap().contains("bookings-"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
