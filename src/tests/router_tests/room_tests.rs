use crate::db::rooms::list_rooms;
use crate::tests::utils::{body_string, header, id_from_location, test_app, TestApp};

struct Setup {
    cookie: String,
    pid: i64,
    rid: i64,
}

fn property_with_dorm(t: &TestApp, beds: u32) -> Setup {
    let cookie = t.sign_in("rooms@hostel.pt");
    let pid = t.create_property(&cookie, "Hillside");
    t.post_form(&format!("/properties/{pid}/rooms"), &format!("name=Dorm&beds={beds}"), Some(&cookie));
    let rid = t.app.db.with_conn(|conn| list_rooms(conn, pid)).unwrap()[0].id;
    Setup { cookie, pid, rid }
}

/// Books `beds` beds in the dorm for a fresh guest.
fn book(t: &TestApp, s: &Setup, check_in: &str, check_out: &str, beds: u32) {
    let resp = t.post_form(
        &format!("/properties/{}/guests", s.pid),
        "firstName=Rui&lastName=Lopes",
        Some(&s.cookie),
    );
    let gid = id_from_location(&resp, &format!("/properties/{}/guests/", s.pid));
    let resp = t.post_form(
        &format!("/properties/{}/bookings", s.pid),
        &format!("guestId={gid}&roomId={}&checkIn={check_in}&checkOut={check_out}&beds={beds}", s.rid),
        Some(&s.cookie),
    );
    assert_eq!(resp.status(), 303);
}

#[test]
fn room_is_renamed_and_resized() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);
    let url = format!("/properties/{}/rooms/{}", s.pid, s.rid);

    assert!(body_string(t.get(&url, Some(&s.cookie))).contains("value=\"Dorm\""));

    let resp = t.post_form(&url, "name=Big+Dorm&beds=8", Some(&s.cookie));
    assert_eq!(resp.status(), 303);
    let list = body_string(t.get(&format!("/properties/{}/rooms", s.pid), Some(&s.cookie)));
    assert!(list.contains("<td>Big Dorm</td><td>8</td>"));
}

#[test]
fn room_cannot_shrink_below_its_bookings() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);
    book(&t, &s, "2024-06-01", "2024-06-04", 3);
    let url = format!("/properties/{}/rooms/{}", s.pid, s.rid);

    let resp = t.post_form(&url, "name=Dorm&beds=2", Some(&s.cookie));
    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Current bookings need 3 bed(s)"));
    // the submitted values are echoed back
    assert!(body.contains("value=\"2\""));

    assert_eq!(t.post_form(&url, "name=Dorm&beds=0", Some(&s.cookie)).status(), 422);
    assert_eq!(t.post_form(&url, "name=Dorm&beds=3", Some(&s.cookie)).status(), 303);
}

#[test]
fn room_with_live_bookings_is_not_deleted() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);
    book(&t, &s, "2024-06-01", "2024-06-04", 1);
    let delete = format!("/properties/{}/rooms/{}/delete", s.pid, s.rid);

    let resp = t.post_form(&delete, "", Some(&s.cookie));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Cannot delete a room"));

    t.post_form(&format!("/properties/{}/bookings/1/status", s.pid), "status=cancelled", Some(&s.cookie));
    let resp = t.post_form(&delete, "", Some(&s.cookie));
    assert_eq!(resp.status(), 303);
    let list = body_string(t.get(&format!("/properties/{}/rooms", s.pid), Some(&s.cookie)));
    assert!(list.contains("No rooms yet."));
}

#[test]
fn someone_elses_room_is_not_found() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);
    let other = t.sign_in("other@hostel.pt");
    let other_pid = t.create_property(&other, "Elsewhere");

    let url = format!("/properties/{}/rooms/{}", s.pid, s.rid);
    assert_eq!(t.get(&url, Some(&other)).status(), 404);
    assert_eq!(
        t.get(&format!("/properties/{other_pid}/rooms/{}", s.rid), Some(&other)).status(),
        404
    );
    assert_eq!(
        t.post_form(&format!("/properties/{other_pid}/rooms/{}/delete", s.rid), "", Some(&other)).status(),
        404
    );
}

#[test]
fn availability_shows_free_beds_for_a_stay() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);
    book(&t, &s, "2024-06-01", "2024-06-03", 3);
    let rooms = format!("/properties/{}/rooms", s.pid);

    let body = body_string(t.get(&format!("{rooms}?from=2024-06-02&to=2024-06-04"), Some(&s.cookie)));
    assert!(body.contains("<th>Free</th>"));
    assert!(body.contains("<td>Dorm</td><td>4</td><td>1</td>"));

    // the check-out day is free again
    let body = body_string(t.get(&format!("{rooms}?from=2024-06-03&to=2024-06-04"), Some(&s.cookie)));
    assert!(body.contains("<td>Dorm</td><td>4</td><td>4</td>"));

    let resp = t.get(&format!("{rooms}?from=2024-06-02"), Some(&s.cookie));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Give both dates"));
    assert_eq!(t.get(&format!("{rooms}?from=2024-06-04&to=2024-06-02"), Some(&s.cookie)).status(), 422);
}

#[test]
fn rooms_export_downloads_a_workbook() {
    let t = test_app();
    let s = property_with_dorm(&t, 4);

    let resp = t.get(&format!("/properties/{}/rooms/export", s.pid), Some(&s.cookie));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Disposition").unwrap().contains("rooms-"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
