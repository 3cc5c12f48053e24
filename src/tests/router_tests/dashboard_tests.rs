use crate::config::StatsSource;
use crate::tests::utils::{body_string, header, id_from_location, test_app, test_app_with};
use chrono::{Duration, Local};

#[test]
fn dashboard_prompts_for_first_property() {
    let t = test_app();
    let cookie = t.sign_in("new@hostel.pt");

    let body = body_string(t.get("/dashboard", Some(&cookie)));
    assert!(body.contains("No property yet"));
    assert!(body.contains("new@hostel.pt"));
}

#[test]
fn created_property_is_listed() {
    let t = test_app();
    let cookie = t.sign_in("owner@hostel.pt");
    t.create_property(&cookie, "Sunset+Hostel");

    let body = body_string(t.get("/dashboard", Some(&cookie)));
    assert!(body.contains("Sunset Hostel"));
    assert!(!body.contains("No property yet"));
}

#[test]
fn property_name_is_required() {
    let t = test_app();
    let cookie = t.sign_in("owner@hostel.pt");

    let resp = t.post_form("/properties", "name=++&city=Porto", Some(&cookie));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Property name is required"));
}

#[test]
fn other_owners_property_is_not_found() {
    let t = test_app();
    let alice = t.sign_in("alice@hostel.pt");
    let bob = t.sign_in("bob@hostel.pt");
    let pid = t.create_property(&alice, "Alice+House");

    assert_eq!(t.get(&format!("/properties/{pid}/dashboard"), Some(&alice)).status(), 200);
    assert_eq!(t.get(&format!("/properties/{pid}/dashboard"), Some(&bob)).status(), 404);
    assert_eq!(t.get("/properties/abc/dashboard", Some(&alice)).status(), 404);
}

#[test]
fn mock_provider_shows_fixed_numbers() {
    let t = test_app_with(StatsSource::Mock);
    let cookie = t.sign_in("demo@hostel.pt");
    let pid = t.create_property(&cookie, "Demo");

    let body = body_string(t.get(&format!("/properties/{pid}/dashboard"), Some(&cookie)));
    assert!(body.contains("75%"));
    assert!(body.contains("36 of 48 beds"));
}

#[test]
fn database_provider_counts_todays_guests() {
    let t = test_app();
    let cookie = t.sign_in("live@hostel.pt");
    let pid = t.create_property(&cookie, "Live");

    let resp = t.post_form(&format!("/properties/{pid}/rooms"), "name=Dorm&beds=4", Some(&cookie));
    assert_eq!(resp.status(), 303);
    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=Ana&lastName=Silva",
        Some(&cookie),
    );
    let gid = id_from_location(&resp, &format!("/properties/{pid}/guests/"));

    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);
    let resp = t.post_form(
        &format!("/properties/{pid}/bookings"),
        &format!("guestId={gid}&roomId=1&checkIn={today}&checkOut={tomorrow}&beds=3"),
        Some(&cookie),
    );
    assert_eq!(resp.status(), 303, "{:?}", header(&resp, "Location"));

    let body = body_string(t.get(&format!("/properties/{pid}/dashboard"), Some(&cookie)));
    assert!(body.contains("75%"));
    assert!(body.contains("3 of 4 beds"));
    assert!(body.contains("Ana Silva"));
}
