use crate::tests::utils::{body_string, header, id_from_location, test_app, TestApp};

fn signed_in_with_property(t: &TestApp) -> (String, i64) {
    let cookie = t.sign_in("desk@hostel.pt");
    let pid = t.create_property(&cookie, "Harbour");
    (cookie, pid)
}

#[test]
fn valid_guest_is_stored_and_shown() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);

    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=Jo%C3%A3o&lastName=Pereira&email=joao%40mail.pt&phone=&documentType=passport&documentId=X123",
        Some(&cookie),
    );
    assert_eq!(resp.status(), 303);
    let gid = id_from_location(&resp, &format!("/properties/{pid}/guests/"));

    let body = body_string(t.get(&format!("/properties/{pid}/guests/{gid}"), Some(&cookie)));
    assert!(body.contains("João Pereira"));
    assert!(body.contains("joao@mail.pt"));

    let list = body_string(t.get(&format!("/properties/{pid}/guests"), Some(&cookie)));
    assert!(list.contains("Pereira"));
}

#[test]
fn invalid_guest_rerenders_with_messages() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);

    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=&lastName=&email=nope",
        Some(&cookie),
    );
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("First name is required"));
    assert!(body.contains("Last name is required"));
    assert!(body.contains("Invalid email address"));

    let list = body_string(t.get(&format!("/properties/{pid}/guests"), Some(&cookie)));
    assert!(list.contains("No guests"));
}

#[test]
fn empty_optional_email_is_accepted() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);

    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=Mia&lastName=Kim&email=&nationality=",
        Some(&cookie),
    );
    assert_eq!(resp.status(), 303);
}

#[test]
fn update_goes_through_validation() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        "firstName=Lea&lastName=Roth",
        Some(&cookie),
    );
    let uri = header(&resp, "Location").unwrap();

    let bad = t.post_form(&uri, "firstName=Lea&lastName=", Some(&cookie));
    assert_eq!(bad.status(), 422);

    let good = t.post_form(&uri, "firstName=Lea&lastName=Roth-Meyer", Some(&cookie));
    assert_eq!(good.status(), 303);
    assert!(body_string(t.get(&uri, Some(&cookie))).contains("Roth-Meyer"));
}

#[test]
fn search_filters_the_list() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    for body in ["firstName=Ada&lastName=Lovelace", "firstName=Alan&lastName=Turing"] {
        t.post_form(&format!("/properties/{pid}/guests"), body, Some(&cookie));
    }

    let body = body_string(t.get(&format!("/properties/{pid}/guests?q=turing"), Some(&cookie)));
    assert!(body.contains("Turing"));
    assert!(!body.contains("Lovelace"));
}

#[test]
fn unknown_guest_is_not_found() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    assert_eq!(t.get(&format!("/properties/{pid}/guests/999"), Some(&cookie)).status(), 404);
}

#[test]
fn export_downloads_a_workbook() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    t.post_form(&format!("/properties/{pid}/guests"), "firstName=Ada&lastName=Lovelace", Some(&cookie));

    let resp = t.get(&format!("/properties/{pid}/guests/export"), Some(&cookie));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Disposition").unwrap().contains(".xlsx"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    // xlsx is a zip archive
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn oversized_form_is_refused_without_storing() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    let notes = "a".repeat(70 * 1024);

    let resp = t.post_form(
        &format!("/properties/{pid}/guests"),
        &format!("firstName=Ada&lastName=Lovelace&notes={notes}"),
        Some(&cookie),
    );
    assert_eq!(resp.status(), 400);

    let list = body_string(t.get(&format!("/properties/{pid}/guests"), Some(&cookie)));
    assert!(list.contains("No guests yet."));
}

#[test]
fn search_ignores_case_of_accented_letters() {
    let t = test_app();
    let (cookie, pid) = signed_in_with_property(&t);
    t.post_form(&format!("/properties/{pid}/guests"), "firstName=%C3%82NGELA&lastName=Silva", Some(&cookie));
    t.post_form(&format!("/properties/{pid}/guests"), "firstName=Rui&lastName=100%25", Some(&cookie));

    let body = body_string(t.get(&format!("/properties/{pid}/guests?q=%C3%A2ngela"), Some(&cookie)));
    assert!(body.contains("ÂNGELA"));
    assert!(!body.contains("Rui"));

    let body = body_string(t.get(&format!("/properties/{pid}/guests?q=%25"), Some(&cookie)));
    assert!(body.contains("Rui"));
    assert!(!body.contains("NGELA"));
}
