use crate::router::handle;
use crate::tests::utils::{body_string, header, test_app};
use astra::Body;
use http::{Method, Request};

#[test]
fn login_page_loads_successfully() {
    let t = test_app();

    let resp = t.get("/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let t = test_app();
    let email = "test@example.com";

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/request-link")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(format!("email={email}").into_bytes()))
        .unwrap();

    let resp = t.send(req);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));
    // partial only, htmx swaps it into the page
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn request_link_without_htmx_renders_full_page() {
    let t = test_app();

    let resp = t.post_form("/auth/request-link", "email=Owner%40Hostel.pt", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("owner@hostel.pt"));
}

#[test]
fn request_link_rejects_invalid_email() {
    let t = test_app();
    let resp = t.post_form("/auth/request-link", "email=not-an-email", None);
    assert_eq!(resp.status(), 400);
}

#[test]
fn magic_link_signs_in_once() {
    let t = test_app();
    let token = t.login_token("front@desk.pt");

    let resp = t.get(&format!("/auth/magic?token={token}"), None);
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/dashboard"));
    let cookie = header(&resp, "Set-Cookie").unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let again = t.get(&format!("/auth/magic?token={token}"), None);
    assert_eq!(again.status(), 401);
}

#[test]
fn magic_link_needs_a_token() {
    let t = test_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/auth/magic")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &t.app).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn private_pages_redirect_to_login() {
    let t = test_app();

    for uri in ["/dashboard", "/properties", "/properties/1/guests"] {
        let resp = t.get(uri, None);
        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(header(&resp, "Location").as_deref(), Some("/login"), "{uri}");
    }

    let stale = t.get("/dashboard", Some("session=forged"));
    assert_eq!(header(&stale, "Location").as_deref(), Some("/login"));
}

#[test]
fn logout_revokes_session() {
    let t = test_app();
    let cookie = t.sign_in("bye@hostel.pt");
    assert_eq!(t.get("/dashboard", Some(&cookie)).status(), 200);

    let resp = t.post_form("/logout", "", Some(&cookie));
    assert_eq!(resp.status(), 303);
    assert!(header(&resp, "Set-Cookie").unwrap().contains("Max-Age=0"));

    let after = t.get("/dashboard", Some(&cookie));
    assert_eq!(header(&after, "Location").as_deref(), Some("/login"));
}

#[test]
fn home_page_knows_who_is_signed_in() {
    let t = test_app();
    assert!(body_string(t.get("/", None)).contains("Sign in"));

    let cookie = t.sign_in("home@hostel.pt");
    let body = body_string(t.get("/", Some(&cookie)));
    assert!(body.contains("home@hostel.pt"));
    assert!(body.contains("Open dashboard"));
}

#[test]
fn unknown_pages_render_html_not_found() {
    let t = test_app();
    let resp = t.get("/nowhere", None);
    assert_eq!(resp.status(), 404);
    assert!(header(&resp, "Content-Type").unwrap().starts_with("text/html"));
}
