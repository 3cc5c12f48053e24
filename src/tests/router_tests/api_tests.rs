use crate::tests::utils::{body_string, header, test_app};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn json(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn stats_returns_mock_figures() {
    let t = test_app();

    let resp = t.get("/api/stats", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type").as_deref(), Some("application/json"));

    let v = json(resp);
    assert_eq!(v["taxCollected"], 1250.5);
    assert_eq!(v["invoicesGenerated"], 45);
    assert_eq!(v["bookingsThisMonth"], 127);
    assert!(v["lastSync"].as_str().unwrap().contains('T'));
}

#[test]
fn stats_rejects_other_methods() {
    let t = test_app();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let req = Request::builder()
            .method(method.clone())
            .uri("/api/stats")
            .body(Body::empty())
            .unwrap();
        let resp = t.send(req);

        assert_eq!(resp.status(), 405, "{method}");
        assert_eq!(header(&resp, "Allow").as_deref(), Some("GET"));
        assert_eq!(json(resp)["error"], "Method not allowed");
    }
}

#[test]
fn sync_booking_reports_success() {
    let t = test_app();

    let v = json(t.post_form("/api/sync-booking", "", None));
    assert_eq!(v["success"], true);
    assert_eq!(v["result"]["syncedBookings"], 3);
    assert_eq!(v["result"]["status"], "success");
}

#[test]
fn health_and_unknown_routes() {
    let t = test_app();

    assert_eq!(json(t.get("/api/health", None))["status"], "ok");

    let missing = t.get("/api/nope", None);
    assert_eq!(missing.status(), 404);
    assert_eq!(json(missing)["error"], "Not found");
}
