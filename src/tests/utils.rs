use crate::app::AppContext;
use crate::auth::login::issue_login_link;
use crate::config::{AppConfig, StatsSource};
use crate::db::connection::init_db;
use crate::router::serve;
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use std::io::Read;
use tempfile::TempDir;

/// A fully wired app on a throwaway SQLite file. The directory lives as long as this value.
pub struct TestApp {
    pub app: AppContext,
    _dir: TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with(StatsSource::Database)
}

pub fn test_app_with(stats_source: StatsSource) -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("hostelpulse_test.sqlite3");
    let config = AppConfig {
        db_path: db_path.to_string_lossy().into_owned(),
        stats_source,
        ..AppConfig::default()
    };
    let app = AppContext::new(config);
    init_db(&app.db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestApp { app, _dir: dir }
}

impl TestApp {
    pub fn send(&self, req: Request) -> Response {
        serve(req, &self.app)
    }

    pub fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = http::Request::builder().method(Method::GET).uri(uri);
        if let Some(c) = cookie {
            builder = builder.header("Cookie", c);
        }
        self.send(builder.body(Body::empty()).unwrap())
    }

    pub fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            builder = builder.header("Cookie", c);
        }
        self.send(builder.body(Body::from(body.as_bytes().to_vec())).unwrap())
    }

    /// Login link issued straight from the db, as if read from the email.
    pub fn login_token(&self, email: &str) -> String {
        self.app
            .db
            .with_conn(|conn| {
                issue_login_link(conn, &self.app.config.login, email, Utc::now().timestamp())
            })
            .unwrap()
            .token
    }

    /// Signs in through `/auth/magic` and returns a `Cookie` header value.
    pub fn sign_in(&self, email: &str) -> String {
        let token = self.login_token(email);
        let resp = self.get(&format!("/auth/magic?token={token}"), None);
        assert_eq!(resp.status(), 303);
        let set_cookie = header(&resp, "Set-Cookie").expect("session cookie");
        set_cookie
            .split(';')
            .next()
            .map(str::to_string)
            .expect("cookie pair")
    }

    /// Creates a property through the form and returns its id.
    pub fn create_property(&self, cookie: &str, name: &str) -> i64 {
        let resp = self.post_form("/properties", &format!("name={name}&city=Lisbon"), Some(cookie));
        assert_eq!(resp.status(), 303);
        id_from_location(&resp, "/properties/")
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Numeric id following `prefix` in the `Location` header.
pub fn id_from_location(resp: &Response, prefix: &str) -> i64 {
    let location = header(resp, "Location").expect("Location header");
    location
        .strip_prefix(prefix)
        .and_then(|rest| rest.split('/').next())
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("no id after {prefix} in {location}"))
}
