//! Registration, login and the token-gated route.
//!
//! Run: cargo test --test auth_flow_test

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use holocron_api::security::token::verify_access_token;
use holocron_api::security::Claims;

mod test_harness;
use test_harness::{TestApp, TEST_SECRET};

fn signed_token(secret: &str, email: &str, issued_hours_ago: i64, ttl_hours: i64) -> String {
    let issued = Utc::now() - Duration::hours(issued_hours_ago);
    let claims = Claims {
        sub: email.to_string(),
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_register_returns_serialized_user() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/register", json!({ "email": "a@x.com", "password": "p" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"]["id"].is_i64());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = TestApp::new().await;
    app.register("a@x.com", "p").await;

    let (status, body) = app
        .post("/register", json!({ "email": "a@x.com", "password": "other" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "usuario existente");
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 1);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let app = TestApp::new().await;
    app.register("vader@empire.gov", "i-am-your-father").await;

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
            .bind("vader@empire.gov")
            .fetch_one(&app.state.db.pool)
            .await
            .unwrap();

    assert!(stored.starts_with("$argon2id$"));
    assert!(!stored.contains("i-am-your-father"));
}

#[tokio::test]
async fn test_registration_requires_fields() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/register", json!({ "email": "a@x.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION");

    let (status, _) = app
        .post("/register", json!({ "email": "a@x.com", "password": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 0);
}

#[tokio::test]
async fn test_login_issues_token_bound_to_email() {
    let app = TestApp::new().await;
    app.register("obiwan@jedi.org", "high-ground").await;

    let token = app.login("obiwan@jedi.org", "high-ground").await;

    let claims = verify_access_token(&app.state.config.jwt, &token).unwrap();
    assert_eq!(claims.sub, "obiwan@jedi.org");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register("obiwan@jedi.org", "high-ground").await;

    let (status, body) = app
        .post(
            "/login",
            json!({ "email": "obiwan@jedi.org", "password": "low-ground" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Bad email or password");
}

#[tokio::test]
async fn test_login_with_unknown_email_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/login", json!({ "email": "ghost@x.com", "password": "p" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "usuario inexistente");
}

#[tokio::test]
async fn test_protected_echoes_token_identity() {
    let app = TestApp::new().await;
    app.register("a@x.com", "p").await;
    let token = app.login("a@x.com", "p").await;

    let (status, body) = app
        .request(Method::GET, "/protected", None, Some(&token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "logged_in_as": "a@x.com" }));
}

#[tokio::test]
async fn test_protected_without_token_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/protected").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_protected_rejects_bad_tokens() {
    let app = TestApp::new().await;

    let expired = signed_token(TEST_SECRET, "a@x.com", 3, 1);
    let forged = signed_token("not-the-secret", "a@x.com", 0, 1);

    for token in [expired.as_str(), forged.as_str(), "garbage"] {
        let (status, _) = app
            .request(Method::GET, "/protected", None, Some(token))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "token {token} was accepted");
    }
}

#[tokio::test]
async fn test_protected_requires_bearer_scheme() {
    let app = TestApp::new().await;
    let token = signed_token(TEST_SECRET, "a@x.com", 0, 1);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/protected")
        .header(header::AUTHORIZATION, format!("Token {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_accepts_any_bearer_casing() {
    let app = TestApp::new().await;
    let token = signed_token(TEST_SECRET, "a@x.com", 0, 1);

    for scheme in ["bearer", "BEARER", "Bearer"] {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/protected")
            .header(header::AUTHORIZATION, format!("{} {}", scheme, token))
            .body(Body::empty())
            .unwrap();
        let (status, body) = app.send(request).await;

        assert_eq!(status, StatusCode::OK, "scheme {scheme} was rejected");
        assert_eq!(body["logged_in_as"], "a@x.com");
    }
}
