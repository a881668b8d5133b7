mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn customer_can_register_and_login() {
    let app = TestApp::new().await;

    let (token, customer_id) = app.register_customer("lindiwe@example.com").await;
    assert!(!token.is_empty());
    assert!(!customer_id.is_empty());

    let response = app.post("/api/v1/auth/customers/login", None, json!({
        "email": "lindiwe@example.com",
        "password": "Str0ng!pass"
    })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["user"]["email"], "lindiwe@example.com");
    assert_eq!(body["user"]["role"], "customer");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.register_customer("dup@example.com").await;

    let response = app.post("/api/v1/auth/customers/register", None, json!({
        "email": "dup@example.com",
        "password": "Str0ng!pass",
        "first_name": "Lindiwe",
        "last_name": "Mokoena",
        "phone": "+27821234567"
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weak_password_is_rejected() {
    let app = TestApp::new().await;

    for password in ["Sh0rt!a", "nouppercase1!", "NOLOWERCASE1!", "NoDigitsHere!", "NoSymbols123"] {
        let response = app.post("/api/v1/auth/customers/register", None, json!({
            "email": "weak@example.com",
            "password": password,
            "first_name": "Lindiwe",
            "last_name": "Mokoena",
            "phone": "+27821234567"
        })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{password}");
    }
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register_customer("secure@example.com").await;

    let response = app.post("/api/v1/auth/customers/login", None, json!({
        "email": "secure@example.com",
        "password": "Wr0ng!pass"
    })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chef_registration_requires_a_real_bio() {
    let app = TestApp::new().await;

    let response = app.post("/api/v1/auth/chefs/register", None, json!({
        "email": "chef@example.com",
        "password": "Str0ng!pass",
        "first_name": "Sipho",
        "last_name": "Dlamini",
        "phone": "+27831234567",
        "bio": "Too short",
        "base_rate": 500.0,
        "regions_served": ["Cape Town"],
        "dietary_specialties": ["Halal"]
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn verify_returns_the_token_owner() {
    let app = TestApp::new().await;
    let (token, customer_id) = app.register_customer("owner@example.com").await;

    let response = app.get("/api/v1/auth/verify", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["id"], customer_id.as_str());
    assert_eq!(body["role"], "customer");
}

#[tokio::test]
async fn verify_without_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.get("/api/v1/auth/verify", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
