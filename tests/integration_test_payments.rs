mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn create_booking(app: &TestApp, customer_token: &str, chef_id: &str) -> String {
    let response = app.post("/api/v1/bookings", Some(customer_token), json!({
        "chef_id": chef_id,
        "event_date": "2031-06-10",
        "event_time": "18:00",
        "party_size": 4,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_body(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn successful_payment_confirms_the_booking() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let booking_id = create_booking(&app, &customer_token, &chef_id).await;

    let response = app.post("/api/v1/payments/create-intent", Some(&customer_token), json!({
        "booking_id": booking_id
    })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    let intent_id = body["payment_intent_id"].as_str().unwrap().to_string();
    assert!(body["client_secret"].as_str().is_some());

    let response = app.post("/api/v1/payments/confirm", Some(&customer_token), json!({
        "payment_intent_id": intent_id
    })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["status"], "confirmed");
}

#[tokio::test]
async fn failed_payment_leaves_the_booking_pending() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let booking_id = create_booking(&app, &customer_token, &chef_id).await;

    let response = app.post("/api/v1/payments/create-intent", Some(&customer_token), json!({
        "booking_id": booking_id
    })).await;
    let intent_id = parse_body(response).await["payment_intent_id"].as_str().unwrap().to_string();

    app.payment_service.set_status("requires_payment_method");
    let response = app.post("/api/v1/payments/confirm", Some(&customer_token), json!({
        "payment_intent_id": intent_id
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(app.get("/api/v1/bookings", Some(&customer_token)).await).await;
    assert_eq!(body[0]["status"], "pending");
}

#[tokio::test]
async fn confirm_is_idempotent() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let booking_id = create_booking(&app, &customer_token, &chef_id).await;

    let response = app.post("/api/v1/payments/create-intent", Some(&customer_token), json!({
        "booking_id": booking_id
    })).await;
    let intent_id = parse_body(response).await["payment_intent_id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = app.post("/api/v1/payments/confirm", Some(&customer_token), json!({
            "payment_intent_id": intent_id
        })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(parse_body(response).await["status"], "confirmed");
    }
}

#[tokio::test]
async fn only_the_booking_customer_can_pay() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (other_token, _) = app.register_customer("other@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let booking_id = create_booking(&app, &customer_token, &chef_id).await;

    let response = app.post("/api/v1/payments/create-intent", Some(&other_token), json!({
        "booking_id": booking_id
    })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cancelled_booking_cannot_open_an_intent() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let booking_id = create_booking(&app, &customer_token, &chef_id).await;

    app.put(
        &format!("/api/v1/bookings/{booking_id}/status"),
        Some(&customer_token),
        json!({"status": "cancelled"}),
    ).await;

    let response = app.post("/api/v1/payments/create-intent", Some(&customer_token), json!({
        "booking_id": booking_id
    })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
