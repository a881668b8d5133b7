mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn free_day_offers_every_slot() {
    let app = TestApp::new().await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.get(&format!("/api/v1/chefs/{chef_id}/availability?date=2031-06-10"), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["date"], "2031-06-10");
    assert_eq!(
        body["available_times"].as_array().unwrap(),
        &vec![
            json!("10:00"), json!("12:00"), json!("14:00"), json!("16:00"),
            json!("18:00"), json!("20:00"), json!("22:00"),
        ]
    );
}

#[tokio::test]
async fn booked_slot_disappears_from_availability() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.post("/api/v1/bookings", Some(&customer_token), json!({
        "chef_id": chef_id,
        "event_date": "2031-06-10",
        "event_time": "14:00",
        "party_size": 2,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}/availability?date=2031-06-10"), None).await).await;
    let times: Vec<&str> = body["available_times"].as_array().unwrap()
        .iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(times.len(), 6);
    assert!(!times.contains(&"14:00"));
    assert!(times.contains(&"12:00"));
    assert!(times.contains(&"16:00"));
}

#[tokio::test]
async fn other_days_are_unaffected() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    app.post("/api/v1/bookings", Some(&customer_token), json!({
        "chef_id": chef_id,
        "event_date": "2031-06-10",
        "event_time": "14:00",
        "party_size": 2,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;

    let body = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}/availability?date=2031-06-11"), None).await).await;
    assert_eq!(body["available_times"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let app = TestApp::new().await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.get(&format!("/api/v1/chefs/{chef_id}/availability?date=10-06-2031"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
