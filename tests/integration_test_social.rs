mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn completed_booking(app: &TestApp, customer_token: &str, chef_token: &str, chef_id: &str, date: &str) {
    let response = app.post("/api/v1/bookings", Some(customer_token), json!({
        "chef_id": chef_id,
        "event_date": date,
        "event_time": "18:00",
        "party_size": 2,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let booking_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    for status in ["confirmed", "completed"] {
        let response = app.put(
            &format!("/api/v1/bookings/{booking_id}/status"),
            Some(chef_token),
            json!({"status": status}),
        ).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn review_requires_a_completed_booking() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.post("/api/v1/reviews", Some(&customer_token), json!({
        "chef_id": chef_id,
        "rating": 5,
        "comment": "Wonderful evening"
    })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn review_updates_the_chef_aggregate() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (chef_token, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    completed_booking(&app, &customer_token, &chef_token, &chef_id, "2031-06-10").await;

    let response = app.post("/api/v1/reviews", Some(&customer_token), json!({
        "chef_id": chef_id,
        "rating": 4,
        "comment": "Great food, slightly late"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}"), None).await).await;
    assert_eq!(body["total_reviews"], 1);
    // Still below the display threshold.
    assert_eq!(body["display_rating"], false);

    let body = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}/reviews"), None).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["rating"], 4);
}

#[tokio::test]
async fn one_review_per_customer_per_chef() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (chef_token, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    completed_booking(&app, &customer_token, &chef_token, &chef_id, "2031-06-10").await;

    let payload = json!({"chef_id": chef_id, "rating": 5});
    let response = app.post("/api/v1/reviews", Some(&customer_token), payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.post("/api/v1/reviews", Some(&customer_token), payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rating_must_be_one_to_five() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (chef_token, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    completed_booking(&app, &customer_token, &chef_token, &chef_id, "2031-06-10").await;

    for rating in [0, 6] {
        let response = app.post("/api/v1/reviews", Some(&customer_token), json!({
            "chef_id": chef_id,
            "rating": rating
        })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "rating {rating}");
    }
}

#[tokio::test]
async fn booking_opens_a_chat_between_the_parties() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (chef_token, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.post("/api/v1/bookings", Some(&customer_token), json!({
        "chef_id": chef_id,
        "event_date": "2031-06-10",
        "event_time": "18:00",
        "party_size": 2,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let chats = parse_body(app.get("/api/v1/chats", Some(&customer_token)).await).await;
    assert_eq!(chats.as_array().unwrap().len(), 1);
    let chat_id = chats[0]["id"].as_str().unwrap().to_string();

    // Both sides see the same thread.
    let chats = parse_body(app.get("/api/v1/chats", Some(&chef_token)).await).await;
    assert_eq!(chats[0]["id"], chat_id.as_str());

    let response = app.post(&format!("/api/v1/chats/{chat_id}/messages"), Some(&customer_token), json!({
        "content": "Hi chef, any allergies I should mention upfront?"
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let messages = parse_body(app.get(&format!("/api/v1/chats/{chat_id}/messages"), Some(&chef_token)).await).await;
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["sender_role"], "customer");
}

#[tokio::test]
async fn outsiders_cannot_read_a_chat() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;
    let (_, chef_id) = app.verified_chef("chef@example.com", 500.0).await;
    let (outsider_token, _) = app.register_customer("outsider@example.com").await;

    app.post("/api/v1/bookings", Some(&customer_token), json!({
        "chef_id": chef_id,
        "event_date": "2031-06-10",
        "event_time": "18:00",
        "party_size": 2,
        "event_address": "12 Kloof Street, Gardens, Cape Town"
    })).await;

    let chats = parse_body(app.get("/api/v1/chats", Some(&customer_token)).await).await;
    let chat_id = chats[0]["id"].as_str().unwrap();

    let response = app.get(&format!("/api/v1/chats/{chat_id}/messages"), Some(&outsider_token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn chef_publishes_and_deletes_posts() {
    let app = TestApp::new().await;
    let (chef_token, chef_id) = app.verified_chef("chef@example.com", 500.0).await;

    let response = app.post("/api/v1/posts", Some(&chef_token), json!({
        "content": "Tonight's tasting menu: snoek pate, bobotie, malva pudding.",
        "tags": ["capemalay", "tastingmenu"]
    })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let post_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let posts = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}/posts"), None).await).await;
    assert_eq!(posts.as_array().unwrap().len(), 1);
    assert_eq!(posts[0]["tags"][0], "capemalay");

    let response = app.delete(&format!("/api/v1/posts/{post_id}"), Some(&chef_token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let posts = parse_body(app.get(&format!("/api/v1/chefs/{chef_id}/posts"), None).await).await;
    assert!(posts.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn customers_cannot_publish_posts() {
    let app = TestApp::new().await;
    let (customer_token, _) = app.register_customer("diner@example.com").await;

    let response = app.post("/api/v1/posts", Some(&customer_token), json!({
        "content": "I am not a chef"
    })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
