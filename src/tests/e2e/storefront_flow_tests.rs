use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::fs;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::seed::demo_catalog;
use crate::shared::infrastructure::navigation::Route;
use crate::shell::http::router;
use crate::tests::fixtures::app_state::{make_test_state, today};

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

async fn send(app: &Router, method: &str, uri: &str, user: Option<&str>, body: Option<String>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        request = request.header("x-user-id", user);
    }
    let body = match body {
        Some(body) => {
            request = request.header("content-type", "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
}

async fn json_of(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn attendees(app: &Router, id: u64) -> Value {
    let response = send(app, "GET", &format!("/events/{id}"), None, None).await;
    json_of(response).await["attendee_count"].clone()
}

#[tokio::test]
async fn registers_and_cancels_on_the_workshop() {
    let (state, _) = make_test_state(demo_catalog(today()).unwrap());
    let app = router(state);

    let found = json_of(send(&app, "GET", "/events?q=web", None, None).await).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["id"], 1);
    assert_eq!(attendees(&app, 1).await, 42);

    let response = send(&app, "POST", "/events/1/registration", Some(ALICE), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_of(response).await["state"], "registered");
    assert_eq!(attendees(&app, 1).await, 43);

    let response = send(&app, "DELETE", "/events/1/registration", Some(ALICE), None).await;
    assert_eq!(json_of(response).await["state"], "none");
    assert_eq!(attendees(&app, 1).await, 42);

    send(&app, "POST", "/events/1/registration", Some(ALICE), None).await;
    assert_eq!(attendees(&app, 1).await, 43);
}

#[tokio::test]
async fn stops_registrations_at_capacity() {
    let (state, _) = make_test_state(demo_catalog(today()).unwrap());
    let app = router(state);

    for n in 0..8 {
        let user = format!("user-{n}@example.com");
        let response = send(&app, "POST", "/events/1/registration", Some(&user), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(attendees(&app, 1).await, 50);

    let response = send(&app, "POST", "/events/1/registration", Some(ALICE), None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(attendees(&app, 1).await, 50);

    let detail = json_of(send(&app, "GET", "/events/1", None, None).await).await;
    assert_eq!(detail["spots_left"], 0);
    assert_eq!(detail["is_full"], true);
}

#[tokio::test]
async fn creates_shows_and_deletes_an_owned_event() {
    let (state, navigator) = make_test_state(demo_catalog(today()).unwrap());
    let app = router(state);
    let draft = fs::read_to_string("./src/tests/fixtures/json/event_draft.json").unwrap();

    let response = send(&app, "POST", "/events", Some(ALICE), Some(draft)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_of(response).await;
    let id = created["data"]["id"].as_u64().unwrap();
    assert_eq!(id, 8);
    assert_eq!(created["redirect_to"], "/dashboard");
    assert_eq!(navigator.visited().await, vec![Route::dashboard()]);

    send(&app, "POST", &format!("/events/{id}/registration"), Some(BOB), None).await;
    let response = send(&app, "POST", "/events/7/registration", Some(BOB), None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let dashboard = json_of(send(&app, "GET", "/dashboard", Some(ALICE), None).await).await;
    assert_eq!(dashboard["organizing"][0]["id"], id);
    assert_eq!(dashboard["registered"], json!([]));

    let response = send(&app, "DELETE", &format!("/events/{id}"), Some(BOB), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let catalog = json_of(send(&app, "GET", "/events", None, None).await).await;
    assert_eq!(catalog.as_array().unwrap().len(), 8);

    let response = send(&app, "DELETE", &format!("/events/{id}"), Some(ALICE), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, "GET", &format!("/events/{id}"), None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let registration = json_of(
        send(&app, "GET", &format!("/events/{id}/registration"), Some(BOB), None).await,
    )
    .await;
    assert_eq!(registration["state"], "none");

    let dashboard = json_of(send(&app, "GET", "/dashboard", Some(BOB), None).await).await;
    assert_eq!(dashboard["registered"], json!([]));
    assert_eq!(dashboard["past"], json!([]));
}

#[tokio::test]
async fn refuses_an_invalid_draft_without_navigating() {
    let (state, navigator) = make_test_state(demo_catalog(today()).unwrap());
    let app = router(state);

    let body = json!({ "title": "  ", "category": "design" }).to_string();
    let response = send(&app, "POST", "/events", Some(ALICE), Some(body)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_of(response).await["error"],
        "validation failed: title is required"
    );
    assert!(navigator.visited().await.is_empty());
    let catalog = json_of(send(&app, "GET", "/events", None, None).await).await;
    assert_eq!(catalog.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn logs_in_and_uses_the_session_user_for_the_dashboard() {
    let (state, _) = make_test_state(demo_catalog(today()).unwrap());
    let app = router(state);

    let body = json!({ "email": "Alice@Example.com", "password": "secret" }).to_string();
    let session = json_of(send(&app, "POST", "/login", None, Some(body)).await).await;
    let user = session["data"]["user_id"].as_str().unwrap().to_string();
    assert_eq!(user, ALICE);

    send(&app, "POST", "/events/2/registration", Some(&user), None).await;
    let dashboard = json_of(send(&app, "GET", "/dashboard", Some(&user), None).await).await;
    assert_eq!(dashboard["registered"][0]["title"], "Design Systems Conference");
}
