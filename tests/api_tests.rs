use animedex::config::Config;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let state = animedex::api::create_app_state_from_config(Config::default(), None)
        .await
        .expect("Failed to create app state");
    animedex::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_liveness() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/animes", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["title"], "Attack on Titan");
    assert_eq!(list[1]["id"], 2);
    assert_eq!(list[1]["title"], "My Hero Academia");

    let response = send(
        &app,
        "POST",
        "/animes",
        Some(json!({ "title": "Naruto", "episodes": 220 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["title"], "Naruto");
    assert_eq!(created["episodes"], 220);
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let response = send(&app, "GET", "/animes/3", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = send(&app, "PUT", "/animes/3", Some(json!({ "episodes": 0 }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["episodes"], 220);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    let response = send(&app, "DELETE", "/animes/2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/animes/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_replaces_truthy_fields() {
    let app = spawn_app().await;

    let response = send(
        &app,
        "PUT",
        "/animes/1",
        Some(json!({ "rating": 3.2, "studio": "", "title": null })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["rating"], 3.2);
    assert_eq!(updated["studio"], "MAPPA");
    assert_eq!(updated["title"], "Attack on Titan");
}

#[tokio::test]
async fn test_unknown_ids_return_not_found() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/animes/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "PUT", "/animes/99", Some(json!({ "title": "Ghost" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/animes/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/animes", None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_invalid_id_is_rejected() {
    let app = spawn_app().await;

    for uri in ["/animes/abc", "/animes/0", "/animes/-2", "/animes/1.5"] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }

    let response = send(&app, "DELETE", "/animes/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let app = spawn_app().await;

    let response = send(&app, "DELETE", "/animes/2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "POST", "/animes", Some(json!({ "title": "Bleach" }))).await;
    let created = body_json(response).await;
    assert_eq!(created["id"], 3);

    let response = send(&app, "DELETE", "/animes/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_fields() {
    let app = spawn_app().await;

    let response = send(&app, "POST", "/animes", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["id"], 3);
    assert!(created.get("title").is_none());
    assert!(created["createdAt"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = spawn_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/animes")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    let response = send(&app, "GET", "/animes", None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_store_when_seed_disabled() {
    let mut config = Config::default();
    config.general.seed_data = false;
    let state = animedex::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let app = animedex::api::router(state);

    let response = send(&app, "GET", "/animes", None).await;
    assert_eq!(body_json(response).await, json!([]));

    let response = send(&app, "POST", "/animes", Some(json!({ "title": "Mob Psycho 100" }))).await;
    assert_eq!(body_json(response).await["id"], 1);
}

#[tokio::test]
async fn test_trailing_slash_routes() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/animes/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = send(&app, "POST", "/animes/", Some(json!({ "title": "Haikyu!!" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 3);

    let response = send(&app, "GET", "/animes/3/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Haikyu!!");

    let response = send(&app, "DELETE", "/animes/3/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
