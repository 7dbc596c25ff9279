use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rand::rngs::OsRng;
use serde_json::{json, Value};
use summit_ai::AdvisorConfig;
use summit_server::{api::app_router, build_state, config::Config};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_config(tmp: &TempDir, auth: Option<summit_server::config::AuthConfig>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_str().unwrap().to_string(),
        static_dir: tmp.path().to_str().unwrap().to_string(),
        session_secret: "test-secret-key".to_string(),
        auth,
        advisor: AdvisorConfig::default(),
        checkout_url: None,
    }
}

async fn build_open_router() -> (TempDir, Router) {
    let tmp = TempDir::new().unwrap();
    let config = test_config(&tmp, None);
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state))
}

fn request(method: Method, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn login_and_access_protected_route() {
    let password = "super-secret";
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string();

    let tmp = TempDir::new().unwrap();
    let config = test_config(
        &tmp,
        Some(summit_server::config::AuthConfig {
            email: "owner@example.com".to_string(),
            password_hash,
        }),
    );
    let state = build_state(&config).await.unwrap();
    let app = app_router(state);

    // Unauthorized request should fail
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/goals", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Auth status reflects requirement
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/auth/status", None, None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({ "required": true }));

    // Wrong password is rejected
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "email": "owner@example.com", "password": "nope" })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct credentials yield a working session token
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "email": "owner@example.com", "password": password })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    let token = login["token"].as_str().unwrap().to_string();
    assert_eq!(login["userId"], "owner@example.com");

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/goals", None, Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn goal_hierarchy_round_trip() {
    let (_tmp, app) = build_open_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/goals",
            Some(json!({
                "title": "Run a marathon",
                "priority": "high",
                "impact": 90,
                "goalType": "lifetime"
            })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parent = body_json(response).await;
    let parent_id = parent["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/goals",
            Some(json!({
                "title": "Run 10k without stopping",
                "priority": "medium",
                "impact": 60,
                "goalType": "medium-term",
                "parentGoalId": parent_id
            })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/goals/hierarchy", None, None))
        .await
        .unwrap();
    let forest = body_json(response).await;
    let roots = forest.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "Run a marathon");
    assert_eq!(roots[0]["children"][0]["title"], "Run 10k without stopping");
}

#[tokio::test]
async fn validation_errors_are_bad_requests() {
    let (_tmp, app) = build_open_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/goals",
            Some(json!({
                "title": "Bad",
                "priority": "urgent",
                "impact": 50,
                "goalType": "daily"
            })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("priority"));
}

#[tokio::test]
async fn completing_a_task_updates_dashboard_and_streak() {
    let (_tmp, app) = build_open_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/tasks",
            Some(json!({
                "title": "Stretch",
                "estimatedTime": 10,
                "impactScore": 30,
                "priority": "low"
            })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let task = body_json(response).await;
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["completed"], false);

    let response = app
        .clone()
        .oneshot(request(
            Method::PATCH,
            &format!("/api/v1/tasks/{}/status", task_id),
            Some(json!({ "completed": true })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["inProgress"], false);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/dashboard", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dashboard = body_json(response).await;
    assert_eq!(dashboard["completionRate"], 100.0);
    assert_eq!(dashboard["streak"]["current"], 1);
    assert_eq!(dashboard["tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn ranked_tasks_order_by_priority_then_impact() {
    let (_tmp, app) = build_open_router().await;

    for (title, priority, impact) in [
        ("quick win", "medium", 99),
        ("big rock", "high", 50),
        ("sharpen saw", "high", 80),
    ] {
        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/v1/tasks",
                Some(json!({
                    "title": title,
                    "estimatedTime": 20,
                    "impactScore": impact,
                    "priority": priority
                })),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/tasks/ranked", None, None))
        .await
        .unwrap();
    let ranked = body_json(response).await;
    let titles: Vec<&str> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["sharpen saw", "big rock", "quick win"]);
}

#[tokio::test]
async fn checkout_without_configuration_is_rejected() {
    let (_tmp, app) = build_open_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/checkout",
            Some(json!({ "priceId": "price_123", "customerEmail": "a@b.c" })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
