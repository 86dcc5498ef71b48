//! End-to-end tests for the REST API.
//!
//! Requests are driven through the axum router in-process; no socket is bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

mod support;

use support::{empty_app, result_body, seeded_app, send, send_request};

// =========================================================
// Listing
// =========================================================

#[tokio::test]
async fn test_list_envelope() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/results", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 3);
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_list_with_query_filters() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/results?studentId=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (_, body) = send(&app, Method::GET, "/results?studentId=2&subjectId=1&examType=midterm", None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["grade"], "A+");

    let (status, body) = send(&app, Method::GET, "/results?examType=final", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(&app, Method::GET, "/results?studentId=&subjectId=", None).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_api_prefix_serves_same_routes() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/results/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["grade"], "B+");
}

// =========================================================
// Create
// =========================================================

#[tokio::test]
async fn test_create_returns_201_with_computed_grade() {
    let app = empty_app();
    let mut payload = result_body("7", "3", 42.0, 70.0);
    payload["percentage"] = json!(100);
    payload["grade"] = json!("A+");
    payload["remarks"] = json!("  retake  ");

    let (status, body) = send(&app, Method::POST, "/results", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["id"], "1");
    assert_eq!(data["studentId"], "7");
    assert_eq!(data["examType"], "midterm");
    assert_eq!(data["percentage"], 60.0);
    assert_eq!(data["grade"], "B");
    assert_eq!(data["examDate"], "2024-03-15");
    assert_eq!(data["remarks"], "retake");
    assert!(data["createdAt"].is_string());

    let (status, fetched) = send(&app, Method::GET, "/results/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn test_create_missing_field_is_400() {
    let app = empty_app();
    let mut payload = result_body("1", "1", 50.0, 100.0);
    payload.as_object_mut().unwrap().remove("examDate");

    let (status, body) = send(&app, Method::POST, "/results", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "examDate is required");
}

#[tokio::test]
async fn test_create_bad_values_are_400() {
    let app = empty_app();
    let cases = [
        ("examType", json!("oral")),
        ("marksObtained", json!(-3)),
        ("maxMarks", json!(0)),
        ("semester", json!(42)),
    ];
    for (field, value) in cases {
        let mut payload = result_body("1", "1", 50.0, 100.0);
        payload[field] = value;
        let (status, body) = send(&app, Method::POST, "/results", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", field);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains(field), "{}", body["message"]);
    }

    let (_, list) = send(&app, Method::GET, "/results", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_create_overflowing_percentage_is_400() {
    let app = empty_app();
    for (marks, max) in [(1.0e307, 0.5), (1.0, 1e-308)] {
        let payload = result_body("1", "1", marks, max);
        let (status, body) = send(&app, Method::POST, "/results", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}/{}", marks, max);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("marksObtained"), "{}", body["message"]);
    }

    let (_, list) = send(&app, Method::GET, "/results", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_update_overflowing_percentage_is_400() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/results/1",
        Some(json!({"maxMarks": 1e-308})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("marksObtained"));

    let (_, fetched) = send(&app, Method::GET, "/results/1", None).await;
    assert_eq!(fetched["data"]["maxMarks"], 100.0);
    assert_eq!(fetched["data"]["percentage"], 85.0);
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let app = empty_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/results")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"studentId\": "))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

// =========================================================
// Read / Update / Delete
// =========================================================

#[tokio::test]
async fn test_get_unknown_ids_are_404() {
    let app = seeded_app();
    for uri in ["/results/99", "/results/abc", "/results/+01", "/results/01"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, json!({"success": false, "message": "Result not found"}));
    }
}

#[tokio::test]
async fn test_update_partial_and_regrade() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/results/1",
        Some(json!({"marksObtained": 45, "maxMarks": 50, "enteredBy": "teacher"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["id"], "1");
    assert_eq!(data["percentage"], 90.0);
    assert_eq!(data["grade"], "A+");
    assert_eq!(data["studentId"], "1");
    assert_eq!(data["subjectId"], "1");
    assert_eq!(data["academicYear"], "2024-25");
    assert!(data.get("enteredBy").is_none());
}

#[tokio::test]
async fn test_update_unknown_is_404() {
    let app = empty_app();
    let (status, body) = send(&app, Method::PUT, "/results/1", Some(json!({"semester": 2}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Result not found");
}

#[tokio::test]
async fn test_update_invalid_patch_is_400() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::PUT, "/results/1", Some(json!({"semester": "two"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "semester must be an integer");
}

#[tokio::test]
async fn test_delete_flow() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::DELETE, "/results/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Result deleted successfully"})
    );

    let (status, _) = send(&app, Method::GET, "/results/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/results/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A new record after the delete gets a fresh id.
    let (status, created) = send(
        &app,
        Method::POST,
        "/results",
        Some(result_body("3", "2", 10.0, 100.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["id"], "4");

    let (_, list) = send(&app, Method::GET, "/results", None).await;
    assert_eq!(list["total"], 3);
}

// =========================================================
// Misc
// =========================================================

#[tokio::test]
async fn test_health() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());

    let (status, _) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
