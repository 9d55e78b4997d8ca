#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use boarding_sequencer::server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "boarding-sequencer-test-boundary";

fn upload_request(field_name: &str, contents: &str) -> Request<Body> {
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"manifest.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {contents}\r\n\
         --{boundary}--\r\n",
        boundary = BOUNDARY,
        field = field_name,
        contents = contents,
    );

    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_generate_returns_ordered_bookings() {
    let (status, body) = send(upload_request(
        "file",
        "Booking_ID,Seats\nB2,C20\nB1,\"A1,B1\"\nB3,10B",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"booking_id": "B1", "seats": "A1,B1"},
            {"booking_id": "B2", "seats": "C20"},
            {"booking_id": "B3", "seats": "10B"},
        ])
    );
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let (status, body) = send(upload_request("attachment", "Booking_ID,Seats\nB1,1A")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file uploaded."}));
}

#[tokio::test]
async fn test_non_multipart_request_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("Booking_ID,Seats\nB1,1A"))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file uploaded."}));
}

#[tokio::test]
async fn test_empty_manifest_is_client_error() {
    let (status, body) = send(upload_request("file", "Booking_ID,Seats")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "CSV file is empty or invalid."}));
}

#[tokio::test]
async fn test_duplicate_seat_names_token() {
    let (status, body) = send(upload_request("file", "Booking_ID,Seats\nB1,7A\nB2,A7")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Duplicate seat assignment found: Seat \"A7\" is assigned to multiple bookings."})
    );
}

#[tokio::test]
async fn test_missing_column_is_client_error() {
    let (status, body) = send(upload_request("file", "Booking_ID\nB1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "CSV must have 'Booking_ID' and 'Seats' columns."})
    );
}
