//! HTTP contract tests for the mock colorize backend.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use actix_web::{test, web, App};
use chromify_server::server::{self, ServerConfig};

const BOUNDARY: &str = "----chromify-test-boundary";

fn test_config() -> web::Data<ServerConfig> {
    web::Data::new(ServerConfig {
        host: "127.0.0.1".to_owned(),
        port: 0,
        delay: Duration::ZERO,
    })
}

/// Assemble a single-part `multipart/form-data` body by hand.
fn multipart_body(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn root_reports_the_service_banner() {
    let app = test::init_service(App::new().app_data(test_config()).service(server::root)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Chromify colorization API is running."
    );
}

#[actix_web::test]
async fn colorize_echoes_bytes_and_content_type() {
    let app =
        test::init_service(App::new().app_data(test_config()).service(server::colorize)).await;

    let payload = b"\x89PNG\r\n\x1a\nnot-really-a-png";
    let req = multipart_request(
        "/colorize",
        multipart_body(server::IMAGE_FIELD, "input.png", "image/png", payload),
    )
    .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/png"
    );

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), payload);
}

#[actix_web::test]
async fn missing_image_field_is_a_bad_request() {
    let app =
        test::init_service(App::new().app_data(test_config()).service(server::colorize)).await;

    // A well-formed multipart body under the wrong field name.
    let req = multipart_request(
        "/colorize",
        multipart_body("attachment", "input.png", "image/png", b"data"),
    )
    .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No image provided");
}

#[actix_web::test]
async fn non_multipart_payload_is_an_error() {
    let app =
        test::init_service(App::new().app_data(test_config()).service(server::colorize)).await;

    let req = test::TestRequest::post()
        .uri("/colorize")
        .insert_header(("content-type", "application/json"))
        .set_payload("{}")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(
        resp.status().is_client_error() || resp.status().is_server_error(),
        "expected a failure status, got {}",
        resp.status()
    );
}

#[actix_web::test]
async fn extra_fields_are_ignored_and_first_image_wins() {
    let app =
        test::init_service(App::new().app_data(test_config()).service(server::colorize)).await;

    // Two parts: a stray field first, then the image.
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             hello\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{}\"; filename=\"a.gif\"\r\n\
             Content-Type: image/gif\r\n\r\n",
            server::IMAGE_FIELD
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"GIF89a-fake");
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let resp = test::call_service(&app, multipart_request("/colorize", body).to_request()).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/gif"
    );
    let echoed = test::read_body(resp).await;
    assert_eq!(echoed.as_ref(), b"GIF89a-fake");
}
