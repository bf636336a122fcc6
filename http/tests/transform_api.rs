use hex_http::*;
use hex_transform::*;

use actix_web::{test, App};
use actix_web::http::StatusCode;
use serde_json::{json, Value};

#[actix_rt::test]
async fn translate_moves_a_supplied_shape() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "translate",
            "params":   { "dx": 10.0, "dy": -5.0 },
            "shape":    [[350.0, 200.0], [250.0, 150.0], [300.0, 250.0], [350.0, 220.0], [400.0, 250.0], [450.0, 150.0]]
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;

    assert!(body.shape == Shape(vec![
        Point2(360.0, 195.0),
        Point2(260.0, 145.0),
        Point2(310.0, 245.0),
        Point2(360.0, 215.0),
        Point2(410.0, 245.0),
        Point2(460.0, 145.0)
    ]));
}

#[actix_rt::test]
async fn missing_shape_starts_from_the_original() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "translate",
            "params":   { "dx": 0.0, "dy": 0.0 }
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;

    assert!(body.shape == original_shape());
}

#[actix_rt::test]
async fn rotate_quarter_turn_about_the_origin() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "rotate",
            "params":   { "angle": 90.0, "cx": 0.0, "cy": 0.0 },
            "shape":    [[10.0, 0.0]]
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;
    let Point2(x, y) = body.shape.0[0];

    assert!(f64::abs(x - 0.0) < 1e-9);
    assert!(f64::abs(y - 10.0) < 1e-9);
}

#[actix_rt::test]
async fn scale_about_the_origin_multiplies_components() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "scale",
            "params":   { "kx": 2.0, "ky": 0.5, "cx": 0.0, "cy": 0.0 },
            "shape":    [[4.0, 4.0]]
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;

    assert!(body.shape == Shape(vec![Point2(8.0, 2.0)]));
}

#[actix_rt::test]
async fn empty_shape_transforms_to_an_empty_shape() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "rotate",
            "params":   { "angle": 45.0, "cx": 0.0, "cy": 0.0 },
            "shape":    []
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;

    assert!(body.shape == Shape(vec![]));
}

#[actix_rt::test]
async fn unknown_op_is_a_bad_request() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "shear",
            "params":   { "kx": 1.0 }
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;

    assert!(body.get("error").is_some());
}

#[actix_rt::test]
async fn missing_parameters_are_a_bad_request() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .set_json(&json!({
            "op":       "translate",
            "params":   { "dx": 10.0 }
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;

    assert!(body.get("error").is_some());
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request = test::TestRequest::post()
        .uri("/api/transform")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;

    assert!(body.get("error").is_some());
}

#[actix_rt::test]
async fn overflowing_parameters_are_a_bad_request() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    // 1e999 overflows to an infinite f64 when the JSON is parsed
    let request = test::TestRequest::post()
        .uri("/api/transform")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{ "op": "translate", "params": { "dx": 1e999, "dy": 0.0 } }"#)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;

    assert!(body.get("error").is_some());
}

#[actix_rt::test]
async fn can_fetch_the_original_shape() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request     = test::TestRequest::get().uri("/api/shape").to_request();
    let response    = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let body: TransformResponse = test::read_body_json(response).await;

    assert!(body.shape == original_shape());
}

#[actix_rt::test]
async fn wrong_method_is_not_allowed() {
    let app = test::init_service(App::new().configure(transform_handler)).await;

    let request     = test::TestRequest::get().uri("/api/transform").to_request();
    let response    = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_rt::test]
async fn front_page_is_served_at_the_root() {
    let app = test::init_service(App::new().configure(static_file_handler)).await;

    let request     = test::TestRequest::get().uri("/").to_request();
    let response    = test::call_service(&app, request).await;

    assert!(response.status() == StatusCode::OK);

    let content_type = response.headers().get("content-type").and_then(|value| value.to_str().ok());

    assert!(content_type == Some("text/html; charset=utf-8"));
}
