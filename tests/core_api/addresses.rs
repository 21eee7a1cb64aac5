use super::*;
use crate::common::fixtures;
use crate::common::mocks::MockAddressRepo;
use actix_web::{http::StatusCode, test as actix_test, web, App};
use address_book::api::routes;
use serde_json::{json, Value};
use std::sync::Arc;

#[actix_rt::test]
async fn create_then_list_round_trips_every_field() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .set_json(fixtures::first_entry_json())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = actix_test::read_body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "A");
    assert_eq!(created["latitude"], 40.0);

    let request = actix_test::TestRequest::get().uri("/address/").to_request();
    let listed: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0], created);
}

#[actix_rt::test]
async fn create_with_missing_fields_lists_each_one() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .set_json(json!({ "name": "A", "address": "1 St", "phone": "555" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .expect("details should be an array")
        .iter()
        .filter_map(|detail| detail["field"].as_str())
        .collect();
    assert!(fields.contains(&"latitude"));
    assert!(fields.contains(&"longitude"));
    assert!(repo.snapshot().is_empty());
}

#[actix_rt::test]
async fn create_with_wrong_typed_field_is_rejected() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    for (field, value) in [
        ("latitude", json!("north")),
        ("name", json!(5)),
        ("phone", json!(true)),
    ] {
        let mut body = fixtures::first_entry_json();
        body[field] = value;
        let request = actix_test::TestRequest::post()
            .uri("/address/")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"][0]["field"], "body", "wrong type on {field}");
        assert_eq!(body["details"][0]["code"], "invalid_type");
    }
    assert!(repo.snapshot().is_empty());
}

#[actix_rt::test]
async fn create_with_oversized_body_is_payload_too_large() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let mut body = fixtures::first_entry_json();
    body["address"] = json!("x".repeat(3 * 1024 * 1024));
    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert!(repo.snapshot().is_empty());
}

#[actix_rt::test]
async fn create_with_malformed_json_is_rejected() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"][0]["field"], "body");
}

#[actix_rt::test]
async fn get_by_id_returns_entry_or_not_found() {
    let repo = Arc::new(MockAddressRepo::with_addresses(vec![fixtures::address(
        1, "A", 40.0, -73.0,
    )]));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo)))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::get().uri("/address/1").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::get().uri("/address/7").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn non_integer_id_is_a_validation_error() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo)))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::delete()
        .uri("/address/abc")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"][0]["field"], "path");
}

#[actix_rt::test]
async fn update_echoes_submission_and_replaces_stored_entry() {
    let repo = Arc::new(MockAddressRepo::with_addresses(vec![fixtures::address(
        1, "A", 40.0, -73.0,
    )]));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/address/1")
        .set_json(fixtures::second_entry_json())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "B");
    assert_eq!(repo.snapshot()[0].phone, "556");
}

#[actix_rt::test]
async fn update_and_delete_of_unknown_id_succeed_without_changes() {
    let repo = Arc::new(MockAddressRepo::with_addresses(vec![fixtures::address(
        1, "A", 40.0, -73.0,
    )]));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;
    let before = repo.snapshot();

    let request = actix_test::TestRequest::put()
        .uri("/address/99")
        .set_json(fixtures::second_entry_json())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 99);

    let request = actix_test::TestRequest::delete()
        .uri("/address/99")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!({ "id": 99 }));

    assert_eq!(repo.snapshot(), before);
}

#[actix_rt::test]
async fn strict_policy_reports_unknown_ids() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(strict_state(repo)))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/address/5")
        .set_json(fixtures::first_entry_json())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = actix_test::TestRequest::delete()
        .uri("/address/5")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "address 5 not found");
}

#[actix_rt::test]
async fn delete_returns_only_the_id() {
    let repo = Arc::new(MockAddressRepo::with_addresses(vec![
        fixtures::address(1, "A", 40.0, -73.0),
        fixtures::address(2, "B", 41.0, -74.0),
    ]));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(mock_state(repo.clone())))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::delete()
        .uri("/address/1")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body, json!({ "id": 1 }));
    let remaining = repo.snapshot();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

#[actix_rt::test]
async fn sqlite_backed_walkthrough_assigns_id_one() {
    let db = crate::common::TestDb::new().await;
    let repo = Arc::new(
        address_book::infrastructure::repositories::AddressRepositoryImpl::new(
            db.pool().clone(),
        ),
    );
    let state = crate::common::app_state(AddressService::new(repo), Some(db.pool().clone()));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .set_json(fixtures::first_entry_json())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(created["id"], 1);

    let request = actix_test::TestRequest::post()
        .uri("/address/")
        .set_json(fixtures::second_entry_json())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(created["id"], 2);

    let request = actix_test::TestRequest::get().uri("/address/").to_request();
    let listed: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}
