//! Integration tests for the exception handler middleware

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App, HttpRequest, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use rexh_api::{routes, ApiFault, ExceptionHandler, RequestContextExt, ValidatedJson, REQUEST_ID_HEADER};
use rexh_core::domain::DefaultPolicy;
use rexh_core::errors::{RemoteServiceError, ServiceFailure};
use rexh_core::repositories::MockTranslationStore;
use rexh_core::services::ResponseNormalizer;
use rexh_shared::{ExceptionOutput, Locale};

const DEFAULT_MESSAGE: &str = "An unexpected error occurred";

enum OrderFailure {
    ItemNotFound,
}

impl ServiceFailure for OrderFailure {
    fn code(&self) -> &str {
        "404"
    }

    fn desc(&self) -> &str {
        "Ordered item does not exist"
    }

    fn module(&self) -> &str {
        "ORDER"
    }

    fn api(&self) -> &str {
        "ORD"
    }
}

#[derive(Debug, Deserialize, Validate)]
struct CreateOrder {
    #[validate(length(min = 1, message = "must not be empty"))]
    item: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    quantity: u32,
}

async fn find_item(path: web::Path<String>) -> Result<HttpResponse, ApiFault> {
    let name = path.into_inner();
    OrderFailure::ItemNotFound
        .raise_with([name])
        .map_err(ApiFault::from)
}

async fn create_order(body: ValidatedJson<CreateOrder>) -> Result<HttpResponse, ApiFault> {
    Ok(HttpResponse::Created().json(serde_json::json!({ "item": body.item })))
}

async fn charge() -> Result<HttpResponse, ApiFault> {
    Err(RemoteServiceError::new("402", "Payment declined", "BILLING", "PAYMENT", None).into())
}

async fn crash() -> Result<HttpResponse, ApiFault> {
    Err(anyhow::anyhow!("database password leaked in message").into())
}

async fn echo_request_id(req: HttpRequest) -> HttpResponse {
    let ctx = req.request_context();
    HttpResponse::Ok().body(ctx.map(|c| c.request_id).unwrap_or_default())
}

fn store() -> MockTranslationStore {
    MockTranslationStore::new()
        .with_entry("ORD", "ORDER", "404", "EN", "Item ''{0}'' not found")
        .with_entry("ORD", "DEFAULT_MODULE", "DEFAULT_CODE", "TR", "{0} servisinde beklenmeyen hata")
        .with_entry("ORD", "Self", "999", "EN", "Request is not valid")
}

fn handler(store: MockTranslationStore) -> ExceptionHandler {
    let policy = DefaultPolicy::new("DEFAULT_CODE", "DEFAULT_MODULE", DEFAULT_MESSAGE).unwrap();
    let normalizer = ResponseNormalizer::new(Arc::new(store), policy, "ORD");
    ExceptionHandler::new(Arc::new(normalizer), Locale::new("tr"))
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .wrap(handler($store))
                .configure(routes::configure)
                .route("/items/{name}", web::get().to(find_item))
                .route("/orders", web::post().to(create_order))
                .route("/charge", web::post().to(charge))
                .route("/crash", web::get().to(crash))
                .route("/echo", web::get().to(echo_request_id)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_domain_failure_is_translated() {
    let app = app!(store());

    let req = test::TestRequest::get()
        .uri("/items/Widget")
        .insert_header(("Accept-Language", "en-US,en;q=0.9"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::EXPECTATION_FAILED);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "404");
    assert_eq!(body.desc, "Item 'Widget' not found");
    assert_eq!(body.module, "ORDER");
    assert_eq!(body.api, "ORD");
    assert!(body.errors.is_empty());
}

#[actix_web::test]
async fn test_missing_translation_uses_fallback_locale_default() {
    let app = app!(store());

    let req = test::TestRequest::get().uri("/items/Widget").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::EXPECTATION_FAILED);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "ND_404");
    assert_eq!(body.desc, "ORD servisinde beklenmeyen hata");
}

#[actix_web::test]
async fn test_validation_failure_lists_fields() {
    let app = app!(store());

    let req = test::TestRequest::post()
        .uri("/orders")
        .insert_header(("Accept-Language", "en"))
        .set_json(serde_json::json!({ "item": "", "quantity": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "999");
    assert_eq!(body.module, "Self");
    assert_eq!(body.desc, "Request is not valid");
    assert_eq!(
        body.errors,
        vec![
            "'item' field is wrong. must not be empty".to_string(),
            "'quantity' field is wrong. must be at least 1".to_string(),
        ]
    );
}

#[actix_web::test]
async fn test_valid_body_reaches_the_handler() {
    let app = app!(store());

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(serde_json::json!({ "item": "Widget", "quantity": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_malformed_body_is_unknown_failure() {
    let app = app!(store());

    let req = test::TestRequest::post()
        .uri("/orders")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "DEFAULT_CODE");
    assert_eq!(body.desc, "ORD servisinde beklenmeyen hata");
}

#[actix_web::test]
async fn test_upstream_failure_passes_through() {
    let app = app!(store());

    let req = test::TestRequest::post().uri("/charge").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::EXPECTATION_FAILED);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "402");
    assert_eq!(body.desc, "Payment declined");
    assert_eq!(body.api, "BILLING");
    assert_eq!(body.module, "PAYMENT");
}

#[actix_web::test]
async fn test_unknown_failure_hides_details() {
    let app = app!(MockTranslationStore::new());

    let req = test::TestRequest::get()
        .uri("/crash")
        .insert_header((REQUEST_ID_HEADER, "trace-0001-abcd"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers().get(REQUEST_ID_HEADER).unwrap(),
        "trace-0001-abcd"
    );
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "DEFAULT_CODE");
    assert_eq!(body.module, "DEFAULT_MODULE");
    assert_eq!(body.api, "ORD");
    assert_eq!(body.desc, DEFAULT_MESSAGE);
}

#[actix_web::test]
async fn test_store_outage_falls_back_to_static_message() {
    let store = store();
    store.set_should_fail(true);
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/items/Widget")
        .insert_header(("Accept-Language", "en"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::EXPECTATION_FAILED);
    let body: ExceptionOutput = test::read_body_json(resp).await;
    assert_eq!(body.code, "404");
    assert_eq!(body.desc, DEFAULT_MESSAGE);
}

#[actix_web::test]
async fn test_request_context_is_available_to_handlers() {
    let app = app!(store());

    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header((REQUEST_ID_HEADER, "abcdefgh"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "abcdefgh");

    let req = test::TestRequest::get().uri("/echo").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body.len(), 32);
}

#[actix_web::test]
async fn test_successful_responses_are_untouched() {
    let app = app!(store());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
