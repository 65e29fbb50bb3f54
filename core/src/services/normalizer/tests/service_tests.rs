//! Unit tests for the four normalization paths

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use rexh_shared::Locale;

use crate::domain::value_objects::{DefaultPolicy, RequestContext};
use crate::errors::{FailureKind, FieldViolation, RemoteServiceError, ServiceFailure, ServiceFault};
use crate::repositories::MockTranslationStore;
use crate::services::normalizer::{
    FailureEvent, FailureLogger, FailureStatus, ResponseNormalizer,
};

const DEFAULT_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    kind: FailureKind,
    request_id: String,
    code: String,
    has_cause: bool,
}

#[derive(Default)]
struct RecordingLogger {
    events: Mutex<Vec<Recorded>>,
}

impl FailureLogger for RecordingLogger {
    fn failure_handled(&self, event: &FailureEvent<'_>) {
        self.events.lock().unwrap().push(Recorded {
            kind: event.kind,
            request_id: event.request_id.to_string(),
            code: event.code.to_string(),
            has_cause: event.cause.is_some(),
        });
    }
}

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

fn normalizer(store: &MockTranslationStore) -> (ResponseNormalizer, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let policy = DefaultPolicy::new("DEFAULT_CODE", "DEFAULT_MODULE", DEFAULT_MESSAGE).unwrap();
    let normalizer = ResponseNormalizer::new(Arc::new(store.clone()), policy, "ORD")
        .with_logger(logger.clone());
    (normalizer, logger)
}

fn context() -> RequestContext {
    RequestContext::new("req-12345678", "10.0.0.7", Locale::new("en"))
}

#[tokio::test]
async fn test_domain_failure_is_translated() {
    let store = MockTranslationStore::new()
        .with_entry("ORD", "ORDER", "404", "EN", "Item ''{0}'' not found");
    let (normalizer, logger) = normalizer(&store);

    let fault = ServiceFault::from(OrderFailure::ItemNotFound.exception_with(["Widget"]));
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status, FailureStatus::ExpectationFailed);
    assert_eq!(response.status.as_u16(), 417);
    assert_eq!(response.body.code, "404");
    assert_eq!(response.body.desc, "Item 'Widget' not found");
    assert_eq!(response.body.module, "ORDER");
    assert_eq!(response.body.api, "ORD");
    assert!(response.body.errors.is_empty());

    let events = logger.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, FailureKind::Domain);
    assert_eq!(events[0].request_id, "req-12345678");
    assert!(!events[0].has_cause);
}

#[tokio::test]
async fn test_domain_failure_falls_back_to_default_entry() {
    let store = MockTranslationStore::new().with_entry(
        "ORD",
        "DEFAULT_MODULE",
        "DEFAULT_CODE",
        "EN",
        "Unexpected error in {0}",
    );
    let (normalizer, _) = normalizer(&store);

    let fault = ServiceFault::from(OrderFailure::ItemNotFound.exception_with(["Widget"]));
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status.as_u16(), 417);
    assert_eq!(response.body.code, "ND_404");
    assert_eq!(response.body.desc, "Unexpected error in ORD");
}

#[tokio::test]
async fn test_domain_failure_with_empty_store_uses_static_message() {
    let store = MockTranslationStore::new();
    let (normalizer, _) = normalizer(&store);

    let fault = ServiceFault::from(OrderFailure::ItemNotFound.exception());
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.body.code, "404");
    assert_eq!(response.body.desc, DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_upstream_failure_passes_through() {
    let store = MockTranslationStore::new()
        .with_entry("BILLING", "PAYMENT", "402", "EN", "Should never be used");
    let (normalizer, logger) = normalizer(&store);
    let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let fault = ServiceFault::from(RemoteServiceError::new(
        "402",
        "Payment declined",
        "BILLING",
        "PAYMENT",
        Some(stamp),
    ));
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status.as_u16(), 417);
    assert_eq!(response.body.code, "402");
    assert_eq!(response.body.desc, "Payment declined");
    assert_eq!(response.body.api, "BILLING");
    assert_eq!(response.body.module, "PAYMENT");
    assert_eq!(response.body.time_stamp, stamp);
    assert!(store.queried_keys().is_empty());
    assert_eq!(logger.events.lock().unwrap()[0].kind, FailureKind::Upstream);
}

#[tokio::test]
async fn test_upstream_failure_without_time_stamp_is_stamped_now() {
    let (normalizer, _) = normalizer(&MockTranslationStore::new());
    let before = Utc::now();

    let fault = ServiceFault::from(RemoteServiceError::new(
        "402",
        "Payment declined",
        "BILLING",
        "PAYMENT",
        None,
    ));
    let response = normalizer.normalize(&fault, &context()).await;

    assert!(response.body.time_stamp >= before);
    assert!(response.body.time_stamp <= Utc::now());
}

#[tokio::test]
async fn test_unknown_failure_hides_the_cause() {
    let store = MockTranslationStore::new().with_entry(
        "ORD",
        "DEFAULT_MODULE",
        "DEFAULT_CODE",
        "EN",
        "Unexpected error in {0}",
    );
    let (normalizer, logger) = normalizer(&store);

    let fault = ServiceFault::unknown(anyhow::anyhow!("connection refused by 10.1.2.3"));
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status, FailureStatus::InternalServerError);
    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.body.code, "DEFAULT_CODE");
    assert_eq!(response.body.module, "DEFAULT_MODULE");
    assert_eq!(response.body.api, "ORD");
    assert_eq!(response.body.desc, "Unexpected error in ORD");
    assert!(!response.body.desc.contains("10.1.2.3"));

    let queried = store.queried_keys();
    assert_eq!(queried.len(), 1);
    assert_eq!(queried[0].code, "DEFAULT_CODE");

    let events = logger.events.lock().unwrap();
    assert_eq!(events[0].kind, FailureKind::Unknown);
    assert!(events[0].has_cause);
}

#[tokio::test]
async fn test_unknown_failure_with_empty_store() {
    let (normalizer, _) = normalizer(&MockTranslationStore::new());

    let fault = ServiceFault::unknown(anyhow::anyhow!("boom"));
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.body.code, "DEFAULT_CODE");
    assert_eq!(response.body.desc, DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_validation_failure_lists_every_field() {
    let store = MockTranslationStore::new().with_entry(
        "ORD",
        "Self",
        "999",
        "EN",
        "Request is not valid",
    );
    let (normalizer, logger) = normalizer(&store);

    let fault = ServiceFault::Validation(vec![
        FieldViolation::new("email", "must be a valid address"),
        FieldViolation::new("quantity", "must be positive"),
    ]);
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status, FailureStatus::BadRequest);
    assert_eq!(response.status.as_u16(), 400);
    assert_eq!(response.body.code, "999");
    assert_eq!(response.body.module, "Self");
    assert_eq!(response.body.api, "ORD");
    assert_eq!(response.body.desc, "Request is not valid");
    assert_eq!(
        response.body.errors,
        vec![
            "'email' field is wrong. must be a valid address".to_string(),
            "'quantity' field is wrong. must be positive".to_string(),
        ]
    );
    assert_eq!(logger.events.lock().unwrap()[0].code, "999");
}

#[tokio::test]
async fn test_validation_failure_without_sentinel_text_uses_default() {
    let store = MockTranslationStore::new().with_entry(
        "ORD",
        "DEFAULT_MODULE",
        "DEFAULT_CODE",
        "EN",
        "Unexpected error in {0}",
    );
    let (normalizer, _) = normalizer(&store);

    let fault = ServiceFault::Validation(vec![FieldViolation::new("name", "is required")]);
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.body.code, "999");
    assert_eq!(response.body.desc, "Unexpected error in ORD");
    assert_eq!(response.body.errors.len(), 1);
}

#[tokio::test]
async fn test_store_outage_never_escapes() {
    let store = MockTranslationStore::new();
    store.set_should_fail(true);
    let (normalizer, _) = normalizer(&store);

    let fault = ServiceFault::from(OrderFailure::ItemNotFound.exception());
    let response = normalizer.normalize(&fault, &context()).await;

    assert_eq!(response.status.as_u16(), 417);
    assert_eq!(response.body.code, "404");
    assert_eq!(response.body.desc, DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_concurrent_normalization_keeps_parameters_apart() {
    let store = MockTranslationStore::new()
        .with_entry("ORD", "ORDER", "404", "EN", "Item {0} not found");
    let (normalizer, _) = normalizer(&store);
    let normalizer = Arc::new(normalizer);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let normalizer = normalizer.clone();
            tokio::spawn(async move {
                let name = format!("item-{}", i);
                let fault =
                    ServiceFault::from(OrderFailure::ItemNotFound.exception_with([name.clone()]));
                let response = normalizer.normalize(&fault, &context()).await;
                (name, response.body.desc)
            })
        })
        .collect();

    for handle in handles {
        let (name, desc) = handle.await.unwrap();
        assert_eq!(desc, format!("Item {} not found", name));
    }
}
