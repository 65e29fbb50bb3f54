//! Request details needed to normalize a failure

use actix_web::{http::header, HttpMessage, HttpRequest};
use uuid::Uuid;

use rexh_core::domain::RequestContext;
use rexh_shared::Locale;

/// Inbound correlation header
pub const REQUEST_ID_HEADER: &str = "RequestId";

/// Shorter inbound ids are replaced by a generated one
pub const MIN_REQUEST_ID_LEN: usize = 8;

/// Correlation id from the `RequestId` header, or a fresh one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| id.chars().count() >= MIN_REQUEST_ID_LEN)
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Uppercase locale from `Accept-Language`, or `fallback`
pub fn locale(req: &HttpRequest, fallback: &Locale) -> Locale {
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    Locale::from_accept_language(accept_language, fallback)
}

/// Peer address of the caller, for logs only
pub fn client_ip(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Build and look up the [`RequestContext`] of a request
pub trait RequestContextExt {
    /// Extract a new context from the request headers
    fn extract_context(&self, fallback_locale: &Locale) -> RequestContext;

    /// Context stored by the exception handler middleware
    fn request_context(&self) -> Option<RequestContext>;
}

impl RequestContextExt for HttpRequest {
    fn extract_context(&self, fallback_locale: &Locale) -> RequestContext {
        RequestContext::new(request_id(self), client_ip(self), locale(self, fallback_locale))
    }

    fn request_context(&self) -> Option<RequestContext> {
        self.extensions().get::<RequestContext>().cloned()
    }
}
