//! Per-request data the normalizer needs

use rexh_shared::Locale;

/// Request details extracted by the transport before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation id included in every log line for the request
    pub request_id: String,
    /// Remote address of the caller, for logs only
    pub client_ip: String,
    /// Uppercase language code used for translation lookups
    pub locale: Locale,
}

impl RequestContext {
    pub fn new(
        request_id: impl Into<String>,
        client_ip: impl Into<String>,
        locale: Locale,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            client_ip: client_ip.into(),
            locale,
        }
    }
}
