//! Decoding failures returned by upstream services
//!
//! A service running the same pipeline answers failures with the normalized
//! payload. Turning that body back into [`ServiceFault::Upstream`] lets the
//! caller pass the origin's translation through untouched.

use reqwest::{Response, StatusCode};

use rexh_core::errors::{RemoteServiceError, ServiceFault};

/// Pass successful responses through; convert failures into a [`ServiceFault`]
pub async fn into_service_result(response: Response) -> Result<Response, ServiceFault> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.bytes().await.map_err(ServiceFault::unknown)?;

    tracing::warn!(url = %url, status = %status, "Upstream service answered with a failure");
    Err(decode_failure(status, &body))
}

/// Interpret a non-success upstream body
pub fn decode_failure(status: StatusCode, body: &[u8]) -> ServiceFault {
    match serde_json::from_slice::<RemoteServiceError>(body) {
        Ok(remote) if !remote.code.is_empty() => ServiceFault::Upstream(remote),
        _ => ServiceFault::unknown(anyhow::anyhow!(
            "Upstream service failed with status {} and an unrecognized body",
            status
        )),
    }
}
