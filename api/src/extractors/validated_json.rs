//! JSON body extractor that runs field validation

use std::ops::Deref;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

use rexh_core::errors::ServiceFault;

use crate::errors::ApiFault;

/// Deserialized and validated JSON body.
///
/// Constraint violations become a field validation failure; a body that cannot
/// be deserialized is an unknown failure.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = ApiFault;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let value = json
                .await
                .map_err(|e| ServiceFault::unknown(anyhow::anyhow!("Malformed request body: {}", e)))?
                .into_inner();

            value.validate().map_err(ServiceFault::from)?;
            Ok::<_, ApiFault>(ValidatedJson(value))
        })
    }
}
