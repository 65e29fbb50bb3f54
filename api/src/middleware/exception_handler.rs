//! Middleware rendering every handler failure into the normalized payload

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use rexh_core::domain::RequestContext;
use rexh_core::errors::ServiceFault;
use rexh_core::services::ResponseNormalizer;
use rexh_shared::Locale;

use super::request_context::{RequestContextExt, REQUEST_ID_HEADER};
use crate::errors::ApiFault;

/// The single normalization boundary of the application.
///
/// Errors carrying an [`ApiFault`] are normalized by category; any other
/// error is treated as an unknown failure.
#[derive(Clone)]
pub struct ExceptionHandler {
    normalizer: Arc<ResponseNormalizer>,
    fallback_locale: Locale,
}

impl ExceptionHandler {
    pub fn new(normalizer: Arc<ResponseNormalizer>, fallback_locale: Locale) -> Self {
        Self {
            normalizer,
            fallback_locale,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ExceptionHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ExceptionHandlerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ExceptionHandlerService {
            service: Rc::new(service),
            normalizer: Arc::clone(&self.normalizer),
            fallback_locale: self.fallback_locale.clone(),
        }))
    }
}

pub struct ExceptionHandlerService<S> {
    service: Rc<S>,
    normalizer: Arc<ResponseNormalizer>,
    fallback_locale: Locale,
}

impl<S, B> Service<ServiceRequest> for ExceptionHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let normalizer = Arc::clone(&self.normalizer);

        let ctx = req.request().extract_context(&self.fallback_locale);
        req.extensions_mut().insert(ctx.clone());
        let http_req = req.request().clone();

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let (request, response) = res.into_parts();
                    match response.error() {
                        Some(err) => {
                            let rendered = render(&normalizer, err, &ctx).await;
                            Ok(ServiceResponse::new(request, rendered).map_into_right_body())
                        }
                        None => Ok(ServiceResponse::new(request, response).map_into_left_body()),
                    }
                }
                Err(err) => {
                    let rendered = render(&normalizer, &err, &ctx).await;
                    Ok(ServiceResponse::new(http_req, rendered).map_into_right_body())
                }
            }
        })
    }
}

async fn render(normalizer: &ResponseNormalizer, err: &Error, ctx: &RequestContext) -> HttpResponse {
    let normalized = match err.as_error::<ApiFault>() {
        Some(fault) => normalizer.normalize(fault.fault(), ctx).await,
        None => {
            let fault = ServiceFault::unknown(anyhow::anyhow!(
                "{} (status {})",
                err,
                err.as_response_error().status_code()
            ));
            normalizer.normalize(&fault, ctx).await
        }
    };

    let status = StatusCode::from_u16(normalized.status.as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, ctx.request_id.as_str()))
        .json(normalized.body)
}
