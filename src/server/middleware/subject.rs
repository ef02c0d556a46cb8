//! Subject extraction middleware
//!
//! Turns the role header resolved by the upstream authenticator into an
//! [`AccessSubject`] stored in request extensions. Requests without a
//! parseable role simply carry no subject; the authorization guard
//! downstream denies them.

use crate::auth::AccessSubject;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::HttpMessage;
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

/// Middleware resolving the per-request access subject
pub struct SubjectExtractor {
    role_header: String,
}

impl SubjectExtractor {
    /// Create an extractor reading the given trusted header
    pub fn new(role_header: impl Into<String>) -> Self {
        Self {
            role_header: role_header.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SubjectExtractor
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SubjectExtractorService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SubjectExtractorService {
            service,
            role_header: self.role_header.clone(),
        }))
    }
}

/// Service implementation for subject extraction
pub struct SubjectExtractorService<S> {
    service: S,
    role_header: String,
}

impl<S, B> Service<ServiceRequest> for SubjectExtractorService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match AccessSubject::from_headers(req.headers(), &self.role_header) {
            Some(subject) => {
                debug!(role = %subject.role, "access subject resolved");
                req.extensions_mut().insert(subject);
            }
            None => {
                debug!("no access subject on request");
            }
        }

        Box::pin(self.service.call(req))
    }
}
