//! Authorization middleware
//!
//! Boundary guard for a route scope. Each guarded scope declares the
//! module it belongs to and, for financial-only endpoints, the
//! financial permission it requires. Per request the guard moves
//! through `Unauthenticated -> Authenticated(role) -> Authorized |
//! Denied`; `Denied` is terminal and the handler never runs.

use crate::auth::{AccessSubject, FinancialPermission, Module};
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpMessage, ResponseError};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

/// Authorization guard for a route scope
#[derive(Debug, Clone, Copy)]
pub struct Authorize {
    module: Module,
    financial: Option<FinancialPermission>,
}

impl Authorize {
    /// Guard a scope behind module access
    pub fn module(module: Module) -> Self {
        Self {
            module,
            financial: None,
        }
    }

    /// Additionally require a financial permission to enter at all.
    /// Used for endpoints whose entire payload is financial.
    pub fn with_financial(mut self, permission: FinancialPermission) -> Self {
        self.financial = Some(permission);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authorize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthorizeService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizeService {
            service,
            module: self.module,
            financial: self.financial,
        }))
    }
}

/// Service implementation for the authorization guard
pub struct AuthorizeService<S> {
    service: S,
    module: Module,
    financial: Option<FinancialPermission>,
}

impl<S> AuthorizeService<S> {
    /// Decide whether the request may proceed
    fn decide(&self, req: &ServiceRequest) -> bool {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            // No state to decide with: fail closed
            None => return false,
        };

        if !state.config.auth.rbac.enabled {
            return true;
        }

        let subject = match req.extensions().get::<AccessSubject>().copied() {
            Some(subject) => subject,
            // Unauthenticated is terminal Denied
            None => return false,
        };

        let engine = &state.auth.engine;
        engine.has_module_access(subject.role, self.module)
            && self
                .financial
                .map_or(true, |p| engine.has_financial_access(subject.role, p))
    }
}

impl<S, B> Service<ServiceRequest> for AuthorizeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.decide(&req) {
            let role = req
                .extensions()
                .get::<AccessSubject>()
                .map(|s| s.role.to_string());
            warn!(
                path = %req.path(),
                role = role.as_deref().unwrap_or("<none>"),
                "request denied"
            );

            let (request, _) = req.into_parts();
            let response = ServiceError::AccessDenied
                .error_response()
                .map_into_right_body();
            return Box::pin(ready(Ok(ServiceResponse::new(request, response))));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
