//! HTTP route configuration
//!
//! Every functional scope is wrapped in an [`Authorize`] guard for its
//! module; report routes included. Handlers fetch from the data source
//! and run every payload through the redactor before serialization.

mod customers;
mod health;
mod products;
mod reports;
mod sales;

use crate::auth::Module;
use crate::server::middleware::Authorize;
use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/produtos")
            .wrap(Authorize::module(Module::Products))
            .route("", web::get().to(products::list))
            .route("/{id}", web::get().to(products::get)),
    )
    .service(
        web::scope("/api/clientes")
            .wrap(Authorize::module(Module::Customers))
            .route("", web::get().to(customers::list)),
    )
    .service(
        web::scope("/api/vendas")
            .wrap(Authorize::module(Module::Sales))
            .route("", web::get().to(sales::list)),
    )
    .service(
        web::scope("/api/relatorios")
            .wrap(Authorize::module(Module::Reports))
            .route("/vendas", web::get().to(reports::sales))
            .route("/estoque", web::get().to(reports::inventory)),
    )
    .route("/health", web::get().to(health::health_check));
}

use crate::auth::AccessSubject;
use crate::utils::error::ServiceError;
use actix_web::{HttpMessage, HttpRequest};

/// Pull the access subject resolved by the extraction middleware.
///
/// The authorization guard already denied subject-less requests, but a
/// handler reached through a misconfigured scope must still fail
/// closed rather than emit an unredacted payload.
pub(crate) fn subject(req: &HttpRequest) -> Result<AccessSubject, ServiceError> {
    req.extensions()
        .get::<AccessSubject>()
        .copied()
        .ok_or(ServiceError::AccessDenied)
}
