//! Product catalog endpoints

use crate::auth::EntityKind;
use crate::server::routes::subject;
use crate::server::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

/// List catalog products, cost fields redacted per role
pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;
    debug!(role = %subject.role, "listing products");

    let products = state.data.products().await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::Product, &products, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}

/// Fetch a single product by id
pub async fn get(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;
    let id = path.into_inner();

    let product = state.data.product(id).await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::Product, &product, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}
