//! Management report endpoints
//!
//! Both reports are guarded by the reports module; cost aggregates and
//! nested entity costs are stripped for roles without the financial
//! permission.

use crate::auth::EntityKind;
use crate::server::routes::subject;
use crate::server::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

/// Aggregated sales report for the current period
pub async fn sales(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;
    debug!(role = %subject.role, "sales report requested");

    let report = state.data.sales_report().await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::SalesReport, &report, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}

/// Aggregated inventory report
pub async fn inventory(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;
    debug!(role = %subject.role, "inventory report requested");

    let report = state.data.inventory_report().await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::InventoryReport, &report, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}
