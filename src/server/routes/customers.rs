//! Customer record endpoints

use crate::auth::EntityKind;
use crate::server::routes::subject;
use crate::server::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

/// List customer records
pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;

    let customers = state.data.customers().await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::Customer, &customers, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}
