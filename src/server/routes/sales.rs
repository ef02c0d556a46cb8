//! Sales endpoints

use crate::auth::EntityKind;
use crate::server::routes::subject;
use crate::server::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

/// List sales, per-item cost and profit redacted per role
pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let subject = subject(&req)?;

    let sales = state.data.sales().await?;
    let redacted = state
        .auth
        .redactor
        .redact(EntityKind::Sale, &sales, subject.role);

    Ok(HttpResponse::Ok().json(redacted))
}
