//! End-to-end authorization and redaction flow
//!
//! Builds the full application the way the binary does and drives it
//! through the HTTP boundary: module guards on every scope, financial
//! redaction on every payload.

use actix_web::{http::StatusCode, test, web, App};
use farmagate::server::middleware::SubjectExtractor;
use farmagate::server::{routes, AppState};
use farmagate::storage::SampleStore;
use farmagate::{AuthSystem, Config};
use serde_json::Value;
use std::sync::Arc;

macro_rules! app {
    () => {{
        let state = web::Data::new(AppState::new(
            Config::default(),
            AuthSystem::builtin(),
            Arc::new(SampleStore),
        ));
        test::init_service(
            App::new()
                .app_data(state)
                .wrap(SubjectExtractor::new("x-auth-role"))
                .configure(routes::configure),
        )
        .await
    }};
}

async fn get_json<S, B>(app: &S, uri: &str, role: Option<&str>) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(role) = role {
        req = req.insert_header(("x-auth-role", role));
    }
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[actix_web::test]
async fn admin_sees_full_product_costs() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/produtos", Some("administrador")).await;

    assert_eq!(status, StatusCode::OK);
    let first = &body.as_array().unwrap()[0];
    assert!(first.get("precoCusto").is_some());
    assert!(first.get("margem").is_some());
}

#[actix_web::test]
async fn pharmacist_product_costs_are_absent() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/produtos", Some("farmaceutico")).await;

    assert_eq!(status, StatusCode::OK);
    for product in body.as_array().unwrap() {
        let object = product.as_object().unwrap();
        // Absent, not null
        assert!(!object.contains_key("precoCusto"));
        assert!(!object.contains_key("margem"));
        assert!(object.contains_key("precoVenda"));
    }
}

#[actix_web::test]
async fn salesperson_cannot_reach_products() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/produtos", Some("vendedor")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "ACCESS_DENIED");
}

#[actix_web::test]
async fn salesperson_sales_have_no_item_costs() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/vendas", Some("vendedor")).await;

    assert_eq!(status, StatusCode::OK);
    let sale = &body.as_array().unwrap()[0];
    assert_eq!(sale["total"], 50.5);
    let item = &sale["itens"][0];
    assert!(item.get("custoUnitario").is_none());
    assert!(item.get("lucro").is_none());
    assert_eq!(item["precoUnitario"], 12.5);
}

#[actix_web::test]
async fn manager_sales_report_is_redacted_recursively() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/relatorios/vendas", Some("gerente")).await;

    assert_eq!(status, StatusCode::OK);
    // Top-level cost aggregates stripped
    assert!(body.get("custoTotal").is_none());
    assert!(body.get("lucroBruto").is_none());
    assert!(body.get("margemMedia").is_none());
    assert_eq!(body["totalVendas"], 18450.0);
    // Declared nested path stripped too
    let item = &body["vendas"][0]["itens"][0];
    assert!(item.get("custoUnitario").is_none());
    assert_eq!(item["subtotal"], 25.0);
}

#[actix_web::test]
async fn admin_sales_report_is_untouched() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/relatorios/vendas", Some("administrador")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["custoTotal"], 10320.0);
    assert_eq!(body["lucroBruto"], 8130.0);
    assert_eq!(body["vendas"][0]["itens"][0]["custoUnitario"], 6.1);
}

#[actix_web::test]
async fn inventory_report_requires_reports_module() {
    let app = app!();

    // Pharmacist holds inventory but not reports
    let (status, _) = get_json(&app, "/api/relatorios/estoque", Some("farmaceutico")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get_json(&app, "/api/relatorios/estoque", Some("gerente")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("valorCustoEstoque").is_none());
    assert_eq!(body["totalProdutos"], 2);
}

#[actix_web::test]
async fn request_without_role_is_denied() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/produtos", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "access denied");
}

#[actix_web::test]
async fn unknown_role_is_denied_uniformly() {
    let app = app!();

    let (status, body) = get_json(&app, "/api/vendas", Some("estagiario")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    // Denial must not leak capability names
    assert!(!body.to_string().contains("vendas"));
}

#[actix_web::test]
async fn health_is_open() {
    let app = app!();

    let (status, body) = get_json(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn missing_product_is_not_found() {
    let app = app!();

    let (status, _) = get_json(&app, "/api/produtos/99", Some("administrador")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn redacting_a_served_payload_again_changes_nothing() {
    use farmagate::{EntityKind, Role};

    let app = app!();

    let (status, body) = get_json(&app, "/api/vendas", Some("vendedor")).await;
    assert_eq!(status, StatusCode::OK);

    // A payload that already went through the boundary is a fixed point
    // of the redactor, so downstream layers may re-apply it freely.
    let redactor = AuthSystem::builtin().redactor;
    let again = redactor.redact(EntityKind::Sale, &body, Role::Salesperson);
    assert_eq!(again, body);
}

#[actix_web::test]
async fn pos_operator_reaches_only_sales() {
    let app = app!();

    let (status, _) = get_json(&app, "/api/vendas", Some("caixa")).await;
    assert_eq!(status, StatusCode::OK);

    for uri in [
        "/api/produtos",
        "/api/clientes",
        "/api/relatorios/vendas",
        "/api/relatorios/estoque",
    ] {
        let (status, _) = get_json(&app, uri, Some("caixa")).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "uri {}", uri);
    }
}
