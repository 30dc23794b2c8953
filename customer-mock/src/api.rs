use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use shared::{AppError, AppResult, Customer, CustomerPayload};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Customers Demo REST API Service",
        "version": "1.0"
    }))
}

#[derive(Deserialize)]
struct ListQuery {
    name: Option<String>,
}

/// GET /customers[?name=...]
async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Customer>> {
    tracing::info!("Request for customer list");
    let customers = match query.name.as_deref() {
        Some(name) if !name.is_empty() => state.customers.find_by_name(name).await,
        _ => state.customers.all().await,
    };
    Json(customers)
}

/// POST /customers
async fn create_customer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    tracing::info!("Request to create a customer");
    let payload = parse_payload(&headers, &body)?;
    let customer = state.customers.create(payload).await;

    let location = format!("/customers/{}", customer.customer_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer),
    ))
}

/// GET /customers/{id}
async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Customer>> {
    tracing::info!(customer_id = %raw_id, "Request for customer");
    let id = parse_id(&raw_id)?;
    state
        .customers
        .find(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found(&raw_id))
}

/// PUT /customers/{id}
async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Customer>> {
    tracing::info!(customer_id = %raw_id, "Request to update customer");
    let id = parse_id(&raw_id)?;
    // 404 before 400: an unknown id wins over a bad body
    if state.customers.find(id).await.is_none() {
        return Err(not_found(&raw_id));
    }
    let payload = parse_payload(&headers, &body)?;
    state
        .customers
        .update(id, payload)
        .await
        .map(Json)
        .ok_or_else(|| not_found(&raw_id))
}

/// DELETE /customers/{id} - 204 whether or not the customer existed
async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(customer_id = %raw_id, "Request to delete customer");
    let id = parse_id(&raw_id)?;
    state.customers.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /customers/{id}/activate
async fn activate(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Customer>> {
    tracing::info!(customer_id = %raw_id, "Request to activate customer");
    set_active(&state, &raw_id, true).await.map(Json)
}

/// PUT /customers/{id}/deactivate
async fn deactivate(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Customer>> {
    tracing::info!(customer_id = %raw_id, "Request to deactivate customer");
    set_active(&state, &raw_id, false).await.map(Json)
}

/// DELETE /customers/{id}/deactivate - soft delete
async fn soft_delete(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(customer_id = %raw_id, "Request to soft delete customer");
    set_active(&state, &raw_id, false).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn not_found_fallback() -> AppError {
    AppError::not_found("The requested URL was not found on the server.")
}

async fn set_active(state: &AppState, raw_id: &str, active: bool) -> AppResult<Customer> {
    let id = parse_id(raw_id)?;
    state
        .customers
        .set_active(id, active)
        .await
        .ok_or_else(|| not_found(raw_id))
}

fn not_found(raw_id: &str) -> AppError {
    AppError::not_found(format!("Customer with id '{}' was not found.", raw_id))
}

// Non-integer ids cannot exist
fn parse_id(raw_id: &str) -> AppResult<i64> {
    raw_id.parse().map_err(|_| not_found(raw_id))
}

fn check_content_type(headers: &HeaderMap) -> AppResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let media_type = content_type.split(';').next().unwrap_or_default().trim();

    if media_type.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
        return Ok(());
    }
    tracing::error!(content_type, "Invalid Content-Type");
    Err(AppError::unsupported_media_type(format!(
        "Content-Type must be {}",
        JSON_CONTENT_TYPE
    )))
}

fn parse_payload(headers: &HeaderMap, body: &Bytes) -> AppResult<CustomerPayload> {
    check_content_type(headers)?;
    serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("Invalid Customer: {}", e)))
}

pub fn router(state: Arc<AppState>) -> Router {
    // 并发限制
    let concurrency_limit = ConcurrencyLimitLayer::new(100);

    Router::new()
        .route("/", get(index))
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .route("/customers/{id}/activate", put(activate))
        .route(
            "/customers/{id}/deactivate",
            put(deactivate).delete(soft_delete),
        )
        .fallback(not_found_fallback)
        .layer(concurrency_limit)
        // 页面与后端可能不同源
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
