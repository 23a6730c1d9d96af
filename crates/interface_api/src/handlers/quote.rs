//! Quote handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use core_kernel::QuoteRecordId;
use domain_quote::ValidationErrors;

use crate::dto::quote::*;
use crate::{error::ApiError, AppState};

/// Creates a quote and returns it with its assigned quote number
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteResponse>), ApiError> {
    let Json(request) = payload?;
    let new_quote = request.into_new_quote()?;

    let record = state.service.create_quote(new_quote).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists quotes, oldest first
pub async fn list_quotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.service.list_quotes().await?;
    Ok(Json(quotes.into_iter().map(QuoteResponse::from).collect()))
}

/// Gets a quote by record ID
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_record_id(&id)?;
    let record = state.service.get_quote(id).await?;
    Ok(Json(record.into()))
}

/// Deletes a quote by record ID
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_record_id(&id)?;
    state.service.delete_quote(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Prices a stored quote by its public quote number
pub async fn checkout_quote(
    State(state): State<AppState>,
    Query(params): Query<CheckoutParams>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let quote_id = params
        .quote
        .ok_or_else(|| ValidationErrors::single("quote", "This field is required."))?;
    debug!(%quote_id, "Checkout requested");

    let checkout = state.service.checkout(&quote_id).await?;
    Ok(Json(checkout.into()))
}

/// Unparseable ids cannot match a stored quote
fn parse_record_id(raw: &str) -> Result<QuoteRecordId, ApiError> {
    raw.parse::<QuoteRecordId>()
        .map_err(|_| ApiError::NotFound(format!("Quote {raw} not found")))
}
