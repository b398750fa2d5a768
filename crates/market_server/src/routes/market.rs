//! Market option endpoints
//!
//! - `POST /option/add` — insert a market option record
//! - `GET /option/list` — all stored records
//! - `GET /option/present_value` — Black-76 present value of every record

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use market_core::types::OptionQuote;
use market_store::StoredQuote;

use super::AppState;
use crate::error::ApiError;

/// Response to a successful insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: bool,
    pub message: String,
    pub id: u64,
}

/// Response listing all stored records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<StoredQuote>,
}

/// Present value of a single record, or the reason it could not be priced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentValueEntry {
    pub option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of the present-value endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentValueResponse {
    pub response: Vec<PresentValueEntry>,
}

/// Build the market routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/option/add", post(add_handler))
        .route("/option/list", get(list_handler))
        .route("/option/present_value", get(present_value_handler))
}

/// POST /option/add - Insert a market option record
///
/// Rejects records whose numeric fields are outside the pricing domain;
/// nothing is stored that could never be priced.
async fn add_handler(
    State(state): State<AppState>,
    Json(quote): Json<OptionQuote>,
) -> Result<(StatusCode, Json<AddResponse>), ApiError> {
    market_pricing::validate(&quote)?;

    let id = state.store.insert_record(quote)?;
    tracing::info!(id, "Market data created");

    Ok((
        StatusCode::CREATED,
        Json(AddResponse {
            success: true,
            message: "Market data created successfully.".to_string(),
            id,
        }),
    ))
}

/// GET /option/list - Fetch all market option records
async fn list_handler(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
    let data = state.store.list_records()?;
    tracing::debug!(count = data.len(), "Records listed");

    Ok(Json(ListResponse { data }))
}

/// GET /option/present_value - Black-76 present value of every record
///
/// Values are rounded to 5 decimal places for display; the engine itself
/// returns full precision. A record with invalid inputs yields a per-record
/// error entry and does not abort the response.
async fn present_value_handler(
    State(state): State<AppState>,
) -> Result<Json<PresentValueResponse>, ApiError> {
    let records = state.store.list_records()?;

    let response = records
        .iter()
        .map(|record| match market_pricing::present_value_of(&record.quote) {
            Ok(pv) => PresentValueEntry {
                option: record.quote.option.clone(),
                present_value: Some(round5(pv)),
                error: None,
            },
            Err(err) => {
                tracing::warn!(option = %record.quote.option, %err, "Record failed pricing");
                PresentValueEntry {
                    option: record.quote.option.clone(),
                    present_value: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    Ok(Json(PresentValueResponse { response }))
}

fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}
