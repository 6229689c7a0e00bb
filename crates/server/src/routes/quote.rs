use axum::{extract::{rejection::JsonRejection, State}, Json};
use models::{Quote, QuoteRequest};
use service::errors::ServiceError;
use tracing::error;

use crate::{errors::JsonApiError, state::AppState};

/// Unknown sku or weeks is reported as 500, not 404.
#[utoipa::path(
    post, path = "/api/quote", tag = "quote",
    request_body = crate::openapi::QuoteRequestDoc,
    responses(
        (status = 200, description = "Weekly payments", body = crate::openapi::QuoteDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Product or term missing, or store failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<Quote>, JsonApiError> {
    let Json(input) = payload?;
    match state.quotes.quote(input).await {
        Ok(q) => Ok(Json(q)),
        Err(ServiceError::NotFound(msg)) => {
            error!(reason = %msg, "quote lookup failed");
            Err(JsonApiError::internal())
        }
        Err(e) => Err(e.into()),
    }
}
