use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::{CreateTermInput, Term};

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/terms", tag = "terms",
    responses(
        (status = 200, description = "All terms", body = [crate::openapi::TermDoc]),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Term>>, JsonApiError> {
    Ok(Json(state.terms.list().await?))
}

#[utoipa::path(
    post, path = "/api/terms", tag = "terms",
    request_body = crate::openapi::TermDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TermDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTermInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Term>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.terms.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
