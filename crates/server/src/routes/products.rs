use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use models::{CreateProductInput, Product, UpdateProductInput};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "All products", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, JsonApiError> {
    let list = state.products.list().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/products/{sku}", tag = "products",
    params(("sku" = String, Path, description = "Product SKU")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get(State(state): State<AppState>, Path(sku): Path<String>) -> Result<Json<Product>, JsonApiError> {
    Ok(Json(state.products.get(&sku).await?))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/products/{sku}", tag = "products",
    params(("sku" = String, Path, description = "Product SKU")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    payload: Result<Json<UpdateProductInput>, JsonRejection>,
) -> Result<Json<Product>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.products.update(&sku, input).await?))
}

#[utoipa::path(
    delete, path = "/api/products/{sku}", tag = "products",
    params(("sku" = String, Path, description = "Product SKU")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(sku): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.products.delete(&sku).await?;
    Ok(StatusCode::NO_CONTENT)
}
