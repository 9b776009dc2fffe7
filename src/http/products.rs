use super::{ApiError, AppState};
use crate::error::CatalogError;
use crate::managers::ResourceManager;
use crate::model::{CategoryId, ProductCreate, ProductId, ProductView, SupplierId};
use crate::patch::PatchDocument;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>, ApiError> {
    let id = ProductId::parse(&id)?;
    Ok(Json(state.products.get(id).await?))
}

#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let Json(payload) = body?;
    Ok(Json(state.products.create(payload).await?))
}

#[instrument(skip(state, body))]
pub async fn replace(
    State(state): State<AppState>,
    body: Result<Json<ProductView>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let Json(view) = body?;
    Ok(Json(state.products.replace(view.id, view).await?))
}

#[instrument(skip(state, body))]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let id = ProductId::parse(&id)?;
    let Json(raw) = body?;
    let document = PatchDocument::from_json(raw).map_err(CatalogError::from)?;
    Ok(Json(state.products.patch(id, document).await?))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>, ApiError> {
    let id = ProductId::parse(&id)?;
    Ok(Json(state.products.delete(id).await?))
}

#[instrument(skip(state))]
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let id = CategoryId::parse(&id)?;
    Ok(Json(state.products.list_by_category(id).await?))
}

#[instrument(skip(state))]
pub async fn list_by_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let id = SupplierId::parse(&id)?;
    Ok(Json(state.products.list_by_supplier(id).await?))
}
