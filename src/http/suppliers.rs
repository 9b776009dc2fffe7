use super::{ApiError, AppState};
use crate::error::CatalogError;
use crate::managers::ResourceManager;
use crate::model::{SupplierCreate, SupplierId, SupplierView};
use crate::patch::PatchDocument;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SupplierView>>, ApiError> {
    Ok(Json(state.suppliers.list().await?))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SupplierView>, ApiError> {
    let id = SupplierId::parse(&id)?;
    Ok(Json(state.suppliers.get(id).await?))
}

#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SupplierCreate>, JsonRejection>,
) -> Result<Json<SupplierView>, ApiError> {
    let Json(payload) = body?;
    Ok(Json(state.suppliers.create(payload).await?))
}

#[instrument(skip(state, body))]
pub async fn replace(
    State(state): State<AppState>,
    body: Result<Json<SupplierView>, JsonRejection>,
) -> Result<Json<SupplierView>, ApiError> {
    let Json(view) = body?;
    Ok(Json(state.suppliers.replace(view.id, view).await?))
}

#[instrument(skip(state, body))]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SupplierView>, ApiError> {
    let id = SupplierId::parse(&id)?;
    let Json(raw) = body?;
    let document = PatchDocument::from_json(raw).map_err(CatalogError::from)?;
    Ok(Json(state.suppliers.patch(id, document).await?))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SupplierView>, ApiError> {
    let id = SupplierId::parse(&id)?;
    Ok(Json(state.suppliers.delete(id).await?))
}
