use super::{ApiError, AppState};
use crate::error::CatalogError;
use crate::managers::ResourceManager;
use crate::model::{CategoryCreate, CategoryId, CategoryView};
use crate::patch::PatchDocument;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryView>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryView>, ApiError> {
    let id = CategoryId::parse(&id)?;
    Ok(Json(state.categories.get(id).await?))
}

#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryCreate>, JsonRejection>,
) -> Result<Json<CategoryView>, ApiError> {
    let Json(payload) = body?;
    Ok(Json(state.categories.create(payload).await?))
}

#[instrument(skip(state, body))]
pub async fn replace(
    State(state): State<AppState>,
    body: Result<Json<CategoryView>, JsonRejection>,
) -> Result<Json<CategoryView>, ApiError> {
    let Json(view) = body?;
    Ok(Json(state.categories.replace(view.id, view).await?))
}

#[instrument(skip(state, body))]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CategoryView>, ApiError> {
    let id = CategoryId::parse(&id)?;
    let Json(raw) = body?;
    let document = PatchDocument::from_json(raw).map_err(CatalogError::from)?;
    Ok(Json(state.categories.patch(id, document).await?))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryView>, ApiError> {
    let id = CategoryId::parse(&id)?;
    Ok(Json(state.categories.delete(id).await?))
}
