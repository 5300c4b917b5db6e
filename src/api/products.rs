//! Catalog CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::error::ApiError;
use crate::state::AppState;

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse()
        .map_err(|_| ApiError::validation("ID de producto no válido"))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::upstream("Error al obtener productos", e))?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::upstream("Error al obtener producto", e))?;
    product
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Producto no encontrado"))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = body.into_product()?;
    let created = state
        .store
        .insert(product)
        .await
        .map_err(|e| ApiError::upstream("Error al crear producto", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let update = body.normalized()?;
    let updated = state
        .store
        .update(id, update)
        .await
        .map_err(|e| ApiError::upstream("Error al actualizar producto", e))?;
    updated
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Producto no encontrado"))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::upstream("Error al eliminar producto", e))?;
    if removed {
        Ok(Json(json!({ "message": "Producto eliminado correctamente" })))
    } else {
        Err(ApiError::not_found("Producto no encontrado"))
    }
}
