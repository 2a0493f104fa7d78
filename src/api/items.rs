//! Item (physical copy) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::MaterialKind,
        item::{CreateItem, ItemQuery, ItemResponse, ItemsByMaterialQuery, UpdateItem},
    },
};

use super::RespuestaAPI;

/// List items with optional availability and material filters
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ItemQuery),
    responses(
        (status = 200, description = "List of items", body = [ItemResponse])
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
    Query(query): Query<ItemQuery>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let items = state.services.items.list(query).await?;
    Ok(Json(items))
}

/// List the items of a single material
#[utoipa::path(
    get,
    path = "/items/por-material/{tipo}/{material_id}",
    tag = "items",
    params(
        ("tipo" = String, Path, description = "Material type: libro, revista or periodico"),
        ("material_id" = Uuid, Path, description = "Material ID"),
        ItemsByMaterialQuery
    ),
    responses(
        (status = 200, description = "Items of the material", body = [ItemResponse]),
        (status = 400, description = "Unknown material type")
    )
)]
pub async fn list_items_by_material(
    State(state): State<crate::AppState>,
    Path((tipo, material_id)): Path<(String, Uuid)>,
    Query(query): Query<ItemsByMaterialQuery>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let kind = tipo
        .trim()
        .parse::<MaterialKind>()
        .map_err(AppError::Validation)?;
    let solo_disponibles = query.solo_disponibles.unwrap_or(false);
    let items = state
        .services
        .items
        .list_by_material(kind, material_id, solo_disponibles)
        .await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ItemResponse>> {
    let item = state.services.items.get(id).await?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Barcode already exists")
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let item = state.services.items.create(data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Barcode already exists")
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateItem>,
) -> AppResult<Json<ItemResponse>> {
    let item = state.services.items.update(id, data).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = RespuestaAPI),
        (status = 400, description = "Item has an active loan"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.items.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Item deleted successfully")))
}
