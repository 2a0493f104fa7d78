//! Fine endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::fine::{CreateFine, Fine, FineQuery, PayFine, UpdateFine},
};

use super::RespuestaAPI;

/// List fines with optional state and user filters
#[utoipa::path(
    get,
    path = "/multas",
    tag = "multas",
    params(FineQuery),
    responses(
        (status = 200, description = "List of fines", body = [Fine]),
        (status = 400, description = "Unknown fine state")
    )
)]
pub async fn list_fines(
    State(state): State<crate::AppState>,
    Query(query): Query<FineQuery>,
) -> AppResult<Json<Vec<Fine>>> {
    let fines = state.services.fines.list(&query).await?;
    Ok(Json(fines))
}

/// Get a fine by ID
#[utoipa::path(
    get,
    path = "/multas/{id}",
    tag = "multas",
    params(
        ("id" = Uuid, Path, description = "Fine ID")
    ),
    responses(
        (status = 200, description = "Fine details", body = Fine),
        (status = 404, description = "Fine not found")
    )
)]
pub async fn get_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Fine>> {
    let fine = state.services.fines.get(id).await?;
    Ok(Json(fine))
}

/// Create a new fine
#[utoipa::path(
    post,
    path = "/multas",
    tag = "multas",
    request_body = CreateFine,
    responses(
        (status = 201, description = "Fine created", body = Fine),
        (status = 400, description = "Invalid input or fine already exists for the loan")
    )
)]
pub async fn create_fine(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateFine>,
) -> AppResult<(StatusCode, Json<Fine>)> {
    let fine = state.services.fines.create(data).await?;
    Ok((StatusCode::CREATED, Json(fine)))
}

/// Update an existing fine
#[utoipa::path(
    put,
    path = "/multas/{id}",
    tag = "multas",
    params(
        ("id" = Uuid, Path, description = "Fine ID")
    ),
    request_body = UpdateFine,
    responses(
        (status = 200, description = "Fine updated", body = Fine),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Fine not found")
    )
)]
pub async fn update_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateFine>,
) -> AppResult<Json<Fine>> {
    let fine = state.services.fines.update(id, data).await?;
    Ok(Json(fine))
}

/// Mark a fine as paid
#[utoipa::path(
    post,
    path = "/multas/{id}/pagar",
    tag = "multas",
    params(
        ("id" = Uuid, Path, description = "Fine ID")
    ),
    request_body = PayFine,
    responses(
        (status = 200, description = "Fine marked as paid", body = Fine),
        (status = 404, description = "Fine not found")
    )
)]
pub async fn pay_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<PayFine>,
) -> AppResult<Json<Fine>> {
    let fine = state.services.fines.pay(id, data).await?;
    Ok(Json(fine))
}

/// Delete a fine
#[utoipa::path(
    delete,
    path = "/multas/{id}",
    tag = "multas",
    params(
        ("id" = Uuid, Path, description = "Fine ID")
    ),
    responses(
        (status = 200, description = "Fine deleted", body = RespuestaAPI),
        (status = 404, description = "Fine not found")
    )
)]
pub async fn delete_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.fines.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Fine deleted successfully")))
}
