//! Loan endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanQuery, ReturnLoan, UpdateLoan},
};

use super::RespuestaAPI;

/// List loans with optional state and user filters
#[utoipa::path(
    get,
    path = "/prestamos",
    tag = "prestamos",
    params(LoanQuery),
    responses(
        (status = 200, description = "List of loans", body = [Loan]),
        (status = 400, description = "Unknown loan state")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    Query(query): Query<LoanQuery>,
) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.list(&query).await?;
    Ok(Json(loans))
}

/// Get a loan by ID
#[utoipa::path(
    get,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = Uuid, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get(id).await?;
    Ok(Json(loan))
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/prestamos",
    tag = "prestamos",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Invalid input or item unavailable")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.services.loans.create(data).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Update an existing loan
#[utoipa::path(
    put,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = Uuid, Path, description = "Loan ID")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = Loan),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.update(id, data).await?;
    Ok(Json(loan))
}

/// Return a loaned item
#[utoipa::path(
    post,
    path = "/prestamos/{id}/devolver",
    tag = "prestamos",
    params(
        ("id" = Uuid, Path, description = "Loan ID")
    ),
    request_body = ReturnLoan,
    responses(
        (status = 200, description = "Loan marked as returned", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ReturnLoan>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.return_loan(id, data).await?;
    Ok(Json(loan))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = Uuid, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan deleted", body = RespuestaAPI),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.loans.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Loan deleted successfully")))
}
