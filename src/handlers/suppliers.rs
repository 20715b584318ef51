// src/handlers/suppliers.rs
//
// Sem TenantContext de propósito: ver a nota em services/supplier_service.rs.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/suppliers", get(get_all_suppliers).post(create_supplier))
        .route("/api/suppliers/top", get(get_top_suppliers))
        .route(
            "/api/suppliers/{id}",
            get(get_supplier_by_id)
                .put(update_supplier)
                .delete(delete_supplier),
        )
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopQuery {
    /// Quantos fornecedores retornar (padrão: 10).
    pub count: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "suppliers",
    responses((status = 200, description = "Todos os fornecedores", body = [Supplier]))
)]
pub async fn get_all_suppliers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.supplier_service.get_all().await?;
    Ok(Json(suppliers))
}

#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = Uuid, Path, description = "Id do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn get_supplier_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = app_state
        .supplier_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fornecedor com id {id} não encontrado.")))?;
    Ok(Json(supplier))
}

#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "suppliers",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Supplier),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = app_state.supplier_service.create(payload).await?;
    tracing::info!(supplier_id = %created.supplier_id, "fornecedor criado");

    let location = format!("/api/suppliers/{}", created.supplier_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = Uuid, Path, description = "Id do fornecedor")),
    request_body = UpdateSupplierPayload,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn update_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated = app_state
        .supplier_service
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fornecedor com id {id} não encontrado.")))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = Uuid, Path, description = "Id do fornecedor")),
    responses(
        (status = 204, description = "Fornecedor removido"),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn delete_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.supplier_service.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Fornecedor com id {id} não encontrado."
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Ranking de fornecedores por nota geral.
#[utoipa::path(
    get,
    path = "/api/suppliers/top",
    tag = "suppliers",
    params(TopQuery),
    responses((status = 200, description = "Melhores fornecedores", body = [Supplier]))
)]
pub async fn get_top_suppliers(
    State(app_state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.supplier_service.get_top(query.count).await?;
    Ok(Json(suppliers))
}
