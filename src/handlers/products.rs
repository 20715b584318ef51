// src/handlers/products.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::TenantContext,
    models::product::{CreateProductPayload, Product, UpdateProductPayload},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(get_all_products).post(create_product))
        // Rotas literais antes da rota com {id}; o axum dá prioridade ao
        // match exato, então a ordem aqui é só organização.
        .route("/api/products/critical-stock", get(get_critical_stock))
        .route("/api/products/reorder", get(get_products_to_reorder))
        .route(
            "/api/products/{id}",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
}

/// Lista todos os produtos do tenant.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "Produtos do tenant", body = [Product]),
        (status = 400, description = "TenantId ausente")
    )
)]
pub async fn get_all_products(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.get_all(tenant.0).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Id do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado para esse tenant")
    )
)]
pub async fn get_product_by_id(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state
        .product_service
        .get_by_id(id, tenant.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Produto com id {id} não encontrado.")))?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Payload inválido ou TenantId ausente")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = app_state.product_service.create(payload, tenant.0).await?;
    tracing::info!(product_id = %created.product_id, tenant_id = %tenant.0, "produto criado");

    let location = format!("/api/products/{}", created.product_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Id do produto")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado para esse tenant")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated = app_state
        .product_service
        .update(id, payload, tenant.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Produto com id {id} não encontrado.")))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Id do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado para esse tenant")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.product_service.delete(id, tenant.0).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Produto com id {id} não encontrado."
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Produtos com tendência crítica de estoque.
#[utoipa::path(
    get,
    path = "/api/products/critical-stock",
    tag = "products",
    responses((status = 200, description = "Produtos críticos", body = [Product]))
)]
pub async fn get_critical_stock(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.get_critical_stock(tenant.0).await?;
    Ok(Json(products))
}

/// Produtos no ponto de reposição ou abaixo dele.
#[utoipa::path(
    get,
    path = "/api/products/reorder",
    tag = "products",
    responses((status = 200, description = "Produtos a repor", body = [Product]))
)]
pub async fn get_products_to_reorder(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .product_service
        .get_products_to_reorder(tenant.0)
        .await?;
    Ok(Json(products))
}
