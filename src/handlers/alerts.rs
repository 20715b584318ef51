// src/handlers/alerts.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::alert::{AlertType, CreateSmartAlertPayload, SmartAlert},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/alerts", get(get_all_alerts).post(create_alert))
        .route("/api/alerts/critical", get(get_critical_alerts))
        .route("/api/alerts/unread", get(get_unread_alerts))
        .route("/api/alerts/type/{alert_type}", get(get_alerts_by_type))
        .route("/api/alerts/{id}/markAsRead", put(mark_alert_as_read))
        .route("/api/alerts/{id}", delete(delete_alert))
}

#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "alerts",
    responses((status = 200, description = "Todos os alertas, mais recentes primeiro", body = [SmartAlert]))
)]
pub async fn get_all_alerts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = app_state.alert_service.get_all().await?;
    Ok(Json(alerts))
}

#[utoipa::path(
    get,
    path = "/api/alerts/critical",
    tag = "alerts",
    responses((status = 200, description = "Alertas críticos", body = [SmartAlert]))
)]
pub async fn get_critical_alerts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = app_state.alert_service.get_critical().await?;
    Ok(Json(alerts))
}

/// O tipo na URL é comparado sem diferenciar maiúsculas ("critical",
/// "Warning", "INFO"...).
#[utoipa::path(
    get,
    path = "/api/alerts/type/{alert_type}",
    tag = "alerts",
    params(("alert_type" = String, Path, description = "critical | warning | info | success")),
    responses(
        (status = 200, description = "Alertas do tipo pedido", body = [SmartAlert]),
        (status = 400, description = "Tipo de alerta desconhecido")
    )
)]
pub async fn get_alerts_by_type(
    State(app_state): State<AppState>,
    Path(alert_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let alert_type: AlertType = alert_type.parse().map_err(|_| {
        AppError::InvalidParameter(format!("Tipo de alerta inválido: '{alert_type}'."))
    })?;

    let alerts = app_state.alert_service.get_by_type(alert_type).await?;
    Ok(Json(alerts))
}

#[utoipa::path(
    get,
    path = "/api/alerts/unread",
    tag = "alerts",
    responses((status = 200, description = "Alertas não lidos", body = [SmartAlert]))
)]
pub async fn get_unread_alerts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = app_state.alert_service.get_unread().await?;
    Ok(Json(alerts))
}

#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = "alerts",
    request_body = CreateSmartAlertPayload,
    responses(
        (status = 201, description = "Alerta criado (sempre não lido)", body = SmartAlert),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_alert(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSmartAlertPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = app_state.alert_service.create(payload).await?;
    tracing::info!(alert_id = %created.alert_id, "alerta criado");

    let location = format!("/api/alerts/{}", created.alert_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Idempotente: marcar de novo um alerta já lido também devolve 200.
#[utoipa::path(
    put,
    path = "/api/alerts/{id}/markAsRead",
    tag = "alerts",
    params(("id" = Uuid, Path, description = "Id do alerta")),
    responses(
        (status = 200, description = "Alerta marcado como lido"),
        (status = 404, description = "Alerta não encontrado")
    )
)]
pub async fn mark_alert_as_read(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let marked = app_state.alert_service.mark_as_read(id).await?;
    if !marked {
        return Err(AppError::NotFound(format!(
            "Alerta com id {id} não encontrado."
        )));
    }
    Ok(Json(serde_json::json!({ "message": "Alerta marcado como lido." })))
}

#[utoipa::path(
    delete,
    path = "/api/alerts/{id}",
    tag = "alerts",
    params(("id" = Uuid, Path, description = "Id do alerta")),
    responses(
        (status = 204, description = "Alerta removido"),
        (status = 404, description = "Alerta não encontrado")
    )
)]
pub async fn delete_alert(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.alert_service.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Alerta com id {id} não encontrado."
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
