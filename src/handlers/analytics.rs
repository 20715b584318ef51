// src/handlers/analytics.rs
//
// Somente leitura: o dashboard consome estes dados, nunca os escreve.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::analytics::{
        CostAnalysis, DemandPrediction, MarketPriceAnalysis, PerformanceScore,
        SeasonalityAnalysis,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/analytics/demandpredictions", get(get_demand_predictions))
        .route(
            "/api/analytics/demandpredictions/latest",
            get(get_latest_demand_predictions),
        )
        .route("/api/analytics/costanalysis", get(get_cost_analyses))
        .route(
            "/api/analytics/costanalysis/category/{category}",
            get(get_cost_analysis_by_category),
        )
        .route("/api/analytics/marketprices", get(get_market_prices))
        .route(
            "/api/analytics/marketprices/product/{product}",
            get(get_market_price_by_product),
        )
        .route("/api/analytics/seasonality", get(get_seasonality))
        .route(
            "/api/analytics/seasonality/month/{month}",
            get(get_seasonality_by_month),
        )
        .route("/api/analytics/performancescores", get(get_performance_scores))
        .route(
            "/api/analytics/performancescores/metric/{metric}",
            get(get_performance_score_by_metric),
        )
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LatestQuery {
    /// Janela em dias a partir de hoje, contando para trás (padrão: 7).
    pub days: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/analytics/demandpredictions",
    tag = "analytics",
    responses((status = 200, description = "Previsões de demanda em ordem cronológica", body = [DemandPrediction]))
)]
pub async fn get_demand_predictions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let predictions = app_state.analytics_service.get_demand_predictions().await?;
    Ok(Json(predictions))
}

#[utoipa::path(
    get,
    path = "/api/analytics/demandpredictions/latest",
    tag = "analytics",
    params(LatestQuery),
    responses((status = 200, description = "Previsões dos últimos N dias", body = [DemandPrediction]))
)]
pub async fn get_latest_demand_predictions(
    State(app_state): State<AppState>,
    Query(query): Query<LatestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let predictions = app_state
        .analytics_service
        .get_latest_demand_predictions(query.days)
        .await?;
    Ok(Json(predictions))
}

#[utoipa::path(
    get,
    path = "/api/analytics/costanalysis",
    tag = "analytics",
    responses((status = 200, description = "Análises de custo por categoria", body = [CostAnalysis]))
)]
pub async fn get_cost_analyses(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let analyses = app_state.analytics_service.get_cost_analyses().await?;
    Ok(Json(analyses))
}

#[utoipa::path(
    get,
    path = "/api/analytics/costanalysis/category/{category}",
    tag = "analytics",
    params(("category" = String, Path, description = "Nome da categoria (sem diferenciar maiúsculas)")),
    responses(
        (status = 200, description = "Análise da categoria", body = CostAnalysis),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn get_cost_analysis_by_category(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = app_state
        .analytics_service
        .get_cost_analysis_by_category(&category)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Análise de custo para a categoria '{category}' não encontrada."
            ))
        })?;
    Ok(Json(analysis))
}

#[utoipa::path(
    get,
    path = "/api/analytics/marketprices",
    tag = "analytics",
    responses((status = 200, description = "Comparativos de preço de mercado", body = [MarketPriceAnalysis]))
)]
pub async fn get_market_prices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let prices = app_state.analytics_service.get_market_price_analyses().await?;
    Ok(Json(prices))
}

#[utoipa::path(
    get,
    path = "/api/analytics/marketprices/product/{product}",
    tag = "analytics",
    params(("product" = String, Path, description = "Nome do produto (sem diferenciar maiúsculas)")),
    responses(
        (status = 200, description = "Comparativo do produto", body = MarketPriceAnalysis),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_market_price_by_product(
    State(app_state): State<AppState>,
    Path(product): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let price = app_state
        .analytics_service
        .get_market_price_by_product(&product)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Análise de preço para o produto '{product}' não encontrada."
            ))
        })?;
    Ok(Json(price))
}

#[utoipa::path(
    get,
    path = "/api/analytics/seasonality",
    tag = "analytics",
    responses((status = 200, description = "Sazonalidade mensal", body = [SeasonalityAnalysis]))
)]
pub async fn get_seasonality(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let seasonality = app_state.analytics_service.get_seasonality_analyses().await?;
    Ok(Json(seasonality))
}

#[utoipa::path(
    get,
    path = "/api/analytics/seasonality/month/{month}",
    tag = "analytics",
    params(("month" = String, Path, description = "Mês por extenso, como no seed (\"Janvier\"...)")),
    responses(
        (status = 200, description = "Sazonalidade do mês", body = SeasonalityAnalysis),
        (status = 404, description = "Mês não encontrado")
    )
)]
pub async fn get_seasonality_by_month(
    State(app_state): State<AppState>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let seasonality = app_state
        .analytics_service
        .get_seasonality_by_month(&month)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Sazonalidade para o mês '{month}' não encontrada."))
        })?;
    Ok(Json(seasonality))
}

#[utoipa::path(
    get,
    path = "/api/analytics/performancescores",
    tag = "analytics",
    responses((status = 200, description = "Notas de performance", body = [PerformanceScore]))
)]
pub async fn get_performance_scores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let scores = app_state.analytics_service.get_performance_scores().await?;
    Ok(Json(scores))
}

#[utoipa::path(
    get,
    path = "/api/analytics/performancescores/metric/{metric}",
    tag = "analytics",
    params(("metric" = String, Path, description = "Nome da métrica (sem diferenciar maiúsculas)")),
    responses(
        (status = 200, description = "Nota da métrica", body = PerformanceScore),
        (status = 404, description = "Métrica não encontrada")
    )
)]
pub async fn get_performance_score_by_metric(
    State(app_state): State<AppState>,
    Path(metric): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let score = app_state
        .analytics_service
        .get_performance_score_by_metric(&metric)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Métrica '{metric}' não encontrada."))
        })?;
    Ok(Json(score))
}
