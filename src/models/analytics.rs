// src/models/analytics.rs
//
// Coleções de análise ("IA"): registros globais, somente leitura pela API,
// populados por seed. Nenhuma delas tem escopo de tenant nesta versão.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::entity::Entity;

// --- Tendência de custo ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cost_trend")]
pub enum CostTrend {
    Good,
    Warning,
    Excellent,
}

// --- Status de performance ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "performance_status")]
pub enum PerformanceStatus {
    Success,
    Warning,
    Error,
}

/// Previsão de demanda diária. `actual` fica nulo para datas futuras.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemandPrediction {
    pub prediction_id: Uuid,
    pub date: DateTime<Utc>,
    pub actual: Option<i32>,
    pub predicted: i32,
    pub confidence: i32,
    pub created_at: DateTime<Utc>,
}

impl Entity for DemandPrediction {
    const TABLE: &'static str = "demand_predictions";
    const ID_COLUMN: &'static str = "prediction_id";

    fn id(&self) -> Uuid {
        self.prediction_id
    }
}

/// Análise de custo por categoria (orçado x gasto).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub cost_analysis_id: Uuid,
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub variance: Decimal,
    pub trend: CostTrend,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for CostAnalysis {
    const TABLE: &'static str = "cost_analyses";
    const ID_COLUMN: &'static str = "cost_analysis_id";

    fn id(&self) -> Uuid {
        self.cost_analysis_id
    }
}

/// Comparação do preço praticado com o mercado, por produto.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceAnalysis {
    pub market_price_id: Uuid,
    pub product: String,
    pub current_price: Decimal,
    pub market_avg: Decimal,
    pub best_price: Decimal,
    pub savings: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for MarketPriceAnalysis {
    const TABLE: &'static str = "market_price_analyses";
    const ID_COLUMN: &'static str = "market_price_id";

    fn id(&self) -> Uuid {
        self.market_price_id
    }
}

/// Sazonalidade mensal por linha de serviço.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityAnalysis {
    pub seasonality_id: Uuid,
    pub month: String,
    pub hair_care: i32,
    pub skin_care: i32,
    pub nails: i32,
    pub equipment: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for SeasonalityAnalysis {
    const TABLE: &'static str = "seasonality_analyses";
    const ID_COLUMN: &'static str = "seasonality_id";

    fn id(&self) -> Uuid {
        self.seasonality_id
    }
}

/// Nota de uma métrica de performance contra a sua meta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    pub score_id: Uuid,
    pub metric: String,
    pub score: i32,
    pub target: i32,
    pub status: PerformanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for PerformanceScore {
    const TABLE: &'static str = "performance_scores";
    const ID_COLUMN: &'static str = "score_id";

    fn id(&self) -> Uuid {
        self.score_id
    }
}
