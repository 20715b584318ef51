// src/docs.rs
//
// Documento OpenAPI servido em /api-docs/openapi.json. O front (e o
// Insomnia da equipe) importa direto daqui.

use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    alert::{AlertType, CreateSmartAlertPayload, SmartAlert},
    analytics::{
        CostAnalysis, CostTrend, DemandPrediction, MarketPriceAnalysis, PerformanceScore,
        PerformanceStatus, SeasonalityAnalysis,
    },
    product::{CreateProductPayload, Product, TrendType, UpdateProductPayload},
    supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salon Inventory API",
        description = "Backend de estoque multi-tenant para salões de beleza."
    ),
    paths(
        handlers::products::get_all_products,
        handlers::products::get_product_by_id,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::get_critical_stock,
        handlers::products::get_products_to_reorder,
        handlers::suppliers::get_all_suppliers,
        handlers::suppliers::get_supplier_by_id,
        handlers::suppliers::create_supplier,
        handlers::suppliers::update_supplier,
        handlers::suppliers::delete_supplier,
        handlers::suppliers::get_top_suppliers,
        handlers::alerts::get_all_alerts,
        handlers::alerts::get_critical_alerts,
        handlers::alerts::get_alerts_by_type,
        handlers::alerts::get_unread_alerts,
        handlers::alerts::create_alert,
        handlers::alerts::mark_alert_as_read,
        handlers::alerts::delete_alert,
        handlers::analytics::get_demand_predictions,
        handlers::analytics::get_latest_demand_predictions,
        handlers::analytics::get_cost_analyses,
        handlers::analytics::get_cost_analysis_by_category,
        handlers::analytics::get_market_prices,
        handlers::analytics::get_market_price_by_product,
        handlers::analytics::get_seasonality,
        handlers::analytics::get_seasonality_by_month,
        handlers::analytics::get_performance_scores,
        handlers::analytics::get_performance_score_by_metric,
    ),
    components(schemas(
        Product,
        TrendType,
        CreateProductPayload,
        UpdateProductPayload,
        Supplier,
        CreateSupplierPayload,
        UpdateSupplierPayload,
        SmartAlert,
        AlertType,
        CreateSmartAlertPayload,
        DemandPrediction,
        CostAnalysis,
        CostTrend,
        MarketPriceAnalysis,
        SeasonalityAnalysis,
        PerformanceScore,
        PerformanceStatus,
    )),
    tags(
        (name = "products", description = "Produtos do salão (escopo de tenant)"),
        (name = "suppliers", description = "Fornecedores e ranking"),
        (name = "alerts", description = "Alertas inteligentes de estoque"),
        (name = "analytics", description = "Dados de análise, somente leitura")
    )
)]
pub struct ApiDoc;
