// src/config.rs

use crate::{
    db::{Repository, TenantRepository},
    models::{
        alert::SmartAlert,
        analytics::{
            CostAnalysis, DemandPrediction, MarketPriceAnalysis, PerformanceScore,
            SeasonalityAnalysis,
        },
        product::Product,
        supplier::Supplier,
    },
    services::{
        alert_service::AlertService, analytics_service::AnalyticsService,
        product_service::ProductService, supplier_service::SupplierService,
    },
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub product_service: ProductService,
    pub supplier_service: SupplierService,
    pub alert_service: AlertService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let product_service = ProductService::new(TenantRepository::<Product>::new(db_pool.clone()));
        let supplier_service = SupplierService::new(Repository::<Supplier>::new(db_pool.clone()));
        let alert_service = AlertService::new(Repository::<SmartAlert>::new(db_pool.clone()));
        let analytics_service = AnalyticsService::new(
            Repository::<DemandPrediction>::new(db_pool.clone()),
            Repository::<CostAnalysis>::new(db_pool.clone()),
            Repository::<MarketPriceAnalysis>::new(db_pool.clone()),
            Repository::<SeasonalityAnalysis>::new(db_pool.clone()),
            Repository::<PerformanceScore>::new(db_pool.clone()),
        );

        Ok(Self {
            db_pool,
            jwt_secret,
            product_service,
            supplier_service,
            alert_service,
            analytics_service,
        })
    }
}
