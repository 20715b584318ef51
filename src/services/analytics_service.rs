// src/services/analytics_service.rs
//
// Camada de leitura sobre as coleções de análise. Nenhuma rota de escrita:
// os dados entram por seed (e, no futuro, por um job de recálculo).

use chrono::{DateTime, Duration, Utc};

use crate::{
    common::error::AppError,
    db::Repository,
    models::analytics::{
        CostAnalysis, DemandPrediction, MarketPriceAnalysis, PerformanceScore,
        SeasonalityAnalysis,
    },
};

const DEFAULT_LATEST_DAYS: i64 = 7;

#[derive(Clone)]
pub struct AnalyticsService {
    demand_repo: Repository<DemandPrediction>,
    cost_repo: Repository<CostAnalysis>,
    market_price_repo: Repository<MarketPriceAnalysis>,
    seasonality_repo: Repository<SeasonalityAnalysis>,
    performance_repo: Repository<PerformanceScore>,
}

impl AnalyticsService {
    pub fn new(
        demand_repo: Repository<DemandPrediction>,
        cost_repo: Repository<CostAnalysis>,
        market_price_repo: Repository<MarketPriceAnalysis>,
        seasonality_repo: Repository<SeasonalityAnalysis>,
        performance_repo: Repository<PerformanceScore>,
    ) -> Self {
        Self {
            demand_repo,
            cost_repo,
            market_price_repo,
            seasonality_repo,
            performance_repo,
        }
    }

    /// Todas as previsões, em ordem cronológica.
    pub async fn get_demand_predictions(&self) -> Result<Vec<DemandPrediction>, AppError> {
        let mut predictions = self.demand_repo.get_all().await?;
        predictions.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(predictions)
    }

    /// Previsões a partir de N dias atrás (meia-noite UTC), em ordem
    /// cronológica. `days` ausente vira 7; uma janela que não cabe num
    /// `Duration` é rejeitada como parâmetro inválido (400).
    pub async fn get_latest_demand_predictions(
        &self,
        days: Option<i64>,
    ) -> Result<Vec<DemandPrediction>, AppError> {
        let days = days.unwrap_or(DEFAULT_LATEST_DAYS);
        let from_date = latest_cutoff(days).ok_or_else(|| {
            AppError::InvalidParameter(format!("Janela de dias inválida: {days}."))
        })?;

        let mut predictions = self.demand_repo.find(|p| p.date >= from_date).await?;
        predictions.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(predictions)
    }

    pub async fn get_cost_analyses(&self) -> Result<Vec<CostAnalysis>, AppError> {
        self.cost_repo.get_all().await
    }

    /// Busca por nome de categoria, sem diferenciar maiúsculas.
    pub async fn get_cost_analysis_by_category(
        &self,
        category: &str,
    ) -> Result<Option<CostAnalysis>, AppError> {
        let matches = self
            .cost_repo
            .find(|c| c.category.eq_ignore_ascii_case(category))
            .await?;
        Ok(matches.into_iter().next())
    }

    pub async fn get_market_price_analyses(&self) -> Result<Vec<MarketPriceAnalysis>, AppError> {
        self.market_price_repo.get_all().await
    }

    pub async fn get_market_price_by_product(
        &self,
        product: &str,
    ) -> Result<Option<MarketPriceAnalysis>, AppError> {
        let matches = self
            .market_price_repo
            .find(|m| m.product.eq_ignore_ascii_case(product))
            .await?;
        Ok(matches.into_iter().next())
    }

    pub async fn get_seasonality_analyses(&self) -> Result<Vec<SeasonalityAnalysis>, AppError> {
        self.seasonality_repo.get_all().await
    }

    /// O mês é o nome por extenso usado no seed ("Janvier", ...).
    pub async fn get_seasonality_by_month(
        &self,
        month: &str,
    ) -> Result<Option<SeasonalityAnalysis>, AppError> {
        let matches = self
            .seasonality_repo
            .find(|s| s.month.eq_ignore_ascii_case(month))
            .await?;
        Ok(matches.into_iter().next())
    }

    pub async fn get_performance_scores(&self) -> Result<Vec<PerformanceScore>, AppError> {
        self.performance_repo.get_all().await
    }

    pub async fn get_performance_score_by_metric(
        &self,
        metric: &str,
    ) -> Result<Option<PerformanceScore>, AppError> {
        let matches = self
            .performance_repo
            .find(|p| p.metric.eq_ignore_ascii_case(metric))
            .await?;
        Ok(matches.into_iter().next())
    }
}

/// Meia-noite UTC de hoje menos `days`. `None` quando a janela não cabe
/// num `Duration` — o valor vem direto da query string, então pode ser
/// qualquer i64.
fn latest_cutoff(days: i64) -> Option<DateTime<Utc>> {
    let midnight = Utc::now().date_naive().and_hms_opt(0, 0, 0)?.and_utc();
    midnight.checked_sub_signed(Duration::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn lazy_service() -> AnalyticsService {
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        AnalyticsService::new(
            Repository::new(pool.clone()),
            Repository::new(pool.clone()),
            Repository::new(pool.clone()),
            Repository::new(pool.clone()),
            Repository::new(pool),
        )
    }

    #[test]
    fn corte_de_sete_dias_cai_na_meia_noite_de_uma_semana_atras() {
        let cutoff = latest_cutoff(7).unwrap();
        let diff = Utc::now() - cutoff;
        assert!(diff >= Duration::days(7));
        assert!(diff < Duration::days(8));
    }

    #[test]
    fn janela_que_nao_cabe_num_duration_nao_tem_corte() {
        assert!(latest_cutoff(i64::MAX).is_none());
        assert!(latest_cutoff(i64::MIN).is_none());
    }

    #[tokio::test]
    async fn dias_absurdos_viram_parametro_invalido_sem_tocar_o_banco() {
        let service = lazy_service();
        let result = service.get_latest_demand_predictions(Some(i64::MAX)).await;
        assert!(matches!(result, Err(AppError::InvalidParameter(_))));
    }
}
