// src/services/product_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TenantRepository,
    models::product::{CreateProductPayload, Product, TrendType, UpdateProductPayload},
};

#[derive(Clone)]
pub struct ProductService {
    product_repo: TenantRepository<Product>,
}

impl ProductService {
    pub fn new(product_repo: TenantRepository<Product>) -> Self {
        Self { product_repo }
    }

    pub async fn get_all(&self, tenant_id: Uuid) -> Result<Vec<Product>, AppError> {
        self.product_repo.get_all_by_tenant(tenant_id).await
    }

    pub async fn get_by_id(&self, id: Uuid, tenant_id: Uuid) -> Result<Option<Product>, AppError> {
        self.product_repo.get_by_id_and_tenant(id, tenant_id).await
    }

    pub async fn create(
        &self,
        payload: CreateProductPayload,
        tenant_id: Uuid,
    ) -> Result<Product, AppError> {
        let now = Utc::now();
        let product = Product {
            product_id: Uuid::new_v4(),
            // O repositório carimba o tenant certo antes do INSERT.
            tenant_id: Uuid::nil(),
            name: payload.name,
            current_stock: payload.current_stock,
            optimal_stock: payload.optimal_stock,
            reorder_point: payload.reorder_point,
            trend: payload.trend,
            cost: payload.cost,
            created_at: now,
            updated_at: now,
        };
        self.product_repo.add(product, tenant_id).await
    }

    /// Atualização parcial: campos ausentes no payload ficam como estão.
    /// `None` se o produto não existir para esse tenant.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateProductPayload,
        tenant_id: Uuid,
    ) -> Result<Option<Product>, AppError> {
        let Some(existing) = self.product_repo.get_by_id_and_tenant(id, tenant_id).await? else {
            return Ok(None);
        };

        let merged = merge_update(existing, payload);
        // Se a linha sumiu entre a leitura e a escrita, o UPDATE devolve
        // zero linhas e o resultado volta a ser None (404 para o cliente).
        self.product_repo.update(merged, tenant_id).await
    }

    pub async fn delete(&self, id: Uuid, tenant_id: Uuid) -> Result<bool, AppError> {
        self.product_repo.delete(id, tenant_id).await
    }

    /// Produtos cuja tendência já está marcada como crítica.
    pub async fn get_critical_stock(&self, tenant_id: Uuid) -> Result<Vec<Product>, AppError> {
        self.product_repo
            .find_by_tenant(|p| p.trend == TrendType::Critical, tenant_id)
            .await
    }

    /// Produtos com estoque no ponto de reposição ou abaixo dele.
    pub async fn get_products_to_reorder(&self, tenant_id: Uuid) -> Result<Vec<Product>, AppError> {
        self.product_repo
            .find_by_tenant(|p| p.current_stock <= p.reorder_point, tenant_id)
            .await
    }
}

fn merge_update(mut product: Product, payload: UpdateProductPayload) -> Product {
    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(current_stock) = payload.current_stock {
        product.current_stock = current_stock;
    }
    if let Some(optimal_stock) = payload.optimal_stock {
        product.optimal_stock = optimal_stock;
    }
    if let Some(reorder_point) = payload.reorder_point {
        product.reorder_point = reorder_point;
    }
    if let Some(trend) = payload.trend {
        product.trend = trend;
    }
    if let Some(cost) = payload.cost {
        product.cost = cost;
    }
    product.updated_at = Utc::now();
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn merge_so_sobrescreve_campos_presentes() {
        let tenant_id = Uuid::new_v4();
        let original = Product::sample(tenant_id);
        let payload = UpdateProductPayload {
            current_stock: Some(42),
            cost: Some(Decimal::new(9990, 2)),
            ..Default::default()
        };

        let merged = merge_update(original.clone(), payload);

        assert_eq!(merged.current_stock, 42);
        assert_eq!(merged.cost, Decimal::new(9990, 2));
        // O resto continua intacto
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.optimal_stock, original.optimal_stock);
        assert_eq!(merged.reorder_point, original.reorder_point);
        assert_eq!(merged.trend, original.trend);
        assert_eq!(merged.tenant_id, tenant_id);
        assert_eq!(merged.product_id, original.product_id);
    }

    #[test]
    fn merge_sempre_renova_o_updated_at() {
        let mut original = Product::sample(Uuid::new_v4());
        original.updated_at = original.updated_at - chrono::Duration::hours(1);
        let before = original.updated_at;

        let merged = merge_update(original, UpdateProductPayload::default());
        assert!(merged.updated_at > before);
    }
}
