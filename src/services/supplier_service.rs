// src/services/supplier_service.rs
//
// Fornecedores carregam a coluna tenant_id no banco, mas todas as rotas
// operam sem escopo de tenant, como no sistema que este backend substitui.
// TODO: migrar para TenantRepository<Supplier> quando o front passar a
// mandar o X-Tenant-Id também nessas telas.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Repository,
    models::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload},
};

const DEFAULT_TOP_COUNT: usize = 10;

#[derive(Clone)]
pub struct SupplierService {
    supplier_repo: Repository<Supplier>,
}

impl SupplierService {
    pub fn new(supplier_repo: Repository<Supplier>) -> Self {
        Self { supplier_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Supplier>, AppError> {
        self.supplier_repo.get_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Supplier>, AppError> {
        self.supplier_repo.get_by_id(id).await
    }

    pub async fn create(&self, payload: CreateSupplierPayload) -> Result<Supplier, AppError> {
        let now = Utc::now();
        let supplier = Supplier {
            supplier_id: Uuid::new_v4(),
            // Sem tenant na rota; fica o UUID nulo até a migração acima.
            tenant_id: Uuid::nil(),
            name: payload.name,
            reliability: payload.reliability,
            price_score: payload.price_score,
            delivery_score: payload.delivery_score,
            quality_score: payload.quality_score,
            overall_score: payload.overall_score,
            created_at: now,
            updated_at: now,
        };
        self.supplier_repo.add(supplier).await
    }

    /// Atualização parcial, mesmo contrato da rota de produtos.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateSupplierPayload,
    ) -> Result<Option<Supplier>, AppError> {
        let Some(existing) = self.supplier_repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let merged = merge_update(existing, payload);
        self.supplier_repo.update(merged).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.supplier_repo.delete_by_id(id).await
    }

    /// Ranking por nota geral, decrescente. `count` ausente vira 10.
    pub async fn get_top(&self, count: Option<usize>) -> Result<Vec<Supplier>, AppError> {
        let suppliers = self.supplier_repo.get_all().await?;
        Ok(rank_top(suppliers, count.unwrap_or(DEFAULT_TOP_COUNT)))
    }
}

fn merge_update(mut supplier: Supplier, payload: UpdateSupplierPayload) -> Supplier {
    if let Some(name) = payload.name {
        supplier.name = name;
    }
    if let Some(reliability) = payload.reliability {
        supplier.reliability = reliability;
    }
    if let Some(price_score) = payload.price_score {
        supplier.price_score = price_score;
    }
    if let Some(delivery_score) = payload.delivery_score {
        supplier.delivery_score = delivery_score;
    }
    if let Some(quality_score) = payload.quality_score {
        supplier.quality_score = quality_score;
    }
    if let Some(overall_score) = payload.overall_score {
        supplier.overall_score = overall_score;
    }
    supplier.updated_at = Utc::now();
    supplier
}

fn rank_top(mut suppliers: Vec<Supplier>, count: usize) -> Vec<Supplier> {
    // sort estável: empates preservam a ordem vinda do banco
    suppliers.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    suppliers.truncate(count);
    suppliers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn supplier(name: &str, overall_score: i32) -> Supplier {
        let now = Utc::now();
        Supplier {
            supplier_id: Uuid::new_v4(),
            tenant_id: Uuid::nil(),
            name: name.to_string(),
            reliability: 80,
            price_score: 80,
            delivery_score: 80,
            quality_score: 80,
            overall_score,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn ranking_ordena_pela_nota_geral_decrescente() {
        let suppliers = vec![
            supplier("B", 70),
            supplier("A", 95),
            supplier("C", 88),
        ];

        let top = rank_top(suppliers, 10);
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn ranking_corta_no_tamanho_pedido() {
        let suppliers = vec![
            supplier("A", 95),
            supplier("B", 70),
            supplier("C", 88),
        ];

        let top = rank_top(suppliers, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "A");
        assert_eq!(top[1].name, "C");
    }

    #[test]
    fn merge_parcial_preserva_as_outras_notas() {
        let original = supplier("Beauté Paris", 85);
        let payload = UpdateSupplierPayload {
            reliability: Some(99),
            ..Default::default()
        };

        let merged = merge_update(original.clone(), payload);
        assert_eq!(merged.reliability, 99);
        assert_eq!(merged.overall_score, 85);
        assert_eq!(merged.name, "Beauté Paris");
    }
}
