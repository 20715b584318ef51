// src/db/tenant_repo.rs

use std::marker::PhantomData;

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::entity::{Persist, TenantOwned};

/// Repositório genérico COM isolamento de tenant.
///
/// O `tenant_id` é sempre um parâmetro independente, nunca derivado do
/// estado da entidade nas leituras, e o filtro entra na própria query.
/// Mesmo que um service esqueça de conferir o resultado, uma linha de
/// outro tenant nunca chega a ser carregada.
pub struct TenantRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for TenantRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: TenantOwned> TenantRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn select_all_sql() -> String {
        format!("SELECT * FROM {} WHERE tenant_id = $1", T::TABLE)
    }

    fn select_by_id_sql() -> String {
        format!(
            "SELECT * FROM {} WHERE {} = $1 AND tenant_id = $2",
            T::TABLE,
            T::ID_COLUMN
        )
    }

    fn delete_sql() -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1 AND tenant_id = $2",
            T::TABLE,
            T::ID_COLUMN
        )
    }

    pub async fn get_all_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<T>, AppError> {
        let sql = Self::select_all_sql();
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// `None` tanto para "não existe" quanto para "existe mas é de outro
    /// tenant" — o chamador não consegue distinguir os dois casos.
    pub async fn get_by_id_and_tenant(
        &self,
        id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<T>, AppError> {
        let sql = Self::select_by_id_sql();
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// O filtro de tenant roda no banco; o predicado só enxerga linhas que
    /// já pertencem ao tenant pedido.
    pub async fn find_by_tenant<F>(&self, predicate: F, tenant_id: Uuid) -> Result<Vec<T>, AppError>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.get_all_by_tenant(tenant_id).await?;
        rows.retain(|row| predicate(row));
        Ok(rows)
    }

    fn stamped(mut entity: T, tenant_id: Uuid) -> T {
        entity.set_tenant_id(tenant_id);
        entity
    }

    /// Carimba o `tenant_id` na entidade antes do INSERT, sobrescrevendo
    /// qualquer valor que o chamador tenha colocado no campo.
    pub async fn add(&self, entity: T, tenant_id: Uuid) -> Result<T, AppError>
    where
        T: Persist,
    {
        let entity = Self::stamped(entity, tenant_id);
        let created = entity.insert_query().fetch_one(&self.pool).await?;
        tracing::debug!(table = T::TABLE, id = %created.id(), %tenant_id, "registro inserido");
        Ok(created)
    }

    /// Persiste o estado completo da entidade, desde que ela pertença ao
    /// tenant informado. Se não pertencer, retorna `None` — a resposta é a
    /// mesma de um registro inexistente, de propósito.
    pub async fn update(&self, entity: T, tenant_id: Uuid) -> Result<Option<T>, AppError>
    where
        T: Persist,
    {
        if entity.tenant_id() != tenant_id {
            return Ok(None);
        }
        // O WHERE do update_query também carrega o tenant_id, então a
        // conferência acima e a escrita caem na mesma linha.
        Ok(entity.update_query().fetch_optional(&self.pool).await?)
    }

    /// Remove apenas se id E tenant casarem. `false` é um no-op idempotente.
    pub async fn delete(&self, id: Uuid, tenant_id: Uuid) -> Result<bool, AppError> {
        let sql = Self::delete_sql();
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Parte do contrato do repositório; ainda sem chamadores nas rotas.
    // Delegam em find_by_tenant, então o filtro de tenant continua no SQL.
    #[allow(dead_code)]
    pub async fn exists<F>(&self, predicate: F, tenant_id: Uuid) -> Result<bool, AppError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(!self.find_by_tenant(predicate, tenant_id).await?.is_empty())
    }

    #[allow(dead_code)]
    pub async fn count<F>(&self, predicate: F, tenant_id: Uuid) -> Result<i64, AppError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.find_by_tenant(predicate, tenant_id).await?.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Product;

    fn lazy_pool() -> PgPool {
        // Pool que nunca conecta de fato; suficiente para os caminhos que
        // não chegam ao banco.
        PgPool::connect_lazy("postgres://localhost/unused").unwrap()
    }

    #[test]
    fn toda_query_de_leitura_filtra_por_tenant() {
        assert_eq!(
            TenantRepository::<Product>::select_all_sql(),
            "SELECT * FROM products WHERE tenant_id = $1"
        );
        assert_eq!(
            TenantRepository::<Product>::select_by_id_sql(),
            "SELECT * FROM products WHERE product_id = $1 AND tenant_id = $2"
        );
        assert_eq!(
            TenantRepository::<Product>::delete_sql(),
            "DELETE FROM products WHERE product_id = $1 AND tenant_id = $2"
        );
    }

    #[test]
    fn add_carimba_o_tenant_mesmo_com_payload_forjado() {
        let tenant_real = Uuid::new_v4();
        let tenant_forjado = Uuid::new_v4();

        // Entidade chega com um tenant que não é o da requisição
        let forged = Product::sample(tenant_forjado);
        let stamped = TenantRepository::<Product>::stamped(forged, tenant_real);

        // É este valor que o INSERT vai bindar
        assert_eq!(stamped.tenant_id, tenant_real);
    }

    #[tokio::test]
    async fn update_com_tenant_errado_vira_not_found_sem_tocar_o_banco() {
        let repo = TenantRepository::<Product>::new(lazy_pool());
        let tenant_a = Uuid::new_v4();
        let tenant_b = Uuid::new_v4();

        let product = Product::sample(tenant_a);
        let result = repo.update(product, tenant_b).await.unwrap();
        assert!(result.is_none());
    }
}
