// src/db/repo.rs

use std::marker::PhantomData;

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::entity::{Entity, Persist};

/// Repositório genérico SEM filtro de tenant.
///
/// Usado pelas coleções de análise (dados globais) e, por enquanto, por
/// fornecedores e alertas — ver a nota em `services/supplier_service.rs`.
pub struct Repository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<T>, AppError> {
        let sql = format!("SELECT * FROM {}", T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", T::TABLE, T::ID_COLUMN);
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Busca com predicado arbitrário, aplicado em memória sobre o
    /// resultado. O volume de dados aqui é pequeno (inventário de salão).
    pub async fn find<F>(&self, predicate: F) -> Result<Vec<T>, AppError>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.get_all().await?;
        rows.retain(|row| predicate(row));
        Ok(rows)
    }

    /// Remove por id. Retorna `false` se nada foi removido (no-op idempotente).
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", T::TABLE, T::ID_COLUMN);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // Parte do contrato do repositório; ainda sem chamadores nas rotas.
    #[allow(dead_code)]
    pub async fn exists<F>(&self, predicate: F) -> Result<bool, AppError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(!self.find(predicate).await?.is_empty())
    }

    #[allow(dead_code)]
    pub async fn count<F>(&self, predicate: F) -> Result<i64, AppError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.find(predicate).await?.len() as i64)
    }
}

impl<T: Persist> Repository<T> {
    pub async fn add(&self, entity: T) -> Result<T, AppError> {
        let created = entity.insert_query().fetch_one(&self.pool).await?;
        tracing::debug!(table = T::TABLE, id = %created.id(), "registro inserido");
        Ok(created)
    }

    /// Persiste o estado completo da entidade. `None` se a linha já não existe.
    pub async fn update(&self, entity: T) -> Result<Option<T>, AppError> {
        Ok(entity.update_query().fetch_optional(&self.pool).await?)
    }
}
