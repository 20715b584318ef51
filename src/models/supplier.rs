// src/models/supplier.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::entity::{Entity, Persist, TenantOwned};

// --- Fornecedor ---
// Cinco notas de 0 a 100 (confiabilidade, preço, entrega, qualidade, geral).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub supplier_id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub reliability: i32,
    pub price_score: i32,
    pub delivery_score: i32,
    pub quality_score: i32,
    pub overall_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Supplier {
    const TABLE: &'static str = "suppliers";
    const ID_COLUMN: &'static str = "supplier_id";

    fn id(&self) -> Uuid {
        self.supplier_id
    }
}

impl TenantOwned for Supplier {
    fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    fn set_tenant_id(&mut self, tenant_id: Uuid) {
        self.tenant_id = tenant_id;
    }
}

impl Persist for Supplier {
    fn insert_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO suppliers \
             (supplier_id, tenant_id, name, reliability, price_score, delivery_score, quality_score, overall_score, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(self.supplier_id)
        .bind(self.tenant_id)
        .bind(self.name.as_str())
        .bind(self.reliability)
        .bind(self.price_score)
        .bind(self.delivery_score)
        .bind(self.quality_score)
        .bind(self.overall_score)
        .bind(self.created_at)
        .bind(self.updated_at)
    }

    fn update_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE suppliers \
             SET name = $2, reliability = $3, price_score = $4, delivery_score = $5, quality_score = $6, overall_score = $7, updated_at = $8 \
             WHERE supplier_id = $1 \
             RETURNING *",
        )
        .bind(self.supplier_id)
        .bind(self.name.as_str())
        .bind(self.reliability)
        .bind(self.price_score)
        .bind(self.delivery_score)
        .bind(self.quality_score)
        .bind(self.overall_score)
        .bind(self.updated_at)
    }
}

// ---
// Payload: CreateSupplier
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierPayload {
    #[validate(length(min = 1, max = 200, message = "O nome é obrigatório (máximo 200 caracteres)."))]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "A confiabilidade deve estar entre 0 e 100."))]
    #[serde(default)]
    pub reliability: i32,

    #[validate(range(min = 0, max = 100, message = "A nota de preço deve estar entre 0 e 100."))]
    #[serde(default)]
    pub price_score: i32,

    #[validate(range(min = 0, max = 100, message = "A nota de entrega deve estar entre 0 e 100."))]
    #[serde(default)]
    pub delivery_score: i32,

    #[validate(range(min = 0, max = 100, message = "A nota de qualidade deve estar entre 0 e 100."))]
    #[serde(default)]
    pub quality_score: i32,

    #[validate(range(min = 0, max = 100, message = "A nota geral deve estar entre 0 e 100."))]
    #[serde(default)]
    pub overall_score: i32,
}

// ---
// Payload: UpdateSupplier (parcial)
// ---
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierPayload {
    #[validate(length(min = 1, max = 200, message = "O nome não pode ser vazio (máximo 200 caracteres)."))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 100, message = "A confiabilidade deve estar entre 0 e 100."))]
    pub reliability: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "A nota de preço deve estar entre 0 e 100."))]
    pub price_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "A nota de entrega deve estar entre 0 e 100."))]
    pub delivery_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "A nota de qualidade deve estar entre 0 e 100."))]
    pub quality_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "A nota geral deve estar entre 0 e 100."))]
    pub overall_score: Option<i32>,
}
