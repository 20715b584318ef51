// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::db::entity::{Entity, Persist, TenantOwned};

// --- Tendência de estoque ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "trend_type")]
pub enum TrendType {
    Up,
    Down,
    Critical,
}

// --- Produto ---
// Um produto pertence a exatamente um tenant (salão).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub current_stock: i32,
    pub optimal_stock: i32,
    pub reorder_point: i32,
    pub trend: TrendType,
    pub cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const ID_COLUMN: &'static str = "product_id";

    fn id(&self) -> Uuid {
        self.product_id
    }
}

impl TenantOwned for Product {
    fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    fn set_tenant_id(&mut self, tenant_id: Uuid) {
        self.tenant_id = tenant_id;
    }
}

impl Persist for Product {
    fn insert_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO products \
             (product_id, tenant_id, name, current_stock, optimal_stock, reorder_point, trend, cost, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(self.product_id)
        .bind(self.tenant_id)
        .bind(self.name.as_str())
        .bind(self.current_stock)
        .bind(self.optimal_stock)
        .bind(self.reorder_point)
        .bind(self.trend)
        .bind(self.cost)
        .bind(self.created_at)
        .bind(self.updated_at)
    }

    fn update_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        // O tenant_id no WHERE é a segunda trava: a escrita só acontece na
        // linha do próprio tenant.
        sqlx::query_as(
            "UPDATE products \
             SET name = $3, current_stock = $4, optimal_stock = $5, reorder_point = $6, trend = $7, cost = $8, updated_at = $9 \
             WHERE product_id = $1 AND tenant_id = $2 \
             RETURNING *",
        )
        .bind(self.product_id)
        .bind(self.tenant_id)
        .bind(self.name.as_str())
        .bind(self.current_stock)
        .bind(self.optimal_stock)
        .bind(self.reorder_point)
        .bind(self.trend)
        .bind(self.cost)
        .bind(self.updated_at)
    }
}

// ---
// Validação customizada para campos Decimal
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

fn default_trend() -> TrendType {
    TrendType::Up
}

// ---
// Payload: CreateProduct
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, max = 200, message = "O nome é obrigatório (máximo 200 caracteres)."))]
    pub name: String,

    #[validate(range(min = 0, message = "O estoque atual não pode ser negativo."))]
    #[serde(default)]
    pub current_stock: i32,

    #[validate(range(min = 0, message = "O estoque ótimo não pode ser negativo."))]
    #[serde(default)]
    pub optimal_stock: i32,

    #[validate(range(min = 0, message = "O ponto de reposição não pode ser negativo."))]
    #[serde(default)]
    pub reorder_point: i32,

    // Se o JSON não trouxer a tendência, assume "Up" (mesmo default do
    // sistema original).
    #[serde(default = "default_trend")]
    pub trend: TrendType,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub cost: Decimal,
}

// ---
// Payload: UpdateProduct (parcial: só os campos presentes sobrescrevem)
// ---
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, max = 200, message = "O nome não pode ser vazio (máximo 200 caracteres)."))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "O estoque atual não pode ser negativo."))]
    pub current_stock: Option<i32>,

    #[validate(range(min = 0, message = "O estoque ótimo não pode ser negativo."))]
    pub optimal_stock: Option<i32>,

    #[validate(range(min = 0, message = "O ponto de reposição não pode ser negativo."))]
    pub reorder_point: Option<i32>,

    pub trend: Option<TrendType>,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Option<Decimal>,
}

#[cfg(test)]
impl Product {
    pub fn sample(tenant_id: Uuid) -> Self {
        Self {
            product_id: Uuid::new_v4(),
            tenant_id,
            name: "Shampoo".to_string(),
            current_stock: 5,
            optimal_stock: 10,
            reorder_point: 6,
            trend: TrendType::Up,
            cost: Decimal::new(120, 0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
