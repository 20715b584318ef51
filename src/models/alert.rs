// src/models/alert.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::entity::{Entity, Persist, TenantOwned};

// --- Tipo de alerta ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "alert_type")]
pub enum AlertType {
    Critical,
    Warning,
    Info,
    Success,
}

// Aceita "critical", "CRITICAL", etc. na rota /alerts/type/{type}.
impl FromStr for AlertType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            _ => Err(()),
        }
    }
}

// --- Alerta inteligente ---
// Nasce não lido; a transição para lido é de mão única.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmartAlert {
    pub alert_id: Uuid,
    pub tenant_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub count: i32,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for SmartAlert {
    const TABLE: &'static str = "smart_alerts";
    const ID_COLUMN: &'static str = "alert_id";

    fn id(&self) -> Uuid {
        self.alert_id
    }
}

impl TenantOwned for SmartAlert {
    fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    fn set_tenant_id(&mut self, tenant_id: Uuid) {
        self.tenant_id = tenant_id;
    }
}

impl Persist for SmartAlert {
    fn insert_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO smart_alerts \
             (alert_id, tenant_id, type, message, count, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(self.alert_id)
        .bind(self.tenant_id)
        .bind(self.alert_type)
        .bind(self.message.as_str())
        .bind(self.count)
        .bind(self.is_read)
        .bind(self.created_at)
    }

    fn update_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE smart_alerts \
             SET type = $2, message = $3, count = $4, is_read = $5 \
             WHERE alert_id = $1 \
             RETURNING *",
        )
        .bind(self.alert_id)
        .bind(self.alert_type)
        .bind(self.message.as_str())
        .bind(self.count)
        .bind(self.is_read)
    }
}

fn default_count() -> i32 {
    1
}

// ---
// Payload: CreateSmartAlert
// ---
// Não existe campo de leitura: todo alerta é criado como não lido,
// independentemente do que o cliente mandar.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSmartAlertPayload {
    #[serde(rename = "type")]
    pub alert_type: AlertType,

    #[validate(length(min = 1, max = 500, message = "A mensagem é obrigatória (máximo 500 caracteres)."))]
    pub message: String,

    #[validate(range(min = 0, message = "O contador não pode ser negativo."))]
    #[serde(default = "default_count")]
    pub count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_do_tipo_ignora_maiusculas() {
        assert_eq!("critical".parse::<AlertType>(), Ok(AlertType::Critical));
        assert_eq!("WARNING".parse::<AlertType>(), Ok(AlertType::Warning));
        assert_eq!("Info".parse::<AlertType>(), Ok(AlertType::Info));
        assert_eq!("Success".parse::<AlertType>(), Ok(AlertType::Success));
        assert!("urgente".parse::<AlertType>().is_err());
    }
}
