// src/services/alert_service.rs
//
// Mesmo caso dos fornecedores: a coluna tenant_id existe, as rotas ainda
// não a usam. TODO: trocar por TenantRepository<SmartAlert> junto com a
// migração do front descrita em supplier_service.rs.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Repository,
    models::alert::{AlertType, CreateSmartAlertPayload, SmartAlert},
};

#[derive(Clone)]
pub struct AlertService {
    alert_repo: Repository<SmartAlert>,
}

impl AlertService {
    pub fn new(alert_repo: Repository<SmartAlert>) -> Self {
        Self { alert_repo }
    }

    /// Todos os alertas, mais recentes primeiro.
    pub async fn get_all(&self) -> Result<Vec<SmartAlert>, AppError> {
        let alerts = self.alert_repo.get_all().await?;
        Ok(sort_recent_first(alerts))
    }

    pub async fn get_by_type(&self, alert_type: AlertType) -> Result<Vec<SmartAlert>, AppError> {
        let alerts = self
            .alert_repo
            .find(|a| a.alert_type == alert_type)
            .await?;
        Ok(sort_recent_first(alerts))
    }

    pub async fn get_critical(&self) -> Result<Vec<SmartAlert>, AppError> {
        self.get_by_type(AlertType::Critical).await
    }

    pub async fn get_unread(&self) -> Result<Vec<SmartAlert>, AppError> {
        let alerts = self.alert_repo.find(|a| !a.is_read).await?;
        Ok(sort_recent_first(alerts))
    }

    /// Todo alerta nasce não lido, não importa o que venha no payload.
    pub async fn create(&self, payload: CreateSmartAlertPayload) -> Result<SmartAlert, AppError> {
        let alert = SmartAlert {
            alert_id: Uuid::new_v4(),
            tenant_id: Uuid::nil(),
            alert_type: payload.alert_type,
            message: payload.message,
            count: payload.count,
            is_read: false,
            created_at: Utc::now(),
        };
        self.alert_repo.add(alert).await
    }

    /// Marca como lido. Idempotente: marcar um alerta já lido também
    /// retorna `true`; só um id inexistente retorna `false`.
    pub async fn mark_as_read(&self, id: Uuid) -> Result<bool, AppError> {
        let Some(mut alert) = self.alert_repo.get_by_id(id).await? else {
            return Ok(false);
        };

        alert.is_read = true;
        self.alert_repo.update(alert).await?;
        Ok(true)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.alert_repo.delete_by_id(id).await
    }
}

fn sort_recent_first(mut alerts: Vec<SmartAlert>) -> Vec<SmartAlert> {
    alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn alert(message: &str, minutes_ago: i64) -> SmartAlert {
        SmartAlert {
            alert_id: Uuid::new_v4(),
            tenant_id: Uuid::nil(),
            alert_type: AlertType::Info,
            message: message.to_string(),
            count: 1,
            is_read: false,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn alertas_saem_do_mais_novo_para_o_mais_velho() {
        let alerts = vec![alert("velho", 60), alert("novo", 1), alert("meio", 30)];

        let sorted = sort_recent_first(alerts);
        let messages: Vec<&str> = sorted.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["novo", "meio", "velho"]);
    }
}
