// src/db/entity.rs

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

/// Metadados mínimos que os repositórios genéricos precisam para montar
/// as queries de uma entidade: o nome da tabela e da coluna de chave.
///
/// Os nomes vêm de constantes do trait (nunca de entrada do usuário),
/// então o `format!` nos repositórios não abre superfície de injeção.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Unpin + Send + Sync + Sized {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;

    fn id(&self) -> Uuid;
}

/// Entidades que podem ser gravadas: cada uma sabe montar o seu próprio
/// `INSERT ... RETURNING *` e o `UPDATE` de linha inteira. Os repositórios
/// só executam a query já preparada.
pub trait Persist: Entity {
    fn insert_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments>;

    /// UPDATE de linha inteira. Retorna zero linhas se o registro
    /// não existir mais (ou, nas entidades com tenant, se o WHERE
    /// com `tenant_id` não casar).
    fn update_query(&self) -> QueryAs<'_, Postgres, Self, PgArguments>;
}

/// Entidades com escopo de tenant.
///
/// No sistema original esse vínculo era descoberto por reflexão em tempo de
/// execução; aqui o bound do trait garante em tempo de compilação que só
/// entidades com o campo `tenant_id` ganham um `TenantRepository`.
pub trait TenantOwned: Entity {
    fn tenant_id(&self) -> Uuid;
    fn set_tenant_id(&mut self, tenant_id: Uuid);
}
