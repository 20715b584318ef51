// src/middleware/tenancy.rs

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::config::AppState;

// O nome do nosso cabeçalho HTTP customizado
const TENANT_ID_HEADER: &str = "x-tenant-id";
// Claim equivalente em tokens JWT
const TENANT_ID_CLAIM: &str = "tenant_id";
// Parâmetro de query, principalmente para testes manuais
const TENANT_ID_QUERY: &str = "tenantId";

// O nosso extrator de tenant.
// Ele armazena o UUID do tenant que o utilizador quer aceder.
#[derive(Debug, Clone)]
pub struct TenantContext(pub Uuid);

#[derive(Debug, Deserialize)]
struct TenantClaims {
    tenant_id: Option<String>,
}

/// Resolve o tenant na ordem: cabeçalho → claim JWT → query string.
/// Valor que não parseia como UUID é ignorado e cai para a próxima fonte.
pub(crate) fn resolve_tenant_id(parts: &Parts, jwt_secret: &str) -> Option<Uuid> {
    if let Some(value) = parts.headers.get(TENANT_ID_HEADER) {
        if let Some(tenant_id) = value.to_str().ok().and_then(|v| Uuid::parse_str(v.trim()).ok()) {
            tracing::debug!(%tenant_id, "tenant resolvido pelo cabeçalho {}", TENANT_ID_HEADER);
            return Some(tenant_id);
        }
        tracing::debug!("cabeçalho {} presente mas não é um UUID válido", TENANT_ID_HEADER);
    }

    if let Some(tenant_id) = tenant_from_bearer(parts, jwt_secret) {
        tracing::debug!(%tenant_id, "tenant resolvido pela claim {}", TENANT_ID_CLAIM);
        return Some(tenant_id);
    }

    if let Some(tenant_id) = tenant_from_query(parts.uri.query()) {
        tracing::debug!(%tenant_id, "tenant resolvido pelo parâmetro {}", TENANT_ID_QUERY);
        return Some(tenant_id);
    }

    tracing::warn!("nenhum tenant_id encontrado na requisição");
    None
}

fn tenant_from_bearer(parts: &Parts, jwt_secret: &str) -> Option<Uuid> {
    let auth_header = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;

    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<TenantClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .ok()?;

    data.claims
        .tenant_id
        .as_deref()
        .and_then(|v| Uuid::parse_str(v).ok())
}

fn tenant_from_query(query: Option<&str>) -> Option<Uuid> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("tenantId="))
        .and_then(|v| Uuid::parse_str(v).ok())
}

impl FromRequestParts<AppState> for TenantContext {
    // Usamos AppError como rejeição, pois ele já implementa IntoResponse
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_tenant_id(parts, &state.jwt_secret)
            .map(TenantContext)
            .ok_or(AppError::MissingTenantId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "segredo-de-teste";

    fn parts_for(uri: &str, headers: &[(&str, String)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn token_with_tenant(tenant_id: Uuid, secret: &str) -> String {
        // exp bem no futuro; a Validation padrão exige a claim.
        let claims = json!({ "tenant_id": tenant_id.to_string(), "exp": 4102444800u64 });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn cabecalho_tem_prioridade_sobre_a_query() {
        let from_header = Uuid::new_v4();
        let from_query = Uuid::new_v4();
        let parts = parts_for(
            &format!("/api/products?tenantId={from_query}"),
            &[("x-tenant-id", from_header.to_string())],
        );
        assert_eq!(resolve_tenant_id(&parts, SECRET), Some(from_header));
    }

    #[test]
    fn cabecalho_invalido_cai_para_a_proxima_fonte() {
        let from_query = Uuid::new_v4();
        let parts = parts_for(
            &format!("/api/products?tenantId={from_query}"),
            &[("x-tenant-id", "nao-e-um-uuid".to_string())],
        );
        assert_eq!(resolve_tenant_id(&parts, SECRET), Some(from_query));
    }

    #[test]
    fn claim_do_jwt_e_a_segunda_fonte() {
        let tenant_id = Uuid::new_v4();
        let token = token_with_tenant(tenant_id, SECRET);
        let parts = parts_for(
            "/api/products",
            &[("authorization", format!("Bearer {token}"))],
        );
        assert_eq!(resolve_tenant_id(&parts, SECRET), Some(tenant_id));
    }

    #[test]
    fn token_com_assinatura_errada_e_ignorado() {
        let tenant_id = Uuid::new_v4();
        let token = token_with_tenant(tenant_id, "outro-segredo");
        let parts = parts_for(
            "/api/products",
            &[("authorization", format!("Bearer {token}"))],
        );
        assert_eq!(resolve_tenant_id(&parts, SECRET), None);
    }

    #[test]
    fn query_string_funciona_sozinha() {
        let tenant_id = Uuid::new_v4();
        let parts = parts_for(&format!("/api/products?foo=bar&tenantId={tenant_id}"), &[]);
        assert_eq!(resolve_tenant_id(&parts, SECRET), Some(tenant_id));
    }

    #[test]
    fn sem_nenhuma_fonte_retorna_ausente() {
        let parts = parts_for("/api/products", &[]);
        assert_eq!(resolve_tenant_id(&parts, SECRET), None);
    }
}
