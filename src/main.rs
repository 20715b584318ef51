//src/main.rs

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;
use tokio::net::TcpListener;
use utoipa::OpenApi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização (schema + seed de demonstração)
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(docs::ApiDoc::openapi()) }),
        )
        .merge(handlers::products::routes())
        .merge(handlers::suppliers::routes())
        .merge(handlers::alerts::routes())
        .merge(handlers::analytics::routes())
        .with_state(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Falha ao vincular a porta 3000.");

    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("Falha ao obter o endereço local.")
    );

    axum::serve(listener, app)
        .await
        .expect("Falha ao iniciar o servidor.");
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
