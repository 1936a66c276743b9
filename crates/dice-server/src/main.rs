use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{InMemoryDiceRepository, PgDiceRepository};
use application::DiceService;
use config::{AppConfig, StorageBackend};
use dice::DiceRepository;

/// Application service over whichever store was wired at startup
pub type AppDiceService = DiceService<dyn DiceRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub dice_service: Arc<AppDiceService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DiceRepository>) -> Self {
        Self {
            dice_service: Arc::new(DiceService::new(repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Dice API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble all routes with shared state and the configured layers
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::dice::router());

    if config.swagger_ui {
        let openapi = routes::swagger::ApiDoc::openapi();
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router.layer(config.cors.layer()).with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎲 Dice API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key))
        .context("Failed to read configuration")?;

    let dice_repo: Arc<dyn DiceRepository> = match config.storage {
        StorageBackend::Postgres => {
            // Run migrations
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("✅ Database migrations completed");
            Arc::new(PgDiceRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("⚠️  DICE_STORAGE=memory - dice are lost on restart");
            Arc::new(InMemoryDiceRepository::new())
        }
    };
    let state = AppState::new(dice_repo);

    let router = build_router(state, &config);

    if config.swagger_ui {
        tracing::info!("📚 Swagger UI: /swagger-ui");
    } else {
        tracing::info!("📚 Swagger UI disabled");
    }
    tracing::info!("✅ Dice API ready");

    Ok(router.into())
}
