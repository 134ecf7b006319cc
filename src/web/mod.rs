//! The kitchen web front end.
//!
//! Serves the preference form, runs the chef pipeline once per submission
//! and renders the dish. A small JSON API exposes the same pipeline.
//!
//! # Routes
//!
//! - `GET /` - kitchen form
//! - `POST /generate` - cook from a form submission
//! - `POST /feedback` - placeholder acknowledgment for the result buttons
//! - `POST /api/recipes` - cook from a JSON [`UserInput`](crate::agents::UserInput)
//! - `GET /api/cultures` - cuisines offered on the form
//! - `GET /api/health` - liveness probe

pub mod catalog;
pub mod form;
pub mod handlers;
pub mod pages;

use std::sync::Arc;

use anyhow::Context as _;
use axum::routing::{get, post};
use axum::Router;
use tera::Tera;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::{ChefConfig, ChefPipeline};

pub use catalog::KitchenCatalog;
pub use form::KitchenForm;
pub use pages::KitchenPage;

/// Read-only state shared by every request.
///
/// Each request builds its own pipeline state; nothing here is mutated.
pub struct AppState {
    pub pipeline: ChefPipeline,
    pub catalog: KitchenCatalog,
    pub templates: Tera,
}

impl AppState {
    /// Creates the shared state, compiling the page templates.
    pub fn new(pipeline: ChefPipeline, catalog: KitchenCatalog) -> tera::Result<Self> {
        Ok(Self {
            pipeline,
            catalog,
            templates: pages::build_templates()?,
        })
    }

    /// Creates the shared state from configuration, loading the kitchen file if set.
    pub fn from_config(config: &ChefConfig) -> anyhow::Result<Self> {
        let catalog = match &config.kitchen_file {
            Some(path) => KitchenCatalog::from_yaml_file(path)
                .with_context(|| format!("loading kitchen catalog {}", path.display()))?,
            None => KitchenCatalog::default(),
        };
        let state = Self::new(ChefPipeline::from_config(config), catalog)
            .context("compiling page templates")?;
        Ok(state)
    }
}

/// Builds the router for the kitchen server.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::kitchen))
        .route("/generate", post(handlers::generate))
        .route("/feedback", post(handlers::feedback))
        .route("/api/recipes", post(handlers::create_recipe))
        .route("/api/cultures", get(handlers::list_cultures))
        .route("/api/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the kitchen server and runs until it is shut down.
pub async fn serve(config: ChefConfig) -> anyhow::Result<()> {
    config.validate()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(
        addr = %listener.local_addr()?,
        critic = %config.critic_policy,
        "Kitchen server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
