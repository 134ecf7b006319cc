//! HTTP handlers for the kitchen server.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::Serialize;
use tracing::{info, warn};

use super::form::KitchenForm;
use super::pages::KitchenPage;
use super::AppState;
use crate::agents::{ChefOutput, UserInput};
use crate::error::{ServerError, GENERIC_FAILURE_MESSAGE};

/// Acknowledgment for the "request another recipe" button.
pub const ANOTHER_RECIPE_NOTICE: &str = "ฟังก์ชันนี้จะพัฒนาในอนาคต (Coming soon!)";

/// Acknowledgment for the "rate wow factor" button.
pub const RATING_NOTICE: &str = "ขอบคุณสำหรับ Feedback! (Coming soon!)";

/// `GET /` - the kitchen form with catalog defaults.
pub async fn kitchen(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let html = KitchenPage::fresh(&state.catalog).render(&state.templates)?;
    Ok(Html(html))
}

/// `POST /generate` - runs the pipeline once for a form submission.
///
/// A failed run re-renders the form with a generic failure message.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, ServerError> {
    let form = KitchenForm::from_pairs(pairs);
    let input = form.to_user_input();
    info!(
        cultures = ?input.cultures,
        level = form.extremeness_level,
        restrictions = ?form.restrictions.active(),
        "Kitchen order received"
    );

    let page = KitchenPage::with_form(&state.catalog, form);
    match state.pipeline.run(input) {
        Ok(output) => {
            let html = page.result(output).render(&state.templates)?;
            Ok(Html(html).into_response())
        }
        Err(e) => {
            warn!(error = %e, "Kitchen order failed");
            let html = page.error(GENERIC_FAILURE_MESSAGE).render(&state.templates)?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response())
        }
    }
}

/// `POST /feedback` - placeholder acknowledgment for the result buttons.
pub async fn feedback(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, ServerError> {
    let action = pairs
        .iter()
        .find(|(key, _)| key == "action")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    let notice = match action {
        "another" => ANOTHER_RECIPE_NOTICE,
        "rate" => RATING_NOTICE,
        other => {
            return Err(ServerError::BadRequest(format!(
                "unknown feedback action '{}'",
                other
            )))
        }
    };

    let html = KitchenPage::fresh(&state.catalog)
        .notice(notice)
        .render(&state.templates)?;
    Ok(Html(html))
}

/// `POST /api/recipes` - JSON version of the form submission.
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UserInput>,
) -> Result<Json<ChefOutput>, ServerError> {
    let output = state.pipeline.run(input)?;
    Ok(Json(output))
}

/// Cuisines offered on the form.
#[derive(Debug, Serialize)]
pub struct CulturesResponse {
    pub available: Vec<String>,
    pub defaults: Vec<String>,
}

/// `GET /api/cultures`
pub async fn list_cultures(State(state): State<Arc<AppState>>) -> Json<CulturesResponse> {
    Json(CulturesResponse {
        available: state.catalog.available_cultures.clone(),
        defaults: state.catalog.default_cultures.clone(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/health`
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
