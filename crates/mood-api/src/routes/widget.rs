//! Routes:
//! - GET /api/widget-config: public parameters for the World ID widget

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mood_core::WidgetConfig;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/widget-config", get(widget_config))
}

/// GET /api/widget-config
#[utoipa::path(
    get,
    path = "/api/widget-config",
    responses((status = 200, description = "Widget parameters", body = WidgetConfig)),
    tag = "verification"
)]
pub(crate) async fn widget_config(State(state): State<AppState>) -> Json<WidgetConfig> {
    Json(state.config.widget.clone())
}
