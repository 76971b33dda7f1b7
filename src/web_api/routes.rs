pub mod health_routes;
pub mod tarea_routes;

use axum::{http::header::InvalidHeaderValue, Router};
use crate::{app_state::SharedState, settings::CorsSettings, web_api::layers};

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(tarea_routes::get_router(app_state.clone()))
        .merge(health_routes::get_router(app_state))
}

/// Routes plus request tracing and the CORS policy.
pub fn build_app(app_state: SharedState, cors: &CorsSettings) -> Result<Router, InvalidHeaderValue> {
    Ok(map_routes(app_state)
        .layer(layers::trace_layer())
        .layer(layers::cors_layer(cors)?))
}
