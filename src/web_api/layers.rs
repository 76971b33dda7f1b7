use axum::http::{header::InvalidHeaderValue, HeaderValue};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::settings::CorsSettings;

/// Grants the single configured origin every header and method.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&settings.allowed_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
