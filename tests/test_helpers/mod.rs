//! Shared fixtures for the integration tests.
#![allow(dead_code)]


use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use tareas_server::{
    app_state::{AppState, SharedState},
    data_access::data_context::DataContext,
    settings::DatabaseSettings,
};
use tower::ServiceExt;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn registro() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
}

/// A private in-memory database; one connection keeps it alive.
pub fn memory_context() -> DataContext {
    DataContext::new(&DatabaseSettings {
        url: ":memory:".to_string(),
        pool_size: 1,
        busy_timeout_ms: 1000,
    })
    .expect("in-memory database should open")
}

pub fn memory_state() -> SharedState {
    Arc::new(AppState::new(memory_context(), Arc::new(FixedClock(registro()))))
}

/// Sends one request through the router and returns status and raw body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8(bytes.to_vec()).expect("body should be UTF-8"))
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("body should be JSON")
}
