use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::data_access::{data_context::DataContextError, tarea_repository::TareaRepositoryError};

/// Handler failures. The body is the display text, as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("El titulo es requerido.")]
    TituloRequerido,
    #[error("No se encontro tarea.")]
    TareaNoEncontrada,
    #[error("{0}")]
    Interno(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::TituloRequerido => StatusCode::BAD_REQUEST,
            ApiError::TareaNoEncontrada => StatusCode::NOT_FOUND,
            ApiError::Interno(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TareaRepositoryError> for ApiError {
    fn from(err: TareaRepositoryError) -> Self {
        match err {
            TareaRepositoryError::NotFound(_) => ApiError::TareaNoEncontrada,
            TareaRepositoryError::Persistence(_) => ApiError::Interno(err.to_string()),
        }
    }
}

impl From<DataContextError> for ApiError {
    fn from(err: DataContextError) -> Self {
        ApiError::Interno(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
