use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use platen::{CompileError, RenderError};
use serde_json::json;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Compile failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Render delegate failed: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Malformed template or data is the caller's problem.
            Self::Compile(_) => (StatusCode::BAD_REQUEST, "CompileError", self.to_string()),
            Self::Render(ref e) => {
                tracing::error!("delegate failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RenderError",
                    "Rendering failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}
