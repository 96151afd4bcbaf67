use crate::error::Result;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template: serde_json::Value,
    pub xml: String,
    #[serde(default)]
    pub tenant_id: String,
}

/// Compiles the request's template and data, hands the document text to the
/// delegate, and returns the binary artifact.
pub async fn render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("render request for tenant '{}'", request.tenant_id);

    let document = platen::compile_value(&request.template, &request.xml)?;
    let artifact = state.delegate.render(&document)?;

    tracing::info!(
        "render completed for tenant '{}' ({} bytes)",
        request.tenant_id,
        artifact.len()
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, state.delegate.mime_type()),
            (HeaderName::from_static("x-deterministic"), "true"),
        ],
        artifact,
    ))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
