use crate::error::Result;
use crate::model::{CreateMappingRequest, CreateMappingResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use portkey_service::ShortenError;
use tracing::info;

pub async fn create_mapping_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateMappingRequest>,
) -> Result<(StatusCode, Json<CreateMappingResponse>)> {
    let mapping = state.shortener().create_mapping(&request.long_url).await?;
    info!(code = %mapping.code, "created mapping");

    let response = CreateMappingResponse {
        short_url: mapping.code.to_url(state.base_url()),
        short_code: mapping.code.to_string(),
        long_url: mapping.target,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let target = state.shortener().resolve_code(&code).await?;

    // Targets are stored verbatim; one that cannot be a Location header
    // cannot be redirected to.
    let location = HeaderValue::from_str(&target).map_err(|_| {
        ShortenError::InvalidInput(format!("target is not a valid redirect location: {target}"))
    })?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
