//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::GenerationResponse;
use crate::generation::platform::{PlatformProfile, PLATFORM_PROFILES};
use crate::generation::request::GenerateContentBody;
use crate::generation::tone::{tone_profiles, ToneProfile};
use crate::state::AppState;

/// POST /functions/v1/generate-content
/// POST /api/v1/generate-content
///
/// Produces `variations` candidate posts for the brief. Malformed JSON is
/// reported as a validation error with the usual `{ error }` body.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    body: Result<Json<GenerateContentBody>, JsonRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let response = state.generator.generate(body).await?;
    Ok(Json(response))
}

/// GET /api/v1/platforms
///
/// Lists supported platforms with their character limits so clients can
/// warn about length before and after generating.
pub async fn handle_list_platforms() -> Json<&'static [PlatformProfile]> {
    Json(PLATFORM_PROFILES)
}

/// GET /api/v1/brand-voices
pub async fn handle_list_brand_voices() -> Json<Vec<ToneProfile>> {
    Json(tone_profiles())
}
