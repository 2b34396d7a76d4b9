//! Generation request: wire body and the validated request the generator works from.

use serde::Deserialize;

use crate::errors::AppError;

/// Variation count used when the caller does not send one.
pub const DEFAULT_VARIATION_COUNT: usize = 3;

/// JSON body of `POST /functions/v1/generate-content`.
///
/// Every field is optional at the wire level so that a missing field surfaces
/// as a validation error naming it rather than a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub creative_brief: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: Option<String>,
    pub variations: Option<i64>,
}

/// A brief that passed validation. Exists only for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub title: String,
    pub platform: String,
    pub creative_brief: String,
    /// Empty string means "omit audience framing".
    pub target_audience: String,
    pub brand_voice: Option<String>,
    pub variation_count: usize,
}

impl GenerationRequest {
    /// Validates a wire body. Runs before any generation work starts.
    pub fn from_body(body: GenerateContentBody, max_variations: usize) -> Result<Self, AppError> {
        let title = required(body.title, "title")?;
        let platform = required(body.platform, "platform")?;
        let creative_brief = required(body.creative_brief, "creativeBrief")?;

        let variation_count = match body.variations {
            None => DEFAULT_VARIATION_COUNT,
            Some(n) if n < 1 => {
                return Err(AppError::Validation(format!(
                    "variations must be at least 1, got {n}"
                )))
            }
            Some(n) => usize::try_from(n)
                .ok()
                .filter(|&n| n <= max_variations)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "variations must be at most {max_variations}, got {n}"
                    ))
                })?,
        };

        Ok(GenerationRequest {
            title,
            platform,
            creative_brief,
            target_audience: body.target_audience.unwrap_or_default(),
            brand_voice: body.brand_voice,
            variation_count,
        })
    }

    /// The audience to frame the post for. Only the empty string omits it;
    /// any other value, whitespace included, is rendered verbatim.
    pub fn audience(&self) -> Option<&str> {
        if self.target_audience.is_empty() {
            None
        } else {
            Some(&self.target_audience)
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}
