//! Content generation: orchestrates one generation call.
//!
//! Flow: validate body → resolve platform/tone profile → render every
//!       variation through the strategy (bounded by a timeout) → attach
//!       advisory length metadata → return.
//!
//! Nothing is persisted. Either all requested variations are returned or
//! the call fails; there are no partial arrays.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::request::{GenerateContentBody, GenerationRequest};
use crate::generation::strategy::{ResolvedProfile, VariantStrategy};
use crate::generation::templates::Pattern;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Advisory facts about one variation. The limit is never enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationDetail {
    pub pattern: Pattern,
    pub pattern_index: usize,
    /// UTF-16 code units, the same count a browser `string.length` reports.
    pub char_count: usize,
    pub exceeds_limit: bool,
}

/// Successful generation result. `variations[0]` is the default selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub variations: Vec<String>,
    pub details: Vec<VariationDetail>,
    pub platform: String,
    pub max_chars: usize,
    pub emoji: &'static str,
    pub tone: &'static str,
    pub backend: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

/// Stateless generator shared by all requests.
#[derive(Clone)]
pub struct ContentGenerator {
    strategy: Arc<dyn VariantStrategy>,
    max_variations: usize,
    timeout: Duration,
}

impl ContentGenerator {
    pub fn new(strategy: Arc<dyn VariantStrategy>, max_variations: usize, timeout: Duration) -> Self {
        Self {
            strategy,
            max_variations,
            timeout,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.strategy.backend()
    }

    /// Validates the body, then renders every requested variation.
    pub async fn generate(&self, body: GenerateContentBody) -> Result<GenerationResponse, AppError> {
        let request = GenerationRequest::from_body(body, self.max_variations)?;
        self.generate_validated(&request).await
    }

    /// Renders `request.variation_count` variations, cycling patterns A, B, C.
    pub async fn generate_validated(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AppError> {
        let profile = ResolvedProfile::resolve(request);

        info!(
            "Generating {} variation(s) for platform={} tone={:?} backend={}",
            request.variation_count,
            profile.platform,
            profile.tone,
            self.strategy.backend()
        );

        let patterns: Vec<Pattern> = (0..request.variation_count)
            .map(Pattern::for_variation)
            .collect();

        let renders = patterns
            .iter()
            .map(|&pattern| self.strategy.render_variant(request, &profile, pattern));

        let variations = match tokio::time::timeout(self.timeout, try_join_all(renders)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    "Generation exceeded {}s for platform={}",
                    self.timeout.as_secs(),
                    profile.platform
                );
                return Err(AppError::UpstreamTimeout(self.timeout.as_secs()));
            }
        };

        if variations.iter().any(|v| v.is_empty()) {
            return Err(AppError::GenerationFailed(
                "strategy produced an empty variation".to_string(),
            ));
        }

        let details: Vec<VariationDetail> = patterns
            .iter()
            .zip(&variations)
            .map(|(&pattern, text)| {
                let char_count = text.encode_utf16().count();
                VariationDetail {
                    pattern,
                    pattern_index: pattern.index(),
                    char_count,
                    exceeds_limit: char_count > profile.max_chars,
                }
            })
            .collect();

        let over_limit = details.iter().filter(|d| d.exceeds_limit).count();
        if over_limit > 0 {
            info!(
                "{} of {} variation(s) exceed the {}-char limit for {}",
                over_limit,
                details.len(),
                profile.max_chars,
                profile.platform
            );
        }

        Ok(GenerationResponse {
            variations,
            details,
            platform: profile.platform,
            max_chars: profile.max_chars,
            emoji: profile.emoji,
            tone: profile.tone,
            backend: self.strategy.backend(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
