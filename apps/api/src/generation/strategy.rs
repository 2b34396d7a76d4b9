//! Variant strategy: pluggable, trait-based renderer for a single variation.
//!
//! Default: `TemplateStrategy` (pure-Rust, deterministic, fully testable).
//! Alternative: `ModelBackedStrategy` (LLM-written text, see `model_strategy`).
//!
//! `AppState` holds an `Arc<dyn VariantStrategy>`, chosen at startup via config.
//! Count, ordering and validation live in the generator and do not change
//! when the strategy is swapped.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::platform::resolve_platform;
use crate::generation::request::GenerationRequest;
use crate::generation::templates::{render, Pattern, TemplateInputs};
use crate::generation::tone::resolve_tone;

/// Platform and tone data resolved once per request from the static tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub platform: String,
    pub max_chars: usize,
    pub emoji: &'static str,
    pub tone: &'static str,
}

impl ResolvedProfile {
    pub fn resolve(request: &GenerationRequest) -> Self {
        let limits = resolve_platform(&request.platform);
        if !limits.known {
            debug!("Unknown platform {:?}, using default limits", limits.key);
        }
        ResolvedProfile {
            platform: limits.key,
            max_chars: limits.max_chars,
            emoji: limits.emoji,
            tone: resolve_tone(request.brand_voice.as_deref()),
        }
    }
}

/// Renders the text of one variation. Implement this to swap backends
/// without touching the endpoint, handler, or generator.
#[async_trait]
pub trait VariantStrategy: Send + Sync {
    async fn render_variant(
        &self,
        request: &GenerationRequest,
        profile: &ResolvedProfile,
        pattern: Pattern,
    ) -> Result<String, AppError>;

    /// Short label reported in responses and logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateStrategy: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Fills the fixed pattern templates. Never fails, never blocks.
pub struct TemplateStrategy;

#[async_trait]
impl VariantStrategy for TemplateStrategy {
    async fn render_variant(
        &self,
        request: &GenerationRequest,
        profile: &ResolvedProfile,
        pattern: Pattern,
    ) -> Result<String, AppError> {
        let inputs = TemplateInputs {
            title: &request.title,
            brief: &request.creative_brief,
            audience: request.audience(),
            tone: profile.tone,
            emoji: profile.emoji,
        };
        Ok(render(pattern, &inputs))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}
