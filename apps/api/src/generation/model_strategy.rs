//! Model-backed variant strategy: asks the LLM to write each variation.
//!
//! The pattern still decides the *shape* of each post (via a style hint), so
//! cycling and ordering behave exactly as with the template backend. Output is
//! not deterministic.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::prompts::{NO_AUDIENCE, POST_PROMPT_TEMPLATE, POST_SYSTEM_TEMPLATE};
use crate::generation::request::GenerationRequest;
use crate::generation::strategy::{ResolvedProfile, VariantStrategy};
use crate::generation::templates::Pattern;
use crate::llm_client::prompts::{FAITHFULNESS_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Deserialize)]
struct GeneratedPost {
    post: String,
}

pub struct ModelBackedStrategy {
    llm: LlmClient,
    system: String,
}

impl ModelBackedStrategy {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: POST_SYSTEM_TEMPLATE.replace("{json_only}", JSON_ONLY_SYSTEM),
        }
    }
}

#[async_trait]
impl VariantStrategy for ModelBackedStrategy {
    async fn render_variant(
        &self,
        request: &GenerationRequest,
        profile: &ResolvedProfile,
        pattern: Pattern,
    ) -> Result<String, AppError> {
        let prompt = build_post_prompt(request, profile, pattern);

        let generated: GeneratedPost = self
            .llm
            .call_json(&prompt, &self.system)
            .await
            .map_err(|e| {
                AppError::GenerationFailed(format!("{} variant: {e}", pattern.name()))
            })?;

        let text = generated.post.trim();
        if text.is_empty() {
            return Err(AppError::GenerationFailed(format!(
                "{} variant: model returned an empty post",
                pattern.name()
            )));
        }

        Ok(text.to_string())
    }

    fn backend(&self) -> &'static str {
        "model"
    }
}

fn build_post_prompt(
    request: &GenerationRequest,
    profile: &ResolvedProfile,
    pattern: Pattern,
) -> String {
    POST_PROMPT_TEMPLATE
        .replace("{faithfulness_instruction}", FAITHFULNESS_INSTRUCTION)
        .replace("{platform}", &profile.platform)
        .replace("{max_chars}", &profile.max_chars.to_string())
        .replace("{emoji}", profile.emoji)
        .replace("{tone}", profile.tone)
        .replace("{pattern_hint}", pattern.style_hint())
        .replace("{title}", &request.title)
        .replace("{brief}", &request.creative_brief)
        .replace("{audience}", request.audience().unwrap_or(NO_AUDIENCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(audience: &str) -> GenerationRequest {
        GenerationRequest {
            title: "Launch".to_string(),
            platform: "linkedin".to_string(),
            creative_brief: "We shipped it".to_string(),
            target_audience: audience.to_string(),
            brand_voice: Some("educational".to_string()),
            variation_count: 1,
        }
    }

    fn strategy_for(base_url: &str) -> ModelBackedStrategy {
        let llm = LlmClient::new("test-key".to_string(), format!("{base_url}/v1/messages"))
            .unwrap()
            .with_retry_base_delay(Duration::from_millis(1));
        ModelBackedStrategy::new(llm)
    }

    fn anthropic_body(text: &str) -> String {
        serde_json::json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 100, "output_tokens": 40}
        })
        .to_string()
    }

    #[test]
    fn test_prompt_carries_profile_and_brief() {
        let req = request("CTOs");
        let profile = ResolvedProfile::resolve(&req);
        let prompt = build_post_prompt(&req, &profile, Pattern::ToneFramed);

        assert!(prompt.contains("PLATFORM: linkedin"));
        assert!(prompt.contains("CHARACTER LIMIT: 3000"));
        assert!(prompt.contains("informative and helpful"));
        assert!(prompt.contains("We shipped it"));
        assert!(prompt.contains("CTOs"));
        assert!(prompt.contains(Pattern::ToneFramed.style_hint()));
        assert!(!prompt.contains("{title}"));
    }

    #[test]
    fn test_prompt_without_audience_uses_placeholder() {
        let req = request("");
        let profile = ResolvedProfile::resolve(&req);
        let prompt = build_post_prompt(&req, &profile, Pattern::Announcement);
        assert!(prompt.contains(NO_AUDIENCE));
    }

    #[test]
    fn test_system_prompt_enforces_json() {
        let llm = LlmClient::new("k".to_string(), "http://localhost/v1/messages".to_string())
            .unwrap();
        let strategy = ModelBackedStrategy::new(llm);
        assert!(strategy.system.contains("valid JSON only"));
        assert!(!strategy.system.contains("{json_only}"));
        assert_eq!(strategy.backend(), "model");
    }

    #[tokio::test]
    async fn test_render_variant_returns_trimmed_post() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(anthropic_body("```json\n{\"post\": \"  Big news!\\n#launch  \"}\n```"))
            .create_async()
            .await;

        let req = request("");
        let profile = ResolvedProfile::resolve(&req);
        let text = strategy_for(&server.url())
            .render_variant(&req, &profile, Pattern::Announcement)
            .await
            .unwrap();

        assert_eq!(text, "Big news!\n#launch");
    }

    #[tokio::test]
    async fn test_empty_post_is_generation_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(anthropic_body("{\"post\": \"   \"}"))
            .create_async()
            .await;

        let req = request("");
        let profile = ResolvedProfile::resolve(&req);
        let result = strategy_for(&server.url())
            .render_variant(&req, &profile, Pattern::ExcitedShare)
            .await;

        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }

    #[tokio::test]
    async fn test_exhausted_upstream_is_generation_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(500)
            .expect(crate::llm_client::MAX_ATTEMPTS as usize)
            .create_async()
            .await;

        let req = request("");
        let profile = ResolvedProfile::resolve(&req);
        let result = strategy_for(&server.url())
            .render_variant(&req, &profile, Pattern::ToneFramed)
            .await;

        match result {
            Err(AppError::GenerationFailed(msg)) => assert!(msg.contains("tone-framed")),
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
    }
}
