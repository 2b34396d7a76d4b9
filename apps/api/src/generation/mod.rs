// Content Variation Generator
// Implements: request validation, platform/tone resolution, pattern cycling,
// and the pluggable strategy that writes each variation's text.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod model_strategy;
pub mod platform;
pub mod prompts;
pub mod request;
pub mod strategy;
pub mod templates;
pub mod tone;
