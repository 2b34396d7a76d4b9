// LLM prompt constants for the model-backed variant strategy.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for post writing. `{json_only}` is replaced with the shared fragment.
pub const POST_SYSTEM_TEMPLATE: &str = "You are an expert social media copywriter. \
    You write a single ready-to-publish post for the requested platform. \
    {json_only}";

/// Post writing prompt template.
/// Replace: {faithfulness_instruction}, {platform}, {max_chars}, {emoji}, {tone},
///          {pattern_hint}, {title}, {brief}, {audience}
pub const POST_PROMPT_TEMPLATE: &str = r#"{faithfulness_instruction}

PLATFORM: {platform}
CHARACTER LIMIT: {max_chars} (stay under it, counting emoji and hashtags)
PLATFORM EMOJI: {emoji}
TONE: {tone}

STRUCTURE:
{pattern_hint}

TITLE:
{title}

CREATIVE BRIEF:
{brief}

TARGET AUDIENCE:
{audience}

Return a JSON object with this EXACT schema:
{
  "post": "the full post text, using \n for line breaks"
}"#;

/// Stand-in for the audience slot when the brief has none.
pub const NO_AUDIENCE: &str = "(none given; write for a general audience and do not name one)";
