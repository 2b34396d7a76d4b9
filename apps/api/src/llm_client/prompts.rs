// Shared prompt fragments. Each service that needs LLM calls defines its
// own prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every post-writing prompt.
pub const FAITHFULNESS_INSTRUCTION: &str = "\
    CRITICAL: Use only the facts given in the brief. Do NOT invent features, \
    numbers, dates, prices or quotes. If the brief is thin, keep the post short \
    rather than padding it with made-up detail.";
