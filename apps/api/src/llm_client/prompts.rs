// Cross-cutting prompt fragments shared by every analyst capability.
// Capability personas and templates live in analysis::prompts.

/// System prompt fragment that enforces JSON-only output. Appended to every
/// capability persona before the call.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
