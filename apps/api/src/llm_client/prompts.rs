// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Questions are read aloud by a voice assistant; these characters break speech synthesis.
pub const VOICE_SAFE_INSTRUCTION: &str = "\
    The questions are going to be read by a voice assistant so do not use \"/\" or \"*\" \
    or any other special characters which might break the voice assistant.";
