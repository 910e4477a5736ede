// Shared prompt constants and prompt-building utilities.
// Each module that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON document. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to prompts that mention institutions or figures.
pub const REGIONAL_ACCURACY_INSTRUCTION: &str = "\
    Only name real, currently operating colleges, entrance exams and scholarships. \
    Prefer options available in the student's preferred location when one is given. \
    If you are unsure a figure is current, describe it as approximate.";
