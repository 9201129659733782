use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Responses shorter than this (after trimming) are treated as placeholders.
pub const MIN_PLAUSIBLE_CHARS: usize = 20;

pub const SYSTEM_INSTRUCTION: &str = "You are a legal plain-language assistant. \
You rewrite legal documents so that a non-lawyer can understand them. \
─────────────── FORMAT ─────────────── \
1. PLAIN ENGLISH SUMMARY: a short paragraph explaining what the text says. \
2. KEY POINTS: bullet list of obligations, rights and deadlines. \
3. LEGAL TERMS DECODED: each legal or Latin term used, with its everyday meaning. \
4. PRACTICAL IMPACT: what this means for the reader in practice. \
Be concise and clear. Do not give legal advice beyond explaining the text.";

/// Strip control characters (keeping line breaks and tabs) and hard-truncate
/// to `max_chars` characters. Truncation is silent.
#[must_use]
pub fn prepare_input(raw: &str, max_chars: usize) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .take(max_chars)
        .collect()
}

#[must_use]
pub fn build_prompt(text: &str, max_chars: usize) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_INSTRUCTION.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!(
                "Simplify this legal text:\n\n{}",
                prepare_input(text, max_chars)
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Trimmed content if it clears [`MIN_PLAUSIBLE_CHARS`].
#[must_use]
pub fn plausible(content: &str) -> Option<String> {
    let trimmed = content.trim();
    (trimmed.chars().count() >= MIN_PLAUSIBLE_CHARS).then(|| trimmed.to_string())
}
