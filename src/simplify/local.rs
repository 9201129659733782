//! Deterministic, offline simplification used when no remote provider answers.

use std::collections::BTreeSet;
use std::sync::Arc;

use regex::Captures;

use super::terms::{TermDictionary, TermEntry};
use crate::core::config::{AppConfig, DEFAULT_ADVISORY_WORD_THRESHOLD, DEFAULT_TERM_REPORT_CAP};

/// Returned for empty or whitespace-only input, by both the local and the
/// remote path.
pub const EMPTY_INPUT_PROMPT: &str =
    "Please paste a legal document or clause to get a simplified explanation.";

pub const BODY_HEADING: &str = "PLAIN ENGLISH VERSION:";
pub const TERMS_HEADING: &str = "LEGAL TERMS DECODED:";
pub const ADVISORY_HEADING: &str = "WHAT THIS MEANS FOR YOU:";

pub const ADVISORY_TEXT: &str = "This is a substantial document. Before you sign or rely on it, \
make sure you understand what you are agreeing to do, the deadlines involved, and what happens \
if either side does not keep its promises. If the stakes are high, ask a lawyer to review it.";

/// Fragments this short after a sentence split are section numbers or stray
/// initials.
const MIN_SENTENCE_CHARS: usize = 10;

#[derive(Debug, Clone)]
pub struct LocalSimplifier {
    dictionary: Arc<TermDictionary>,
    term_report_cap: usize,
    advisory_word_threshold: usize,
}

impl Default for LocalSimplifier {
    fn default() -> Self {
        Self::new(
            TermDictionary::builtin(),
            DEFAULT_TERM_REPORT_CAP,
            DEFAULT_ADVISORY_WORD_THRESHOLD,
        )
    }
}

impl LocalSimplifier {
    #[must_use]
    pub fn new(
        dictionary: Arc<TermDictionary>,
        term_report_cap: usize,
        advisory_word_threshold: usize,
    ) -> Self {
        Self {
            dictionary,
            term_report_cap,
            advisory_word_threshold,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            TermDictionary::builtin(),
            config.term_report_cap,
            config.advisory_word_threshold,
        )
    }

    #[must_use]
    pub fn simplify(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        let (substituted, matched) = self.substitute(text);
        let body = condense(&substituted);

        let mut out = format!("{BODY_HEADING}\n{body}");

        let lines: Vec<String> = matched
            .iter()
            .take(self.term_report_cap)
            .map(|e| format!("• \"{}\" → {}", e.term, e.meaning))
            .collect();
        if !lines.is_empty() {
            out.push_str(&format!("\n\n{TERMS_HEADING}\n{}", lines.join("\n")));
        }

        if text.split_whitespace().count() > self.advisory_word_threshold {
            out.push_str(&format!("\n\n{ADVISORY_HEADING}\n{ADVISORY_TEXT}"));
        }

        out
    }

    /// Replaces every dictionary term in one left-to-right pass and returns
    /// the rewritten text with the matched entries, longest term first.
    #[must_use]
    pub fn substitute(&self, text: &str) -> (String, Vec<TermEntry>) {
        let Some(matcher) = self.dictionary.matcher() else {
            return (text.to_string(), Vec::new());
        };

        let mut seen: BTreeSet<usize> = BTreeSet::new();
        let replaced = matcher.replace_all(text, |caps: &Captures<'_>| {
            let hit = &caps[0];
            match self.dictionary.position(hit) {
                Some(pos) => {
                    seen.insert(pos);
                    let meaning = self
                        .dictionary
                        .entry(pos)
                        .map_or(hit, |e| e.meaning.as_str());
                    match_case(hit, meaning)
                }
                None => hit.to_string(),
            }
        });

        let matched = seen
            .into_iter()
            .filter_map(|pos| self.dictionary.entry(pos).cloned())
            .collect();

        (replaced.into_owned(), matched)
    }
}

/// Capitalizes `replacement` when the original hit started a sentence.
fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if starts_upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

/// Splits after `.`, `?`, `!` or `;` when followed by whitespace.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '?' | '!' | ';') {
            continue;
        }
        if let Some(&(next_idx, next)) = chars.peek()
            && next.is_whitespace()
        {
            sentences.push(&text[start..next_idx]);
            start = next_idx;
        }
    }
    sentences.push(&text[start..]);
    sentences
}

fn condense(text: &str) -> String {
    let kept: Vec<&str> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    if kept.is_empty() {
        text.trim().to_string()
    } else {
        kept.join(" ")
    }
}
