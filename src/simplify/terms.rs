//! Legal and Latin terms with their plain-English equivalents.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Compiled-size ceiling for the term alternation.
const MATCHER_SIZE_LIMIT: usize = 1 << 24;

/// Built-in term table. Keys are matched case-insensitively; where two rows
/// differ only by case the later row wins.
pub const BUILTIN_TERMS: &[(&str, &str)] = &[
    ("hereinafter", "from now on"),
    ("whereas", "since"),
    ("thereof", "of that"),
    ("hereby", "by this"),
    ("herein", "in this document"),
    ("hereto", "to this"),
    ("hereunder", "under this document"),
    ("therein", "in that"),
    ("thereto", "to that"),
    ("notwithstanding", "despite"),
    ("pursuant to", "according to"),
    ("indemnify and hold harmless", "protect and not blame"),
    ("hold harmless", "not blame"),
    ("indemnify", "protect from loss"),
    ("indemnification", "protection from loss"),
    ("aforementioned", "mentioned earlier"),
    ("aforesaid", "mentioned before"),
    ("shall", "will"),
    ("shall not", "must not"),
    ("forthwith", "immediately"),
    ("henceforth", "from now on"),
    ("inter alia", "among other things"),
    ("pro rata", "proportionally"),
    ("bona fide", "genuine"),
    ("de facto", "in practice"),
    ("ipso facto", "by that fact"),
    ("mutatis mutandis", "with necessary changes"),
    ("prima facie", "at first sight"),
    ("viz.", "namely"),
    ("i.e.", "that is"),
    ("e.g.", "for example"),
    ("liability", "legal responsibility"),
    ("jurisdiction", "legal authority"),
    ("arbitration", "dispute resolution outside court"),
    ("tort", "wrongful act causing harm"),
    ("plaintiff", "person who sues"),
    ("defendant", "person being sued"),
    ("statute", "written law"),
    ("breach", "violation"),
    ("fiduciary", "trust-based"),
    ("lien", "legal claim on property"),
    ("waiver", "giving up a right"),
    ("waive", "give up"),
    ("stipulate", "require as a condition"),
    ("rescind", "cancel"),
    ("null and void", "invalid and unenforceable"),
    ("force majeure", "unforeseeable circumstances"),
    ("quid pro quo", "something for something"),
    ("subpoena", "court order to appear"),
    ("affidavit", "sworn written statement"),
    ("deposition", "sworn testimony outside court"),
    ("amicus curiae", "friend of the court"),
    ("habeas corpus", "produce the person in court"),
    ("in lieu of", "instead of"),
    ("pro bono", "free of charge"),
    ("caveat emptor", "buyer beware"),
    ("due diligence", "careful investigation"),
    ("covenant", "formal promise"),
    ("consideration", "something of value exchanged"),
    ("remedy", "way to fix a wrong"),
    ("severability", "the rest still applies if one part fails"),
    ("assigns", "people the rights are transferred to"),
    ("successors", "those who take over later"),
    ("warranty", "guarantee"),
    ("termination", "ending"),
    ("terminate", "end"),
    ("prior to", "before"),
    ("subsequent to", "after"),
    ("in the event that", "if"),
    ("provided that", "as long as"),
    ("to the extent that", "as far as"),
    ("execute", "sign"),
    ("commence", "start"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TermEntry {
    pub term: String,
    pub meaning: String,
}

/// Read-only mapping from lowercase term to plain-English phrase.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    /// Sorted longest-first, ties alphabetical.
    entries: Vec<TermEntry>,
    index: HashMap<String, usize>,
    matcher: Option<Regex>,
}

static BUILTIN: Lazy<Arc<TermDictionary>> =
    Lazy::new(|| Arc::new(TermDictionary::from_entries(BUILTIN_TERMS.iter().copied())));

impl TermDictionary {
    /// Process-wide dictionary built from [`BUILTIN_TERMS`].
    #[must_use]
    pub fn builtin() -> Arc<TermDictionary> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut merged: HashMap<String, String> = HashMap::new();
        for (term, meaning) in entries {
            let key = term.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            merged.insert(key, meaning.as_ref().trim().to_string());
        }

        let mut entries: Vec<TermEntry> = merged
            .into_iter()
            .map(|(term, meaning)| TermEntry { term, meaning })
            .collect();
        entries.sort_by(|a, b| {
            b.term
                .chars()
                .count()
                .cmp(&a.term.chars().count())
                .then_with(|| a.term.cmp(&b.term))
        });

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.term.clone(), i))
            .collect();

        Self {
            matcher: build_matcher(&entries, MATCHER_SIZE_LIMIT),
            entries,
            index,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&TermEntry> {
        self.position(term).map(|i| &self.entries[i])
    }

    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&TermEntry> {
        self.entries.get(position)
    }

    /// Rank of `term` in longest-first order.
    #[must_use]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(&term.to_lowercase()).copied()
    }

    pub fn entries_longest_first(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// Alternation of every term, longest first, so the leftmost-first regex
    /// engine prefers the longer phrase at a given position and falls back to
    /// a shorter one when the longer phrase does not end on a word boundary.
    pub(crate) fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}

fn build_matcher(entries: &[TermEntry], size_limit: usize) -> Option<Regex> {
    if entries.is_empty() {
        return None;
    }
    let pattern = entries
        .iter()
        .map(|e| bounded(&e.term))
        .collect::<Vec<_>>()
        .join("|");
    // Terms are escaped literals, so only an oversized table can fail here.
    match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            warn!(
                terms = entries.len(),
                error = %e,
                "Term matcher failed to build, substitution disabled"
            );
            None
        }
    }
}

/// Escapes `term` and anchors each word-character edge to a word boundary,
/// so "lien" never fires inside "client" while "i.e." still matches before a
/// space.
// Word-edge matching is deliberate: plain substring replacement turns "marshall" into "marwill".
fn bounded(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut out = String::new();
    if term.chars().next().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out
}
