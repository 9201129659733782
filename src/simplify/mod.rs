//! Legal-text simplification: term dictionary, local heuristic and the
//! remote-first fallback chain.

pub mod fallback;
pub mod local;
pub mod terms;

pub use fallback::{FallbackSimplifier, Source};
pub use local::{EMPTY_INPUT_PROMPT, LocalSimplifier};
pub use terms::{TermDictionary, TermEntry};
