use plainlegal::simplify::local::{ADVISORY_HEADING, TERMS_HEADING};
use plainlegal::simplify::{EMPTY_INPUT_PROMPT, LocalSimplifier, TermDictionary};

#[test]
fn test_empty_input_returns_prompt() {
    let simplifier = LocalSimplifier::default();
    assert_eq!(simplifier.simplify(""), EMPTY_INPUT_PROMPT);
    assert_eq!(simplifier.simplify("   \n\t "), EMPTY_INPUT_PROMPT);
}

#[test]
fn test_indemnity_clause_example() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify(
        "The parties shall indemnify and hold harmless each other pursuant to this agreement.",
    );

    let expected = "PLAIN ENGLISH VERSION:\n\
The parties will protect and not blame each other according to this agreement.\n\
\n\
LEGAL TERMS DECODED:\n\
• \"indemnify and hold harmless\" → protect and not blame\n\
• \"pursuant to\" → according to\n\
• \"shall\" → will";
    assert_eq!(output, expected);
}

#[test]
fn test_longest_phrase_wins_over_component_terms() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("Tenant agrees to indemnify and hold harmless the Landlord.");

    assert!(output.contains("protect and not blame"));
    assert!(!output.contains("protect from loss"));
    assert!(!output.contains("• \"indemnify\""));
    assert!(!output.contains("• \"hold harmless\""));
}

#[test]
fn test_shorter_term_still_applies_on_its_own() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("The contractor will indemnify the owner for all losses.");
    assert!(output.contains("The contractor will protect from loss the owner"));
    assert!(output.contains("• \"indemnify\" → protect from loss"));
}

#[test]
fn test_no_terms_means_no_terms_section() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("The cat sat on the mat and then went home.");
    assert_eq!(
        output,
        "PLAIN ENGLISH VERSION:\nThe cat sat on the mat and then went home."
    );
    assert!(!output.contains(TERMS_HEADING));
}

#[test]
fn test_terms_inside_other_words_are_left_alone() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("Our client signed the letter yesterday afternoon.");
    assert!(output.contains("Our client signed"));
    assert!(!output.contains(TERMS_HEADING));
}

#[test]
fn test_matching_is_case_insensitive() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("WHEREAS the Lessee wishes to rent the premises.");
    assert!(output.contains("Since the Lessee wishes"));
    assert!(output.contains("• \"whereas\" → since"));
}

#[test]
fn test_advisory_gated_on_word_count() {
    let simplifier = LocalSimplifier::default();

    let fifty = vec!["rent"; 50].join(" ");
    assert!(!simplifier.simplify(&fifty).contains(ADVISORY_HEADING));

    let fifty_one = vec!["rent"; 51].join(" ");
    assert!(simplifier.simplify(&fifty_one).contains(ADVISORY_HEADING));
}

#[test]
fn test_reported_terms_are_capped() {
    let text = "hereinafter whereas thereof hereby herein hereto hereunder therein thereto \
notwithstanding forthwith henceforth aforementioned aforesaid liability jurisdiction \
arbitration plaintiff defendant statute";

    let default_cap = LocalSimplifier::default().simplify(text);
    assert_eq!(default_cap.lines().filter(|l| l.starts_with("• ")).count(), 15);

    let wide = LocalSimplifier::new(TermDictionary::builtin(), 20, 50).simplify(text);
    assert_eq!(wide.lines().filter(|l| l.starts_with("• ")).count(), 20);
}

#[test]
fn test_zero_cap_omits_terms_section() {
    let simplifier = LocalSimplifier::new(TermDictionary::builtin(), 0, 50);
    let output = simplifier.simplify("The tenant shall pay rent monthly.");
    assert_eq!(
        output,
        "PLAIN ENGLISH VERSION:\nThe tenant will pay rent monthly."
    );
    assert!(!output.contains(TERMS_HEADING));
}

#[test]
fn test_short_fragments_dropped() {
    let simplifier = LocalSimplifier::default();
    let output = simplifier.simplify("1. The buyer pays on delivery. 2. Ok.");
    assert_eq!(output, "PLAIN ENGLISH VERSION:\nThe buyer pays on delivery.");
}

#[test]
fn test_output_is_deterministic() {
    let simplifier = LocalSimplifier::default();
    let text = "Notwithstanding the foregoing, the licensee shall not assign this \
agreement; any breach is null and void.";
    assert_eq!(simplifier.simplify(text), simplifier.simplify(text));
}

#[test]
fn test_custom_dictionary() {
    let dict = TermDictionary::from_entries([("lessee", "tenant"), ("LESSEE", "renter")]);
    let simplifier = LocalSimplifier::new(std::sync::Arc::new(dict), 15, 50);
    let output = simplifier.simplify("The lessee pays the electricity bill.");
    assert!(output.contains("The renter pays"));
    assert!(output.contains("• \"lessee\" → renter"));
}
