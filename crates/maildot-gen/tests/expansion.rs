//! End-to-end tests for the expansion engine: counts, ordering, structural
//! guarantees, and the interactive-session lifecycle.
//!
//! Run: cargo test -p maildot-gen --test expansion

use maildot_core::{Address, AddressError};
use maildot_gen::{ExpandError, MaildotHandle, VariantSession, generate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Local-parts of lengths 1..=10 for count/structure sweeps.
fn sample_locals() -> Vec<String> {
    (1..=10).map(|n| "abcdefghij"[..n].to_string()).collect()
}

/// Strip dots from the part before `@`.
fn strip_dots(address: &str) -> String {
    let (local, domain) = address.split_once('@').unwrap();
    let stripped: String = local.chars().filter(|&c| c != '.').collect();
    format!("{stripped}@{domain}")
}

// ---------------------------------------------------------------------------
// Counts and uniqueness
// ---------------------------------------------------------------------------

#[test]
fn single_char_local_yields_itself() {
    for u in ["a", "Z", "7"] {
        let result = generate(&format!("{u}@d.com"));
        assert_eq!(result, vec![format!("{u}@d.com")]);
    }
}

#[test]
fn variant_count_is_two_to_the_gaps() {
    for local in sample_locals() {
        let n = local.len();
        let result = generate(&format!("{local}@gmail.com"));
        assert_eq!(result.len(), 1 << (n - 1), "wrong count for {local}");
    }
}

#[test]
fn variants_are_pairwise_distinct() {
    for local in sample_locals() {
        let result = generate(&format!("{local}@gmail.com"));
        let unique: std::collections::HashSet<&String> = result.iter().collect();
        assert_eq!(unique.len(), result.len(), "collision for {local}");
    }
}

// ---------------------------------------------------------------------------
// Structure of each variant
// ---------------------------------------------------------------------------

#[test]
fn every_variant_keeps_domain_and_character_order() {
    for local in sample_locals() {
        let input = format!("{local}@sub.example.org");
        for variant in generate(&input) {
            assert!(
                variant.ends_with("@sub.example.org"),
                "domain altered in {variant}"
            );
            let vlocal = variant.split('@').next().unwrap();
            assert!(!vlocal.starts_with('.'), "leading dot in {variant}");
            assert!(!vlocal.ends_with('.'), "trailing dot in {variant}");
            let stripped: String = vlocal.chars().filter(|&c| c != '.').collect();
            assert_eq!(stripped, local, "characters reordered in {variant}");
        }
    }
}

#[test]
fn dots_never_double_up() {
    for variant in generate("abcdef@x") {
        assert!(!variant.contains(".."), "adjacent dots in {variant}");
    }
}

// ---------------------------------------------------------------------------
// Enumeration order
// ---------------------------------------------------------------------------

#[test]
fn two_char_scenario_in_order() {
    assert_eq!(
        generate("ab@gmail.com"),
        vec!["ab@gmail.com", "a.b@gmail.com"]
    );
}

#[test]
fn three_char_scenario_in_order() {
    assert_eq!(
        generate("abc@gmail.com"),
        vec![
            "abc@gmail.com",
            "a.bc@gmail.com",
            "ab.c@gmail.com",
            "a.b.c@gmail.com",
        ]
    );
}

// ---------------------------------------------------------------------------
// Dot-stripping idempotence
// ---------------------------------------------------------------------------

#[test]
fn pre_dotted_input_equals_dot_free_input() {
    assert_eq!(generate("a.b.c@x.com"), generate("abc@x.com"));
}

#[test]
fn any_dot_placement_in_the_input_is_equivalent() {
    let dot_free = generate("abcd@x");
    for dotted in ["a.bcd@x", "ab.cd@x", "abc.d@x", "a.b.c.d@x", ".abcd.@x"] {
        assert_eq!(generate(dotted), dot_free, "differs for input {dotted}");
    }
}

#[test]
fn generating_from_any_variant_reproduces_the_set() {
    let base = generate("abcd@x");
    for variant in &base {
        assert_eq!(&generate(variant), &base, "differs when fed {variant}");
    }
}

#[test]
fn stripping_dots_from_any_variant_gives_the_canonical_form() {
    for variant in generate("abc@gmail.com") {
        assert_eq!(strip_dots(&variant), "abc@gmail.com");
    }
}

// ---------------------------------------------------------------------------
// Invalid inputs
// ---------------------------------------------------------------------------

#[test]
fn invalid_inputs_yield_empty_sequences() {
    for input in [
        "noAtSign",
        "a@b@c",
        "@domain.com",
        "us!er@domain.com",
        "...@domain.com",
        "",
        "@",
        "user name@x.com",
    ] {
        assert!(generate(input).is_empty(), "expected empty for {input:?}");
    }
}

#[test]
fn typed_surface_explains_each_rejection() {
    let handle = MaildotHandle::new();
    assert_eq!(
        handle.expand("a@b@c").unwrap_err(),
        ExpandError::Invalid(AddressError::Separator)
    );
    assert_eq!(
        handle.expand("@domain.com").unwrap_err(),
        ExpandError::Invalid(AddressError::EmptyLocal)
    );
    assert_eq!(
        handle.expand("us!er@domain.com").unwrap_err(),
        ExpandError::Invalid(AddressError::LocalChar('!'))
    );
}

// ---------------------------------------------------------------------------
// Ceiling policy
// ---------------------------------------------------------------------------

#[test]
fn ceiling_rejects_with_a_typed_error_and_soft_empty() {
    let mut handle = MaildotHandle::new();
    handle.set_max_local_chars(8);
    let input = format!("{}@x", "a".repeat(9));
    assert_eq!(
        handle.expand(&input).unwrap_err(),
        ExpandError::LocalTooLong { len: 9, max: 8 }
    );
    assert!(handle.generate(&input).is_empty());
}

#[test]
fn count_agrees_with_expansion_below_the_ceiling() {
    let handle = MaildotHandle::new();
    for local in sample_locals() {
        let input = format!("{local}@x");
        assert_eq!(
            handle.count(&input).unwrap(),
            handle.expand(&input).unwrap().len() as u64
        );
    }
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[test]
fn session_walks_pages_like_a_host_would() {
    let mut session = VariantSession::new();
    session.set_input("abcdefg@gmail.com"); // 64 variants
    session.generate();
    assert_eq!(session.total(), 64);
    assert_eq!(session.total_pages(), 2); // 50 + 14

    let first: Vec<String> = session.current_items().to_vec();
    assert_eq!(first.len(), 50);
    assert_eq!(first[0], "abcdefg@gmail.com");

    assert!(session.next_page());
    assert_eq!(session.current_items().len(), 14);
    assert!(!session.next_page());

    assert!(session.prev_page());
    assert_eq!(session.current_items(), &first[..]);
}

#[test]
fn session_distinguishes_untouched_from_invalid() {
    let mut session = VariantSession::new();
    // Not yet requested: empty but untouched.
    assert!(!session.touched() && session.total() == 0);

    session.set_input("bad input");
    session.generate();
    // Invalid: still empty, but touched with a recorded reason.
    assert!(session.touched());
    assert_eq!(session.total(), 0);
    assert!(session.last_error().is_some());
}

#[test]
fn session_results_expose_the_full_ordered_set() {
    let mut session = VariantSession::new();
    session.set_input("abc@x.com");
    session.generate();
    assert_eq!(
        session.results().as_slice(),
        &[
            "abc@x.com",
            "a.bc@x.com",
            "ab.c@x.com",
            "a.b.c@x.com",
        ]
    );
}

// ---------------------------------------------------------------------------
// Address-level invariants
// ---------------------------------------------------------------------------

#[test]
fn address_count_matches_generated_length() {
    for local in sample_locals() {
        let addr = Address::parse(&format!("{local}@x")).unwrap();
        let generated = generate(&format!("{local}@x"));
        assert_eq!(addr.variant_count(), Some(generated.len() as u64));
    }
}
