// maildot-gen: dotted-address expansion engine.
//
// For providers that ignore dots in the local-part, every way of placing
// dots between the characters of an address routes to the same mailbox.
// This crate enumerates all of them: a local-part of n characters has n-1
// internal gaps and therefore exactly 2^(n-1) distinct dotted renderings.
//
// Architecture:
//   - `variant`: the enumeration core and the ordered result container
//   - `handle`: policy-carrying entry point (typed and fail-soft surfaces)
//   - `session`: presentation state for interactive hosts (paging, touched)

pub mod handle;
pub mod session;
pub mod variant;

// Re-export key types for convenient access.
pub use handle::{DEFAULT_MAX_LOCAL_CHARS, ExpandError, MaildotHandle};
pub use session::{DEFAULT_PAGE_SIZE, VariantSession};
pub use variant::VariantSet;

/// Expand every dotted variant of `input` with the default policy.
///
/// Fail-soft: invalid addresses (wrong `@` count, empty or non-alphanumeric
/// local-part after dot-stripping) and local-parts beyond the default
/// ceiling of [`DEFAULT_MAX_LOCAL_CHARS`] characters yield an empty vector.
/// Use [`MaildotHandle`] directly for typed errors or a different ceiling.
pub fn generate(input: &str) -> Vec<String> {
    MaildotHandle::new().generate(input)
}
