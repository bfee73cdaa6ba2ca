// MaildotHandle: top-level integration point for dotted-address expansion.
//
// Owns the expansion policy and provides both surfaces hosts need:
//   - typed (`expand`, `count`, `check`) for hosts that explain rejections
//   - fail-soft (`generate`) where any rejected input is an empty sequence
//
// The variant count doubles with every local-part character, so the handle
// carries an explicit, caller-visible ceiling on canonical local-part
// length instead of ever truncating results.

use maildot_core::address::{Address, AddressError};

use crate::variant::{VariantSet, expand_into};

/// Default ceiling on canonical local-part length (2^19 variants).
pub const DEFAULT_MAX_LOCAL_CHARS: usize = 20;

/// Ceilings above this are clamped; past 64 characters the variant count no
/// longer fits in a `u64`.
const MAX_CEILING: usize = 64;

/// Error type for the typed expansion surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// The input failed address validation.
    #[error(transparent)]
    Invalid(#[from] AddressError),

    /// The canonical local-part exceeds the configured ceiling.
    #[error("local part has {len} characters, limit is {max}")]
    LocalTooLong { len: usize, max: usize },
}

/// Expansion policy holder and entry point.
///
/// Stateless apart from configuration; every call validates its input from
/// scratch and nothing persists between calls.
#[derive(Debug, Clone)]
pub struct MaildotHandle {
    /// Maximum canonical local-part length accepted for expansion.
    max_local_chars: usize,
}

impl MaildotHandle {
    /// Create a handle with the default local-part ceiling.
    pub fn new() -> Self {
        Self {
            max_local_chars: DEFAULT_MAX_LOCAL_CHARS,
        }
    }

    /// Set the local-part ceiling. Values above 64 are clamped.
    pub fn set_max_local_chars(&mut self, max: usize) {
        self.max_local_chars = max.min(MAX_CEILING);
    }

    /// The current local-part ceiling.
    pub fn max_local_chars(&self) -> usize {
        self.max_local_chars
    }

    /// Validate an address against syntax and ceiling without expanding.
    pub fn check(&self, input: &str) -> Result<Address, ExpandError> {
        let address = Address::parse(input)?;
        if address.local_len() > self.max_local_chars {
            return Err(ExpandError::LocalTooLong {
                len: address.local_len(),
                max: self.max_local_chars,
            });
        }
        Ok(address)
    }

    /// Expand every dotted variant of `input`.
    ///
    /// The result holds exactly `2^(n-1)` addresses for a canonical
    /// local-part of `n` characters, in mask order (dot-free form first).
    pub fn expand(&self, input: &str) -> Result<VariantSet, ExpandError> {
        let address = self.check(input)?;
        // Preallocation is capped; anything larger grows as it streams in.
        let capacity = address.variant_count().unwrap_or(0).min(1 << 20) as usize;
        let mut out = VariantSet::with_capacity(capacity);
        expand_into(&address, &mut out);
        Ok(out)
    }

    /// Count the variants of `input` without materializing any of them.
    pub fn count(&self, input: &str) -> Result<u64, ExpandError> {
        let address = self.check(input)?;
        // check() bounds the local at 64 chars, so the count fits.
        Ok(address.variant_count().unwrap_or(0))
    }

    /// Fail-soft expansion: every rejected input (bad syntax or over the
    /// ceiling) yields an empty vector, never an error. Hosts that need the
    /// reason use [`expand`](Self::expand) instead.
    pub fn generate(&self, input: &str) -> Vec<String> {
        match self.expand(input) {
            Ok(set) => set.into_vec(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for MaildotHandle {
    fn default() -> Self {
        Self::new()
    }
}
