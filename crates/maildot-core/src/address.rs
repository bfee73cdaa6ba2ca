// Address decomposition and local-part canonicalization.
//
// An address is split on `@` into a local-part and a domain. Dots in the
// local-part carry no routing meaning at dot-insensitive providers, so the
// canonical form strips them before validating that only ASCII letters and
// digits remain. The domain is kept verbatim and deliberately unvalidated;
// requiring exactly one `@` is the only structural check on it.

use crate::character::{CharType, char_type};

/// Error type for address parse failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input did not contain exactly one `@` separator.
    #[error("expected exactly one '@' separator")]
    Separator,

    /// The local-part was empty after removing dots.
    #[error("local part is empty after removing dots")]
    EmptyLocal,

    /// The local-part contained a character outside `[A-Za-z0-9.]`.
    #[error("invalid character '{0}' in local part")]
    LocalChar(char),
}

/// A decomposed address: canonical (dot-free) local-part plus verbatim domain.
///
/// Construct via [`Address::parse`]. The canonical local-part is guaranteed
/// non-empty and ASCII alphanumeric, so character count and byte count agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    local: String,
    domain: String,
}

impl Address {
    /// Parse and canonicalize a raw address string.
    ///
    /// Splits on `@` (the piece count must be exactly two, rejecting both
    /// missing and repeated separators), strips every dot from the first
    /// piece, and validates that the remaining characters are ASCII
    /// alphanumeric and non-empty. The second piece becomes the domain,
    /// untouched; an empty domain is accepted.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let pieces: Vec<&str> = input.split('@').collect();
        if pieces.len() != 2 {
            return Err(AddressError::Separator);
        }

        let mut local = String::with_capacity(pieces[0].len());
        for c in pieces[0].chars() {
            match char_type(c) {
                CharType::Alnum => local.push(c),
                CharType::Dot => {}
                CharType::Other => return Err(AddressError::LocalChar(c)),
            }
        }
        if local.is_empty() {
            return Err(AddressError::EmptyLocal);
        }

        Ok(Self {
            local,
            domain: pieces[1].to_string(),
        })
    }

    /// The canonical (dot-free) local-part.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The domain, exactly as supplied.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Number of characters in the canonical local-part. Always >= 1.
    pub fn local_len(&self) -> usize {
        self.local.len()
    }

    /// Number of internal gaps that can hold a dot: one fewer than the
    /// local-part length.
    pub fn gap_count(&self) -> usize {
        self.local.len() - 1
    }

    /// Number of distinct dotted variants: `2^gap_count`.
    ///
    /// Returns `None` when the count does not fit in a `u64` (65 or more
    /// local-part characters); such an address cannot be materialized anyway.
    pub fn variant_count(&self) -> Option<u64> {
        1u64.checked_shl(self.gap_count() as u32)
    }

    /// The canonical full address: dot-free local-part plus domain.
    pub fn canonical(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }
}
