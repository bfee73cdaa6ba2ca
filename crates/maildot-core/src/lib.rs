// maildot-core: shared types for dotted-address expansion.
//
// Holds the pieces every other crate needs: local-part character
// classification and the decomposed `Address` type with its parse error.
// This crate is a leaf; the expansion engine lives in maildot-gen.

pub mod address;
pub mod character;

pub use address::{Address, AddressError};
pub use character::CharType;
