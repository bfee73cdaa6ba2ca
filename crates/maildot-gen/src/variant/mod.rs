// Variant expansion module
//
// Produces every dotted rendering of a canonical local-part by walking the
// power set of its internal gap positions.
//
// Architecture:
//   - `enumerate`: mask-driven expansion over the gap positions
//   - `collector`: ordered, uniqueness-preserving container for results

pub mod collector;
pub mod enumerate;

// Re-export key items for convenient access.
pub use collector::VariantSet;
pub use enumerate::{expand, expand_into};
