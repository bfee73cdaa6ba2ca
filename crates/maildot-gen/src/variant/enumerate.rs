// Mask-driven expansion of dotted local-part variants.
//
// A canonical local-part of n characters has n-1 internal gaps, one between
// each pair of adjacent characters. Every subset of those gaps yields one
// distinct variant, so there are exactly 2^(n-1) of them, the empty subset
// being the dot-free canonical form. Dots never lead or trail.

use maildot_core::Address;

use super::collector::VariantSet;

/// Expand every dotted variant of `address` into `out`.
///
/// Subsets are walked as an `(n-1)`-bit mask in increasing integer order,
/// where bit `i` (LSB-first) means "insert a dot after canonical character
/// `i`". The dot-free form therefore always comes first and the fully
/// dotted form last. Results land in `out` in that order.
///
/// Locals of 65 or more characters have more variants than a `u64` can
/// count and could never be materialized; for those this function leaves
/// `out` untouched. [`MaildotHandle`](crate::handle::MaildotHandle)
/// enforces a far lower ceiling before calling in.
pub fn expand_into(address: &Address, out: &mut VariantSet) {
    let local: Vec<char> = address.local().chars().collect();
    let n = local.len();
    let Some(count) = address.variant_count() else {
        return;
    };

    for mask in 0..count {
        let mut dotted =
            String::with_capacity(n + address.gap_count() + 1 + address.domain().len());
        for (i, &c) in local.iter().enumerate() {
            dotted.push(c);
            if i < n - 1 && mask & (1u64 << i) != 0 {
                dotted.push('.');
            }
        }
        dotted.push('@');
        dotted.push_str(address.domain());
        out.push(dotted);
    }
}

/// Expand every dotted variant of `address` into a fresh set.
pub fn expand(address: &Address) -> VariantSet {
    let capacity = address.variant_count().unwrap_or(0).min(1 << 20) as usize;
    let mut out = VariantSet::with_capacity(capacity);
    expand_into(address, &mut out);
    out
}
