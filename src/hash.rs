use crate::state::Node;

/// SplitMix64 step for stable, fast key generation.
#[inline]
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// Domain tag (arbitrary but fixed)
const DOM_NODE: u64 = 0x0C1A_975E_0000_0001;

/// Stable 64-bit key for a node: a pure function of its packed bits, identical
/// across runs and machines. Structurally equal nodes share a key; no process
/// randomness is involved. The randomized solver rotates its move enumeration
/// by this key.
#[inline]
pub fn node_key(node: &Node) -> u64 {
    splitmix64(node.packed() ^ DOM_NODE)
}
