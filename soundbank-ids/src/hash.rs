//! The authoring tool's name hash.
//!
//! IDs are 32-bit FNV-1 over the lower-cased bytes of the display name, so
//! `"2D SFX"` hashes to the ID generated as `BUSSES::_2D_SFX`. Registry lookups
//! never depend on this; it exists for posting symbols by name and for
//! generating tables from a project description.

const FNV_OFFSET_BASIS: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

/// Compute the ID the authoring tool assigns to `name`.
///
/// Case-insensitive for ASCII.
pub const fn short_id(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(FNV_PRIME) ^ bytes[i].to_ascii_lowercase() as u32;
        i += 1;
    }
    hash
}
