//! Helpers for values crossing the language boundary.
use anyhow::{bail, Result};

/// Decode a byte-encoded environment id.
///
/// Registry ids are ASCII; anything else is rejected before reaching Python.
pub fn decode_ascii(name: &[u8]) -> Result<String> {
    if !name.is_ascii() {
        bail!("non-ASCII environment id: {:?}", name);
    }
    Ok(String::from_utf8(name.to_vec())?)
}

/// Normalize the textual action-space description.
pub fn normalize_space_repr(repr: &str) -> String {
    repr.trim().to_string()
}
