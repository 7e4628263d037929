//! Line sequences to recite
//!
//! An empty entry is a stanza break, not content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Built-in lyrics: the chorus, a stanza break, then the verse
pub const DEFAULT_LYRICS: &[&str] = &[
    "Mujhe ek jagah aaraam nahi",
    "ruk jana mera kaam nahi",
    "",
    "Mera saath kahan tak dogi tum",
    "main des videsh ka banjara",
    "Itna na mujhse tu pyaar badha",
    "ki main ik badal aawara",
    "kaise kisi ka sahara banoon",
    "ki main khudh beghar bechara",
    "Isliye tujhse main pyaar karoon",
    "ki too ik badal aawara",
];

/// Read a line sequence from a text file, one entry per line.
///
/// Blank lines are kept so they act as stanza breaks. Trailing `\r` from
/// CRLF files is dropped.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lyrics file: {}", path.display()))?;

    Ok(content.lines().map(String::from).collect())
}
