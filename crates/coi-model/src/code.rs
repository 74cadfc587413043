//! Uid derivation: code normalization and per-batch disambiguation.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// Literal removed from normalized codes; sources often carry file names.
const PDF_MARKER: &str = "pdf";

/// Normalize a raw code into its canonical key.
///
/// Keeps ASCII letters and digits, lowercases them, then removes every
/// occurrence of `pdf`. Removal is a single left-to-right pass, so the
/// function is not idempotent for inputs such as `"pdpdff"`.
///
/// # Examples
///
/// ```
/// use coi_model::normalize_code;
///
/// assert_eq!(normalize_code("ABC-123.pdf"), "abc123");
/// assert_eq!(normalize_code("Certificate_of_Liability.PDF"), "certificateofliability");
/// ```
pub fn normalize_code(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    compact.replace(PDF_MARKER, "")
}

/// Normalize a code and reject results that cannot serve as a key.
pub fn normalized_key(raw: &str) -> Result<String> {
    let key = normalize_code(raw);
    if key.is_empty() {
        return Err(ModelError::EmptyCode {
            raw: raw.to_string(),
        });
    }
    Ok(key)
}

/// Assigns uids within one extraction batch.
///
/// The first occurrence of a normalized code keeps it unchanged; the Nth
/// occurrence becomes `{code}d{N}`. Counts never consult a persisted store.
#[derive(Debug, Default)]
pub struct UidAllocator {
    counts: HashMap<String, usize>,
}

impl UidAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, normalized: &str) -> String {
        let count = self.counts.entry(normalized.to_string()).or_insert(0);
        *count += 1;
        if *count > 1 {
            format!("{normalized}d{count}")
        } else {
            normalized.to_string()
        }
    }

    /// Like [`assign`](Self::assign), but keeps counting while `taken`
    /// reports the candidate as used.
    ///
    /// Needed when a suffixed uid (`a1d2`) equals another row's plain code.
    pub fn assign_unused(&mut self, normalized: &str, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = self.assign(normalized);
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}
