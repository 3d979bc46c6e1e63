//! Romanian Canonical Form.
//!
//! [`normalize`] removes accents from text while keeping the Romanian
//! diacritics (â, î, ă, ș, ț). The [`mapping`] module builds page mappings for
//! annotated dictionary entries on top of it.

use unicode_normalization::char::is_combining_mark;

// Include Python bindings when building with the `python` feature.
#[cfg(feature = "python")]
mod lib_py;

pub mod decompose;
pub mod diacritics;
mod error;
pub mod mapping;

pub use decompose::{Decomposition, decompose_char, to_normalization_form_c};
pub use diacritics::{valid_diacritics, valid_diacritics_for};
pub use error::{Error, Result};
pub use mapping::{PageMapping, extract_mapping, extract_mapping_from_path, extract_stem, sort_mappings};

/// Strips every accent from `text` except the Romanian diacritics.
///
/// Non-letters are copied unchanged. Each letter is decomposed; the base is
/// kept together with the first of its marks that the base letter's policy
/// allows, left as a separate combining character (`"Ș"` becomes
/// `"S\u{0326}"`). All other marks are dropped.
pub fn normalize(text: &str) -> String {
    // ASCII carries no marks.
    if text.is_ascii() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !is_letter(ch) {
            out.push(ch);
            continue;
        }

        let Decomposition { base, marks } = Decomposition::of(ch);
        out.push(base);
        if let Some(allowed) = valid_diacritics_for(base) {
            if let Some(&mark) = marks.iter().find(|m| allowed.contains(m)) {
                out.push(mark);
            }
        }
    }
    out
}

/// [`normalize`] lifted over an absent value: `None` stays `None`.
pub fn normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(normalize)
}

/// Letters only: marks flagged `Alphabetic` (U+0345 and the like) pass through verbatim.
pub(crate) fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !is_combining_mark(ch)
}
