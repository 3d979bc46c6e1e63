//! Canonical decomposition of a single character into its base and combining marks.

use std::iter;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::error::{Result, single_char};

/// A character split into its base and the combining marks applied on it.
///
/// Marks are kept in application order: the mark closest to the base first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub base: char,
    pub marks: Vec<char>,
}

impl Decomposition {
    /// Decomposes `ch` transitively using the canonical mappings only.
    ///
    /// Characters without a canonical mapping decompose to themselves with no
    /// marks. Compatibility mappings are never applied, and neither are the
    /// algorithmic Hangul ones since their trailing parts are jamo, not marks.
    pub fn of(ch: char) -> Self {
        let mut composed = iter::once(ch).nfc();
        let head = composed.next().unwrap_or(ch);
        // Composition exclusions (U+0958 and friends) stay expanded under NFC.
        let trailing: Vec<char> = composed.collect();

        // The table behind `decompose_canonical` is already closed under
        // repeated decomposition: base first, then the marks innermost first.
        let mut parts = Vec::with_capacity(4);
        decompose_canonical(head, |c| parts.push(c));

        let mut parts = parts.into_iter();
        let base = parts.next().unwrap_or(head);
        let mut marks = Vec::with_capacity(parts.len() + trailing.len());
        for part in parts {
            if !is_combining_mark(part) {
                return Decomposition {
                    base: head,
                    marks: trailing,
                };
            }
            marks.push(part);
        }
        marks.extend(trailing);

        Decomposition { base, marks }
    }

    /// True when the character had nothing to decompose.
    pub fn is_bare(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Decomposes `value`, which must hold exactly one character.
pub fn decompose_char(value: &str) -> Result<Decomposition> {
    single_char(value).map(Decomposition::of)
}

/// Normalization Form C of `value`.
pub fn to_normalization_form_c(value: &str) -> String {
    value.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn decomp(ch: char) -> (char, Vec<char>) {
        let d = Decomposition::of(ch);
        (d.base, d.marks)
    }

    #[test]
    fn romanian_letters() {
        assert_eq!(decomp('â'), ('a', vec!['\u{0302}']));
        assert_eq!(decomp('Ă'), ('A', vec!['\u{0306}']));
        assert_eq!(decomp('ș'), ('s', vec!['\u{0326}']));
        assert_eq!(decomp('Ț'), ('T', vec!['\u{0326}']));
        // Cedilla forms are distinct letters with their own mark.
        assert_eq!(decomp('ş'), ('s', vec!['\u{0327}']));
    }

    #[test]
    fn stacked_marks_keep_application_order() {
        // ấ = â + acute = a + circumflex + acute
        assert_eq!(decomp('ấ'), ('a', vec!['\u{0302}', '\u{0301}']));
        // ẵ = ă + tilde
        assert_eq!(decomp('ẵ'), ('a', vec!['\u{0306}', '\u{0303}']));
        // ṩ = ṣ + dot above = s + dot below + dot above
        assert_eq!(decomp('ṩ'), ('s', vec!['\u{0323}', '\u{0307}']));
    }

    #[test]
    fn minimal_characters_are_idempotent() {
        for ch in ['a', 'Z', '7', ' ', 'ß', 'ł', '中'] {
            let d = Decomposition::of(ch);
            assert_eq!(d.base, ch);
            assert!(d.is_bare());
            assert_eq!(Decomposition::of(d.base), d);
        }
    }

    #[test]
    fn compatibility_mappings_are_not_applied() {
        // ª has only a <super> mapping.
        assert_eq!(decomp('ª'), ('ª', vec![]));
        // ﬁ has only a <compat> mapping.
        assert_eq!(decomp('ﬁ'), ('ﬁ', vec![]));
    }

    #[test]
    fn hangul_syllables_stay_whole() {
        assert_eq!(decomp('가'), ('가', vec![]));
    }

    #[test]
    fn singleton_mappings_go_through_nfc() {
        // ANGSTROM SIGN is canonically Å.
        assert_eq!(decomp('\u{212B}'), ('A', vec!['\u{030A}']));
    }

    #[test]
    fn composition_exclusions_keep_their_trailing_mark() {
        // DEVANAGARI LETTER QA = KA + NUKTA, never recomposed by NFC.
        assert_eq!(decomp('\u{0958}'), ('\u{0915}', vec!['\u{093C}']));
    }

    #[test]
    fn decompose_char_requires_one_character() {
        assert!(decompose_char("ă").is_ok());
        assert!(matches!(
            decompose_char(""),
            Err(Error::InvalidArgument { found: 0, .. })
        ));
        assert!(matches!(
            decompose_char("a\u{0306}"),
            Err(Error::InvalidArgument { found: 2, .. })
        ));
    }

    #[test]
    fn nfc_composes_sequences() {
        assert_eq!(to_normalization_form_c("a\u{0306}"), "ă");
        assert_eq!(to_normalization_form_c(""), "");
    }
}
