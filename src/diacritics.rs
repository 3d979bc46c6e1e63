//! Romanian diacritic marks and the per-letter table of marks a letter may keep.

use phf::phf_map;

use crate::error::{Result, single_char};

pub const CIRCUMFLEX_ACCENT: char = '\u{0302}';
pub const BREVE: char = '\u{0306}';
pub const COMMA_BELOW: char = '\u{0326}';

/// Marks drawn above the letter (â, î, ă).
pub const ABOVE_LETTER: &[char] = &[CIRCUMFLEX_ACCENT, BREVE];
/// Marks drawn below the letter (ș, ț).
pub const BELOW_LETTER: &[char] = &[COMMA_BELOW];
pub const ALL: &[char] = &[CIRCUMFLEX_ACCENT, BREVE, COMMA_BELOW];

const I_MARKS: &[char] = &[CIRCUMFLEX_ACCENT];

// Keyed by the uppercase base letter. Order inside a value is the preference
// order when several sanctioned marks are present.
static POLICY: phf::Map<char, &'static [char]> = phf_map! {
    'A' => ABOVE_LETTER,
    'I' => I_MARKS,
    'S' => BELOW_LETTER,
    'T' => BELOW_LETTER,
};

/// Marks that `value` (exactly one character, any case) is allowed to keep.
///
/// `Ok(None)` means the letter has no Romanian diacritics and every mark on it
/// should be dropped.
pub fn valid_diacritics(value: &str) -> Result<Option<&'static [char]>> {
    single_char(value).map(valid_diacritics_for)
}

/// Infallible form of [`valid_diacritics`] for callers that already hold a `char`.
pub fn valid_diacritics_for(ch: char) -> Option<&'static [char]> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => POLICY.get(&u).copied(),
        // 'ß' and friends upper-case to several letters.
        _ => None,
    }
}
