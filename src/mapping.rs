//! Page mappings for annotated dictionary entries.
//!
//! Every entry is an XHTML `article` holding a `div class="headword"` with the
//! entry title and one `button` per scanned page it spans.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::{is_letter, normalize};

pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// An entry title together with the pages it appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMapping {
    title_word: String,
    stem: String,
    pages: Vec<u32>,
}

impl PageMapping {
    pub fn new(title_word: impl Into<String>, mut pages: Vec<u32>) -> Self {
        let title_word = title_word.into();
        pages.sort_unstable();
        let stem = extract_stem(&title_word);
        PageMapping {
            title_word,
            stem,
            pages,
        }
    }

    pub fn title_word(&self) -> &str {
        &self.title_word
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Pages in ascending order.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    pub fn first_page(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    pub fn last_page(&self) -> Option<u32> {
        self.pages.last().copied()
    }
}

/// The leading run of uppercase letters of `title_word`, normalized.
///
/// Headwords are printed as `ABACĂ, abace, s.f.`; the capitals are the stem.
pub fn extract_stem(title_word: &str) -> String {
    let end = title_word
        .char_indices()
        .find(|&(_, c)| !(c.is_uppercase() && is_letter(c)))
        .map_or(title_word.len(), |(i, _)| i);
    normalize(&title_word[..end])
}

/// Orders mappings by stem, then by first page.
pub fn sort_mappings(mappings: &mut [PageMapping]) {
    mappings.sort_by(|a, b| {
        a.stem
            .cmp(&b.stem)
            .then_with(|| a.first_page().cmp(&b.first_page()))
    });
}

/// Extracts the mapping from the XHTML text of one entry.
///
/// Returns `Ok(None)` for documents that are not entry articles or that carry
/// no headword.
pub fn extract_mapping(xml: &str) -> Result<Option<PageMapping>> {
    // Exported entries start with an XHTML doctype.
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;

    let root = doc.root_element();
    if !root.has_tag_name((XHTML_NS, "article")) {
        debug!(root = root.tag_name().name(), "not an entry article");
        return Ok(None);
    }

    let title_word = doc
        .descendants()
        .find(|n| n.has_tag_name((XHTML_NS, "div")) && n.attribute("class") == Some("headword"))
        .and_then(|n| n.text())
        .filter(|t| !t.is_empty());
    let Some(title_word) = title_word else {
        debug!("entry has no headword");
        return Ok(None);
    };

    let pages = doc
        .descendants()
        .filter(|n| n.has_tag_name((XHTML_NS, "button")))
        .filter_map(|btn| {
            let page = btn.text().and_then(page_number);
            if page.is_none() {
                debug!(text = ?btn.text(), "skipping button without a page number");
            }
            page
        })
        .collect();

    Ok(Some(PageMapping::new(title_word, pages)))
}

/// Reads `path` and extracts its mapping.
pub fn extract_mapping_from_path(path: &Path) -> Result<Option<PageMapping>> {
    info!("Extracting mappings from {}.", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_mapping(&contents)
}

fn page_number(text: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[0-9]+").expect("valid regex"));
    re.find(text)?.as_str().parse().ok()
}
