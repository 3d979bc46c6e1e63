use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the normalizer and the entry extraction helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single-character operation received a different number of characters.
    #[error("expected {expected} character, found {found}")]
    InvalidArgument { expected: usize, found: usize },

    #[error("xml error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the only character of `value`, or `InvalidArgument`.
pub(crate) fn single_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::InvalidArgument {
            expected: 1,
            found: value.chars().count(),
        }),
    }
}
