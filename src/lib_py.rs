#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
impl From<crate::Error> for PyErr {
    fn from(err: crate::Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python")]
#[pyfunction(signature = (text), text_signature = "(text)")]
/// Remove the accents in the provided string, except for Romanian diacritic marks.
///
/// Parameters
/// ----------
/// text : Optional[str]
///     The text to strip of accents other than Romanian diacritics.
///
/// Returns
/// -------
/// Optional[str]
///     The normalized text, or None when `text` is None.
fn normalize(text: Option<&str>) -> Option<String> {
    crate::normalize_opt(text)
}

#[cfg(feature = "python")]
#[pyfunction(signature = (chr), text_signature = "(chr)")]
/// Get the diacritics that are valid for the provided character.
///
/// Raises ValueError unless `chr` has length 1.
fn get_valid_diacritics(chr: &str) -> PyResult<Option<Vec<String>>> {
    let marks = crate::valid_diacritics(chr)?;
    Ok(marks.map(|m| m.iter().map(char::to_string).collect()))
}

#[cfg(feature = "python")]
#[pyfunction(signature = (chr), text_signature = "(chr)")]
/// Decompose the provided char into its base character and combining characters.
///
/// Raises ValueError unless `chr` has length 1.
fn decompose_char(chr: &str) -> PyResult<(String, Vec<String>)> {
    let d = crate::decompose_char(chr)?;
    Ok((
        d.base.to_string(),
        d.marks.iter().map(char::to_string).collect(),
    ))
}

#[cfg(feature = "python")]
#[pyfunction(signature = (value), text_signature = "(value)")]
/// Convert the value to Normalization Form C (NFC).
fn to_normalization_form_c(value: &str) -> String {
    crate::to_normalization_form_c(value)
}

#[cfg(feature = "python")]
#[pymodule]
fn rcf(m: &Bound<PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(get_valid_diacritics, m)?)?;
    m.add_function(wrap_pyfunction!(decompose_char, m)?)?;
    m.add_function(wrap_pyfunction!(to_normalization_form_c, m)?)?;
    let version = env!("CARGO_PKG_VERSION");
    m.setattr("__version__", version)?;
    Ok(())
}
