use crate::error::{Error, Result};

/// Reduce a raw tool name to lower-case ASCII letters.
///
/// Both tool and parent names go through here so that path segments and
/// namespace segments always derive from the same value.
pub fn sanitize(raw: &str, field_name: &str) -> Result<String> {
    let out: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if out.is_empty() {
        return Err(Error::scaffold_invalid_name(field_name, raw));
    }

    Ok(out)
}

/// Sanitize an optional parent name. Absent or blank input means "no parent".
pub fn sanitize_parent(raw: Option<&str>, field_name: &str) -> Result<Option<String>> {
    match raw {
        Some(value) if !value.trim().is_empty() => sanitize(value, field_name).map(Some),
        _ => Ok(None),
    }
}
