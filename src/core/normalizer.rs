use crate::domain::model::NumberKind;
use crate::utils::error::{EngineError, Result};

const COUNTRY_CODE: &str = "84";

/// Keeps ASCII digits only. Spaces, dots, dashes, `+` and anything else go.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reduces a raw number to the pure digit form the segmenter works on.
///
/// Phone numbers written with the `84` country code (11 or 12 digits) are
/// rewritten to the local `0…` form; a trunk `0` already following the
/// country code is kept as is. National IDs are never rewritten.
pub fn normalize(raw: &str, kind: NumberKind) -> Result<String> {
    let digits = strip_non_digits(raw);

    let normalized = match kind {
        NumberKind::Phone => collapse_country_code(digits),
        NumberKind::NationalId => digits,
    };

    if !kind.accepts_length(normalized.len()) {
        return Err(EngineError::InvalidLength {
            kind,
            length: normalized.len(),
            expected: kind.expected_lengths().to_string(),
        });
    }

    tracing::debug!(raw, normalized = %normalized, "normalized {}", kind.key());
    Ok(normalized)
}

fn collapse_country_code(digits: String) -> String {
    let len = digits.len();
    match digits.strip_prefix(COUNTRY_CODE) {
        Some(local) if (len == 11 || len == 12) && local.starts_with('0') => local.to_string(),
        Some(local) if len == 11 || len == 12 => format!("0{}", local),
        _ => digits,
    }
}
