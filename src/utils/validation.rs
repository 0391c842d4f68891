use crate::utils::error::{EngineError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EngineError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so check containment rather than exclusion
    if !(value >= min && value <= max) {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that `value` is one of `allowed`, naming the allowed set in the error.
pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(EngineError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("response_factors.SINH_KHI", 1.2, 0.1, 5.0).is_ok());
        assert!(validate_range("response_factors.SINH_KHI", 0.0, 0.1, 5.0).is_err());
        assert!(validate_range("response_factors.SINH_KHI", f64::NAN, 0.1, 5.0).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("batch.input_path", "numbers.csv").is_ok());
        assert!(validate_path("batch.input_path", "").is_err());
        assert!(validate_path("batch.input_path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("analysis.default_kind", "phone", &["phone", "national_id"]).is_ok());
        let err = validate_one_of("analysis.default_kind", "fax", &["phone", "national_id"])
            .unwrap_err();
        assert!(err.to_string().contains("fax"));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("in.csv".to_string());
        assert_eq!(validate_required_field("batch.input_path", &present).unwrap(), "in.csv");
        let absent: Option<String> = None;
        assert!(validate_required_field("batch.input_path", &absent).is_err());
    }
}
