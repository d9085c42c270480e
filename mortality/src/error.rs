//! Error types for input handled at the application boundary
//!
//! The calculations and the store never fail; these cover parsing and the
//! basic numeric checks applied before values reach them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortalityError {
    #[error("unknown pet type '{0}' (expected 'dog' or 'cat')")]
    UnknownPetKind(String),

    #[error("invalid age {value}: {reason}")]
    InvalidAge { value: f64, reason: &'static str },

    #[error("invalid entry '{entry}': {reason}")]
    InvalidEntry { entry: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MortalityError>;

/// Reject ages no calculation can make sense of
pub fn validate_age(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MortalityError::InvalidAge {
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(MortalityError::InvalidAge {
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age(30.5), Ok(30.5));
        assert_eq!(validate_age(0.0), Ok(0.0));
        // past life expectancy is fine, the calculations clamp
        assert_eq!(validate_age(120.0), Ok(120.0));

        assert!(validate_age(-1.0).is_err());
        assert!(validate_age(f64::NAN).is_err());
        assert!(validate_age(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = MortalityError::UnknownPetKind("fish".into());
        assert_eq!(err.to_string(), "unknown pet type 'fish' (expected 'dog' or 'cat')");

        let err = validate_age(-2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid age -2: must not be negative");
    }
}
