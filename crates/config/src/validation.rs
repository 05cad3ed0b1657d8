use crate::ConfigResult;

/// Trait for configuration validation
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}

/// General validation utilities
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field_name: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} cannot be empty"
            )));
        }
        Ok(())
    }

    /// Validate that a timeout is positive and reasonable
    pub fn validate_timeout_seconds(timeout_seconds: f64, field_name: &str) -> ConfigResult<()> {
        if !timeout_seconds.is_finite() || timeout_seconds <= 0.0 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be greater than 0"
            )));
        }
        if timeout_seconds > 3600.0 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be less than or equal to 3600"
            )));
        }
        Ok(())
    }

    /// Validate that a count lies in `1..=max`
    pub fn validate_count(count: usize, field_name: &str, max: usize) -> ConfigResult<()> {
        if count == 0 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be greater than 0"
            )));
        }
        if count > max {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be less than or equal to {max}"
            )));
        }
        Ok(())
    }

    /// Validate a `major.minor.patch` version string
    pub fn validate_version(version: &str, field_name: &str) -> ConfigResult<()> {
        Self::validate_not_empty(version, field_name)?;

        let parts: Vec<&str> = version.split('.').collect();
        let well_formed = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
        if !well_formed {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must look like major.minor.patch, got '{version}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(ValidationUtils::validate_not_empty("test", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("  test  ", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("", "field").is_err());
        assert!(ValidationUtils::validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_validate_timeout_seconds() {
        assert!(ValidationUtils::validate_timeout_seconds(30.0, "t").is_ok());
        assert!(ValidationUtils::validate_timeout_seconds(0.05, "t").is_ok());
        assert!(ValidationUtils::validate_timeout_seconds(3600.0, "t").is_ok());
        assert!(ValidationUtils::validate_timeout_seconds(0.0, "t").is_err());
        assert!(ValidationUtils::validate_timeout_seconds(-1.0, "t").is_err());
        assert!(ValidationUtils::validate_timeout_seconds(f64::NAN, "t").is_err());
        assert!(ValidationUtils::validate_timeout_seconds(3600.5, "t").is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(ValidationUtils::validate_count(10, "test", 1024).is_ok());
        assert!(ValidationUtils::validate_count(1, "test", 1024).is_ok());
        assert!(ValidationUtils::validate_count(1024, "test", 1024).is_ok());
        assert!(ValidationUtils::validate_count(0, "test", 1024).is_err());
        assert!(ValidationUtils::validate_count(1025, "test", 1024).is_err());
    }

    #[test]
    fn test_validate_version() {
        assert!(ValidationUtils::validate_version("1.0.0", "version").is_ok());
        assert!(ValidationUtils::validate_version("12.3.45", "version").is_ok());
        assert!(ValidationUtils::validate_version("", "version").is_err());
        assert!(ValidationUtils::validate_version("1.0", "version").is_err());
        assert!(ValidationUtils::validate_version("1.x.0", "version").is_err());
        assert!(ValidationUtils::validate_version("1..0", "version").is_err());
    }
}
