use crate::utils::error::{FrontDeskError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{5,15}$").expect("phone pattern is valid"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FrontDeskError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Phone numbers double as the guest identity key, so they must form a
/// plain numeric string (5 to 15 digits, no separators).
pub fn validate_phone(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FrontDeskError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Phone number cannot be empty".to_string(),
        });
    }

    if !phone_pattern().is_match(value) {
        return Err(FrontDeskError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Phone number must be 5-15 digits with no separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FrontDeskError::InvalidInput {
        field: field_name.to_string(),
        value: String::new(),
        reason: "Required field is missing".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("phone", "5551234").is_ok());
        assert!(validate_phone("phone", "").is_err());
        assert!(validate_phone("phone", "555-1234").is_err());
        assert!(validate_phone("phone", "call me").is_err());
        assert!(validate_phone("phone", "1234").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("first_name", "Ann").is_ok());
        assert!(validate_non_empty_string("first_name", "").is_err());
        assert!(validate_non_empty_string("first_name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(
            validate_required_field("room", &Some(101)).unwrap(),
            &101
        );
        assert!(validate_required_field::<u32>("room", &None).is_err());
    }
}
