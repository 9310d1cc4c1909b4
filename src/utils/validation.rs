use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_all_non_empty(field_name: &str, values: &[String]) -> Result<()> {
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("manager", "Jordan").is_ok());
        assert!(validate_non_empty_string("manager", "").is_err());
        assert!(validate_non_empty_string("manager", "   ").is_err());
    }

    #[test]
    fn test_validate_all_non_empty() {
        let names = vec!["Beak".to_string(), "Don".to_string()];
        assert!(validate_all_non_empty("people", &names).is_ok());

        let with_blank = vec!["Beak".to_string(), " ".to_string()];
        assert!(validate_all_non_empty("people", &with_blank).is_err());
    }
}
