//! Field rules for wallet requests.
//!
//! Every check runs before the repository is touched.
use api_types::wallet::{CreateWalletDto, UpdateWalletDto};

use crate::{FieldError, ResultEngine, ValidationErrors};

pub const NAME_MAX_CHARS: usize = 20;

/// Validate a wallet name and return it trimmed.
///
/// A name is 1 to [`NAME_MAX_CHARS`] characters made only of letters,
/// digits and spaces.
pub fn validate_name(name: Option<&str>) -> Result<String, FieldError> {
    let Some(name) = name else {
        return Err(FieldError::new("name", "must not be null"));
    };
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("name", "must not be empty"));
    }
    if trimmed.chars().count() > NAME_MAX_CHARS {
        return Err(FieldError::new(
            "name",
            format!("must be at most {NAME_MAX_CHARS} characters long"),
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(FieldError::new(
            "name",
            "may contain only letters, digits and spaces",
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_id(id: Option<i64>) -> Result<i64, FieldError> {
    match id {
        None => Err(FieldError::new("id", "must not be null")),
        Some(id) if id <= 0 => Err(FieldError::new("id", "must be positive")),
        Some(id) => Ok(id),
    }
}

/// Returns the validated name.
pub fn validate_create(dto: &CreateWalletDto) -> ResultEngine<String> {
    Ok(validate_name(dto.name.as_deref())?)
}

/// Returns the validated id and name, reporting every failing field.
pub fn validate_update(dto: &UpdateWalletDto) -> ResultEngine<(i64, String)> {
    let mut errors = ValidationErrors::default();
    let id = validate_id(dto.id).map_err(|e| errors.push(e)).ok();
    let name = validate_name(dto.name.as_deref())
        .map_err(|e| errors.push(e))
        .ok();

    match (id, name) {
        (Some(id), Some(name)) => Ok((id, name)),
        _ => Err(crate::EngineError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_spaces() {
        assert_eq!(validate_name(Some("Wallet name")), Ok("Wallet name".to_string()));
        assert_eq!(validate_name(Some("nameOfWallet1")), Ok("nameOfWallet1".to_string()));
        assert_eq!(validate_name(Some("Portfel Żółty")), Ok("Portfel Żółty".to_string()));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_name(Some("  Cash ")), Ok("Cash".to_string()));
    }

    #[test]
    fn rejects_null_and_empty() {
        assert!(validate_name(None).is_err());
        assert!(validate_name(Some("")).is_err());
        assert!(validate_name(Some("   ")).is_err());
    }

    #[test]
    fn rejects_illegal_letters() {
        for name in ["@#$", "#$@", "@#$%^&", "cash-box", "tab\there"] {
            let err = validate_name(Some(name)).unwrap_err();
            assert_eq!(err.field, "name", "{name}");
        }
    }

    #[test]
    fn length_limit_is_twenty_chars() {
        assert!(validate_name(Some(&"a".repeat(20))).is_ok());
        assert!(validate_name(Some(&"a".repeat(21))).is_err());
        assert!(validate_name(Some("Too long name - more than 20 letters.")).is_err());
        // counted in characters, not bytes
        assert!(validate_name(Some(&"ż".repeat(20))).is_ok());
    }

    #[test]
    fn ids_must_be_present_and_positive() {
        assert_eq!(validate_id(Some(1)), Ok(1));
        assert!(validate_id(None).is_err());
        assert!(validate_id(Some(0)).is_err());
        assert!(validate_id(Some(-5)).is_err());
    }

    #[test]
    fn update_reports_both_fields() {
        let dto = UpdateWalletDto {
            id: Some(0),
            name: Some("@#$".to_string()),
        };

        let Err(crate::EngineError::Validation(errors)) = validate_update(&dto) else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["id", "name"]);
    }

    #[test]
    fn update_reports_the_single_failing_field() {
        let dto = UpdateWalletDto {
            id: None,
            name: Some("Cash".to_string()),
        };

        let Err(crate::EngineError::Validation(errors)) = validate_update(&dto) else {
            panic!("expected validation error");
        };
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "id");

        let dto = UpdateWalletDto {
            id: Some(4),
            name: Some("  Cash ".to_string()),
        };
        assert_eq!(validate_update(&dto).unwrap(), (4, "Cash".to_string()));
    }
}
