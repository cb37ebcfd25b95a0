use uuid::Uuid;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Reference fields hold another record's id. Only the syntax is checked;
/// nothing verifies the record exists.
pub fn object_ref(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("reference"))
    }
}

pub fn object_ref_list(values: &[String]) -> Result<(), ValidationError> {
    for value in values {
        if Uuid::parse_str(value).is_err() {
            return Err(ValidationError::new("reference"));
        }
    }

    Ok(())
}

/// Flattens `ValidationErrors` into the per-field message list the API
/// returns.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    walk(errors, &mut messages);
    messages
}

fn walk(errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(format!("{} is invalid", field)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => walk(inner, messages),
            ValidationErrorsKind::List(list) => {
                for inner in list.values() {
                    walk(inner, messages);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid_references() {
        assert!(object_ref("8b2d1c3e-8a4f-4a8e-9a2b-6f0e5d4c3b2a").is_ok());
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(object_ref("not-an-id").is_err());
        assert!(object_ref("").is_err());
    }

    #[test]
    fn rejects_lists_with_one_bad_reference() {
        let ids = vec![
            "8b2d1c3e-8a4f-4a8e-9a2b-6f0e5d4c3b2a".to_string(),
            "bogus".to_string(),
        ];
        assert!(object_ref_list(&ids).is_err());
    }
}
