use crate::core::error::{AddUserError, FieldError, FieldErrors};
use crate::models::user::NewUser;
use validator::{Validate, ValidationErrors};

/// Form fields in the order errors are reported
const FIELD_ORDER: [&str; 3] = ["name", "username", "email"];

/// Validate a candidate record submitted through the add-user form.
///
/// Surrounding whitespace is trimmed from every field first, so a field
/// holding only spaces counts as missing. Returns the trimmed candidate
/// on success, or one error per offending field.
pub fn validate_new_user(candidate: NewUser) -> Result<NewUser, AddUserError> {
    let candidate = NewUser {
        name: candidate.name.trim().to_string(),
        username: candidate.username.trim().to_string(),
        email: candidate.email.trim().to_string(),
    };

    match candidate.validate() {
        Ok(()) => Ok(candidate),
        Err(errors) => Err(AddUserError::Validation(collect_field_errors(&errors))),
    }
}

/// Flatten validator output into one error per field.
///
/// A missing value is reported as `required` even when other rules on the
/// same field also failed.
fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut collected = Vec::new();

    for field in FIELD_ORDER {
        let Some(field_errors) = by_field.get(field) else {
            continue;
        };

        let chosen = field_errors
            .iter()
            .find(|e| e.code == "required")
            .or_else(|| field_errors.first());

        if let Some(error) = chosen {
            collected.push(FieldError {
                field: field.to_string(),
                rule: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}")),
            });
        }
    }

    FieldErrors(collected)
}
