/// Request validation and field error mapping
///
/// Request DTOs derive `validator::Validate`; required fields are modeled as
/// `Option<String>` with `#[validate(required)]` so that an absent field
/// produces a field-level error naming that field rather than a
/// deserialization failure. `check` runs the validation and returns either
/// `Ok(())` or the structured field error collection, letting handlers
/// branch explicitly on validity.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use taskboard_api::validation::check;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateThing {
///     #[validate(required(message = "name is required"))]
///     name: Option<String>,
/// }
///
/// let input = CreateThing { name: None };
/// let errors = check(&input).unwrap_err();
/// assert_eq!(errors[0].field, "name");
/// ```

use crate::error::FieldError;
use validator::Validate;

/// Validates a request DTO, producing a field error map on failure
pub fn check<T: Validate>(input: &T) -> Result<(), Vec<FieldError>> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(e) => Err(field_errors(e)),
    }
}

/// Flattens `validator::ValidationErrors` into per-field messages
fn field_errors(errors: validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(
            required(message = "username is required"),
            length(min = 1, message = "username must not be empty")
        )]
        username: Option<String>,

        #[validate(required(message = "password is required"))]
        password: Option<String>,
    }

    #[test]
    fn test_valid_request_passes() {
        let req = TestRequest {
            username: Some("alice".to_string()),
            password: Some("pw1".to_string()),
        };

        assert!(check(&req).is_ok());
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let req = TestRequest {
            username: Some("alice".to_string()),
            password: None,
        };

        let errors = check(&req).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "password is required");
    }

    #[test]
    fn test_multiple_missing_fields() {
        let req = TestRequest {
            username: None,
            password: None,
        };

        let errors = check(&req).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn test_empty_string_fails_length_check() {
        let req = TestRequest {
            username: Some(String::new()),
            password: Some("pw1".to_string()),
        };

        let errors = check(&req).unwrap_err();
        assert_eq!(errors[0].field, "username");
    }
}
