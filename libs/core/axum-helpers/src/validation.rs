//! Validation of resolver arguments with the `validator` crate.

use validator::Validate;

use crate::errors::AppError;

/// Returns `input` unchanged when it passes its `#[validate(..)]` rules.
///
/// Resolvers call this before touching a service so invalid input never reaches
/// persistence.
///
/// ```ignore
/// let input = validated(input).map_err(|e| e.extend())?;
/// ```
pub fn validated<T: Validate>(input: T) -> Result<T, AppError> {
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Comment {
        #[validate(length(min = 1, max = 10))]
        body: String,
    }

    #[test]
    fn test_validated_passes_valid_input_through() {
        let input = validated(Comment {
            body: "fine".to_string(),
        })
        .unwrap();
        assert_eq!(input.body, "fine");
    }

    #[test]
    fn test_validated_rejects_invalid_input() {
        let err = validated(Comment {
            body: String::new(),
        })
        .unwrap_err();
        match err {
            AppError::ValidationError(errors) => {
                assert!(errors.field_errors().contains_key("body"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
