// Subscribe request validation

use super::SubscribeRequest;
use crate::error::{AppError, Result};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Run the field rules declared on `SubscribeRequest`
pub fn validate_request(req: &SubscribeRequest) -> Result<()> {
    req.validate().map_err(to_app_error)
}

pub(super) fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("is required")));
    }
    Ok(())
}

pub(super) fn no_blank_entries(values: &[String]) -> std::result::Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry")
            .with_message(Cow::Borrowed("must not contain empty entries")));
    }
    Ok(())
}

// "country: requires at least one entry; email: is not a valid address"
fn to_app_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(&field);
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, reason)
            })
        })
        .collect();
    messages.sort();
    AppError::Validation(messages.join("; "))
}

fn wire_name(field: &str) -> String {
    match field {
        "preferred_countries" => "country".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SubscribeRequest {
        SubscribeRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            job_titles: vec!["Rust Dev".to_string()],
            preferred_countries: vec!["Spain".to_string()],
            salary_min: 0,
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_request(&valid()).is_ok());
    }

    #[test]
    fn test_validate_name_required() {
        let req = SubscribeRequest {
            name: "  ".to_string(),
            ..valid()
        };
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: name: is required");
    }

    #[test]
    fn test_validate_email_shapes() {
        for bad in ["", "ada", "@example.com", "ada@", "a b@example.com", "a@b@c.com"] {
            let req = SubscribeRequest {
                email: bad.to_string(),
                ..valid()
            };
            let err = validate_request(&req).unwrap_err();
            assert!(
                err.to_string().contains("email: is not a valid address"),
                "{:?} should be rejected, got {}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_validate_titles_required_and_non_blank() {
        let empty = SubscribeRequest {
            job_titles: vec![],
            ..valid()
        };
        assert!(validate_request(&empty)
            .unwrap_err()
            .to_string()
            .contains("job_titles: requires at least one entry"));

        let blank = SubscribeRequest {
            job_titles: vec!["Rust Dev".to_string(), "".to_string()],
            ..valid()
        };
        assert!(validate_request(&blank)
            .unwrap_err()
            .to_string()
            .contains("job_titles: must not contain empty entries"));
    }

    #[test]
    fn test_validate_country_reported_by_wire_name() {
        let req = SubscribeRequest {
            preferred_countries: vec![],
            ..valid()
        };
        assert!(validate_request(&req)
            .unwrap_err()
            .to_string()
            .contains("country: requires at least one entry"));
    }

    #[test]
    fn test_validate_negative_salary() {
        let req = SubscribeRequest {
            salary_min: -1,
            ..valid()
        };
        assert!(validate_request(&req)
            .unwrap_err()
            .to_string()
            .contains("salary_min: must be >= 0"));
    }

    #[test]
    fn test_validate_reports_every_failing_field() {
        let req = SubscribeRequest {
            email: "nope".to_string(),
            preferred_countries: vec![" ".to_string()],
            ..valid()
        };
        assert_eq!(
            validate_request(&req).unwrap_err().to_string(),
            "Validation error: country: must not contain empty entries; email: is not a valid address"
        );
    }
}
