//! Field validation for doctor drafts.
//!
//! [`validate_doctor`] checks every constraint and reports all violations at
//! once, so a client can fix a payload in a single round trip.
//!
//! | Field | Rule |
//! |-------|------|
//! | `firstName` | non-blank, 1 to 50 characters |
//! | `lastName` | non-blank, 1 to 50 characters |
//! | `address` | non-blank, at most 255 characters |
//! | `city` | non-blank, at most 100 characters |
//! | `pincode` | non-blank, 5 or 6 ASCII digits |
//!
//! # Example
//!
//! ```
//! use doctr_persistence::types::DoctorDraft;
//! use doctr_persistence::validation::validate_doctor;
//!
//! let draft = DoctorDraft::new("John", "Doe", "1 Main St", "Springfield", "12A45");
//! let err = validate_doctor(&draft).unwrap_err();
//! assert_eq!(err.details()[0].field, "pincode");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationDetail, ValidationError};
use crate::types::DoctorDraft;

/// Maximum length of first and last names.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of the address.
pub const MAX_ADDRESS_LEN: usize = 255;

/// Maximum length of the city.
pub const MAX_CITY_LEN: usize = 100;

// `\d` would also accept non-ASCII digits.
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").expect("valid pincode regex"));

/// Validates a draft against every field constraint.
///
/// Returns `ValidationError::InvalidDoctor` listing each violation in field
/// order. A blank field reports only that it is required.
pub fn validate_doctor(draft: &DoctorDraft) -> Result<(), ValidationError> {
    let mut details = Vec::new();

    check_length(
        &mut details,
        "firstName",
        "First name",
        &draft.first_name,
        LengthRule::Between(1, MAX_NAME_LEN),
    );
    check_length(
        &mut details,
        "lastName",
        "Last name",
        &draft.last_name,
        LengthRule::Between(1, MAX_NAME_LEN),
    );
    check_length(
        &mut details,
        "address",
        "Address",
        &draft.address,
        LengthRule::AtMost(MAX_ADDRESS_LEN),
    );
    check_length(
        &mut details,
        "city",
        "City",
        &draft.city,
        LengthRule::AtMost(MAX_CITY_LEN),
    );

    if is_blank(&draft.pincode) {
        details.push(ValidationDetail::new("pincode", "Pincode is required"));
    } else if !is_valid_pincode(&draft.pincode) {
        details.push(ValidationDetail::new(
            "pincode",
            "Pincode must be 5 or 6 digits",
        ));
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidDoctor { details })
    }
}

/// Returns true if the value is 5 or 6 ASCII digits.
pub fn is_valid_pincode(value: &str) -> bool {
    PINCODE_RE.is_match(value)
}

enum LengthRule {
    Between(usize, usize),
    AtMost(usize),
}

fn check_length(
    details: &mut Vec<ValidationDetail>,
    field: &str,
    label: &str,
    value: &str,
    rule: LengthRule,
) {
    if is_blank(value) {
        details.push(ValidationDetail::new(field, format!("{} is required", label)));
        return;
    }

    let len = value.chars().count();
    match rule {
        LengthRule::Between(min, max) if len < min || len > max => {
            details.push(ValidationDetail::new(
                field,
                format!("{} must be between {} and {} characters", label, min, max),
            ));
        }
        LengthRule::AtMost(max) if len > max => {
            details.push(ValidationDetail::new(
                field,
                format!("{} must not exceed {} characters", label, max),
            ));
        }
        _ => {}
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DoctorDraft {
        DoctorDraft::new(
            "Srikanth",
            "Kakumanu",
            "Lakshmi Prasad Arcade",
            "Tenali",
            "522201",
        )
    }

    fn fields(err: &ValidationError) -> Vec<&str> {
        err.details().iter().map(|d| d.field.as_str()).collect()
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_doctor(&valid()).is_ok());
    }

    #[test]
    fn test_single_character_names_pass() {
        let draft = DoctorDraft {
            first_name: "J".to_string(),
            last_name: "D".to_string(),
            ..valid()
        };
        assert!(validate_doctor(&draft).is_ok());
    }

    #[test]
    fn test_five_digit_pincode_passes() {
        let draft = DoctorDraft {
            pincode: "12345".to_string(),
            ..valid()
        };
        assert!(validate_doctor(&draft).is_ok());
    }

    #[test]
    fn test_pincode_rejections() {
        for pincode in ["12A45", "123", "1234567", "12 345", " 12345", "١٢٣٤٥"] {
            let draft = DoctorDraft {
                pincode: pincode.to_string(),
                ..valid()
            };
            let err = validate_doctor(&draft).unwrap_err();
            assert_eq!(fields(&err), vec!["pincode"], "pincode {:?}", pincode);
            assert_eq!(err.details()[0].message, "Pincode must be 5 or 6 digits");
        }
    }

    #[test]
    fn test_blank_fields_report_required_only() {
        let draft = DoctorDraft {
            first_name: "   ".to_string(),
            ..valid()
        };
        let err = validate_doctor(&draft).unwrap_err();
        assert_eq!(err.details().len(), 1);
        assert_eq!(err.details()[0].message, "First name is required");
    }

    #[test]
    fn test_all_violations_reported() {
        let err = validate_doctor(&DoctorDraft::default()).unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["firstName", "lastName", "address", "city", "pincode"]
        );
    }

    #[test]
    fn test_name_too_long() {
        let draft = DoctorDraft {
            last_name: "x".repeat(51),
            ..valid()
        };
        let err = validate_doctor(&draft).unwrap_err();
        assert_eq!(
            err.details()[0].message,
            "Last name must be between 1 and 50 characters"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let draft = DoctorDraft {
            first_name: "é".repeat(50),
            ..valid()
        };
        assert!(validate_doctor(&draft).is_ok());
    }

    #[test]
    fn test_address_and_city_limits() {
        let draft = DoctorDraft {
            address: "a".repeat(256),
            city: "c".repeat(101),
            ..valid()
        };
        let err = validate_doctor(&draft).unwrap_err();
        assert_eq!(fields(&err), vec!["address", "city"]);
        assert_eq!(
            err.details()[0].message,
            "Address must not exceed 255 characters"
        );
        assert_eq!(
            err.details()[1].message,
            "City must not exceed 100 characters"
        );

        let at_limit = DoctorDraft {
            address: "a".repeat(255),
            city: "c".repeat(100),
            ..valid()
        };
        assert!(validate_doctor(&at_limit).is_ok());
    }
}
