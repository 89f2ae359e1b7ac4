use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::employee::EmployeeForm;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Age in whole years by calendar-year subtraction only. Someone whose
/// birthday is still ahead this year counts one year older.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - date_of_birth.year()
}

fn date_of_birth_missing() -> ValidationError {
    field_error("required", "Date of birth is required")
}

pub(crate) fn date_of_birth_required() -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("dateOfBirth", date_of_birth_missing());
    errors
}

/// Checks every rule against `today` and collects all failures.
pub fn validate_on(form: &EmployeeForm, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = form.full_name.trim();
    if name.is_empty() {
        errors.add("fullName", field_error("required", "Full name is required"));
    } else if name.chars().count() < MIN_NAME_LENGTH {
        errors.add(
            "fullName",
            field_error("too_short", "Name must be at least 2 characters"),
        );
    }

    match form.date_of_birth {
        None => errors.add("dateOfBirth", date_of_birth_missing()),
        Some(date_of_birth) => {
            let age = age_on(date_of_birth, today);
            if age < MIN_AGE {
                errors.add(
                    "dateOfBirth",
                    field_error("too_young", "Employee must be at least 18 years old"),
                );
            } else if age > MAX_AGE {
                errors.add(
                    "dateOfBirth",
                    field_error("invalid_date", "Please enter a valid date of birth"),
                );
            }
        }
    }

    if form.state.is_empty() {
        errors.add("state", field_error("required", "Please select a state"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Flattens validation errors into the field -> message map shown inline
/// next to each form input.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            field_errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ValidationErrors> {
    payload.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn form(full_name: &str, date_of_birth: Option<NaiveDate>, state: &str) -> EmployeeForm {
        EmployeeForm {
            full_name: full_name.to_string(),
            gender: Gender::Female,
            date_of_birth,
            profile_image: String::new(),
            state: state.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate_on(&form("", None, ""), today()).unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages["fullName"], "Full name is required");
        assert_eq!(messages["dateOfBirth"], "Date of birth is required");
        assert_eq!(messages["state"], "Please select a state");
    }

    #[test]
    fn underage_is_the_only_error() {
        let dob = NaiveDate::from_ymd_opt(2009, 1, 1);
        let errors = validate_on(&form("Jo", dob, "Texas"), today()).unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages["dateOfBirth"],
            "Employee must be at least 18 years old"
        );
    }

    #[test]
    fn whitespace_name_is_required_not_short() {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1);
        let errors = validate_on(&form("   ", dob, "Ohio"), today()).unwrap_err();
        let codes = errors.field_errors();
        assert_eq!(codes["fullName"][0].code, "required");
    }

    #[test]
    fn short_name_counts_trimmed_length() {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1);
        let errors = validate_on(&form(" J ", dob, "Ohio"), today()).unwrap_err();
        assert_eq!(
            field_messages(&errors)["fullName"],
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn age_ignores_month_and_day() {
        // Turns 18 in December 2026 but already counts as 18 in October.
        let dob = NaiveDate::from_ymd_opt(2008, 12, 31).unwrap();
        assert_eq!(age_on(dob, today()), 18);
        assert!(validate_on(&form("Ann Lee", Some(dob), "Utah"), today()).is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let hundred = NaiveDate::from_ymd_opt(1926, 6, 1);
        assert!(validate_on(&form("Old Timer", hundred, "Maine"), today()).is_ok());

        let too_old = NaiveDate::from_ymd_opt(1925, 6, 1);
        let errors = validate_on(&form("Old Timer", too_old, "Maine"), today()).unwrap_err();
        assert_eq!(
            field_messages(&errors)["dateOfBirth"],
            "Please enter a valid date of birth"
        );
    }

    #[test]
    fn only_an_empty_state_is_missing() {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1);
        assert!(validate_on(&form("Kai Moana", dob, " "), today()).is_ok());

        let errors = validate_on(&form("Kai Moana", dob, ""), today()).unwrap_err();
        assert_eq!(field_messages(&errors).len(), 1);
    }

    #[test]
    fn required_date_error_matches_validator() {
        let errors = date_of_birth_required();
        assert_eq!(
            field_messages(&errors)["dateOfBirth"],
            "Date of birth is required"
        );
    }

    #[test]
    fn gender_image_and_status_are_unconstrained() {
        let mut candidate = form("Sam Park", NaiveDate::from_ymd_opt(1990, 3, 3), "Iowa");
        candidate.gender = Gender::Other;
        candidate.profile_image = "not a url".to_string();
        candidate.is_active = false;
        assert!(validate_on(&candidate, today()).is_ok());
    }
}
