use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Time-ordered id for a freshly created record.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

/// A persisted roster record. Field names match the stored snapshot layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub profile_image: String,
    pub state: String,
    pub is_active: bool,
    pub created_at: NaiveDate,
}

impl Employee {
    /// Overwrites every editable field, leaving `id` and `created_at` alone.
    ///
    /// Callers validate the form first; a form without a date of birth keeps
    /// the current one.
    pub fn apply(&mut self, form: &EmployeeForm) {
        self.full_name = form.full_name.clone();
        self.gender = form.gender;
        if let Some(date_of_birth) = form.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        self.profile_image = form.profile_image.clone();
        self.state = form.state.clone();
        self.is_active = form.is_active;
    }

    pub fn to_form(&self) -> EmployeeForm {
        EmployeeForm {
            full_name: self.full_name.clone(),
            gender: self.gender,
            date_of_birth: Some(self.date_of_birth),
            profile_image: self.profile_image.clone(),
            state: self.state.clone(),
            is_active: self.is_active,
        }
    }
}

/// The editable subset of an [`Employee`], as submitted by the edit form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub full_name: String,
    pub gender: Gender,
    #[serde(deserialize_with = "empty_date_as_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image: String,
    pub state: String,
    pub is_active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            gender: Gender::Male,
            date_of_birth: None,
            profile_image: String::new(),
            state: String::new(),
            is_active: true,
        }
    }
}

/// A partial edit. Omitted fields keep their stored values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    /// `Some(None)` clears the date, which the validator then rejects.
    #[serde(deserialize_with = "present_date")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub profile_image: Option<String>,
    pub state: Option<String>,
    pub is_active: Option<bool>,
}

impl EmployeePatch {
    /// Overlays the fields present in the patch onto `form`.
    pub fn merge_into(self, mut form: EmployeeForm) -> EmployeeForm {
        if let Some(full_name) = self.full_name {
            form.full_name = full_name;
        }
        if let Some(gender) = self.gender {
            form.gender = gender;
        }
        if let Some(date_of_birth) = self.date_of_birth {
            form.date_of_birth = date_of_birth;
        }
        if let Some(profile_image) = self.profile_image {
            form.profile_image = profile_image;
        }
        if let Some(state) = self.state {
            form.state = state;
        }
        if let Some(is_active) = self.is_active {
            form.is_active = is_active;
        }
        form
    }
}

fn present_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    empty_date_as_none(deserializer).map(Some)
}

// The form posts "" for an untouched date input.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_uses_snapshot_field_names() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "1",
            "fullName": "John Anderson",
            "gender": "Male",
            "dateOfBirth": "1990-05-15",
            "profileImage": "",
            "state": "California",
            "isActive": true,
            "createdAt": "2024-01-15"
        }))
        .unwrap();

        assert_eq!(employee.id.as_str(), "1");
        assert_eq!(
            employee.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["fullName"], "John Anderson");
        assert_eq!(value["createdAt"], "2024-01-15");
    }

    #[test]
    fn form_treats_empty_date_as_absent() {
        let form: EmployeeForm =
            serde_json::from_value(json!({ "fullName": "", "dateOfBirth": "", "state": "" }))
                .unwrap();
        assert_eq!(form.date_of_birth, None);
        assert!(form.is_active);
        assert_eq!(form.gender, Gender::Male);
    }

    #[test]
    fn form_rejects_malformed_date() {
        let result: Result<EmployeeForm, _> =
            serde_json::from_value(json!({ "dateOfBirth": "15/05/1990" }));
        assert!(result.is_err());
    }

    #[test]
    fn apply_keeps_identity_fields() {
        let mut employee = Employee {
            id: EmployeeId::from("7"),
            full_name: "Old Name".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            profile_image: String::new(),
            state: "Ohio".to_string(),
            is_active: true,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let form = EmployeeForm {
            full_name: "New Name".to_string(),
            gender: Gender::Other,
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 1),
            profile_image: "https://example.com/a.png".to_string(),
            state: "Texas".to_string(),
            is_active: false,
        };

        employee.apply(&form);

        assert_eq!(employee.id.as_str(), "7");
        assert_eq!(employee.created_at, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(employee.to_form(), form);
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let stored = EmployeeForm {
            full_name: "Michael Chen".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 8),
            profile_image: "https://example.com/mc.png".to_string(),
            state: "Texas".to_string(),
            is_active: false,
        };
        let patch: EmployeePatch =
            serde_json::from_value(json!({ "fullName": "Michael Chen Jr", "state": "Nevada" }))
                .unwrap();

        let merged = patch.merge_into(stored.clone());

        assert_eq!(merged.full_name, "Michael Chen Jr");
        assert_eq!(merged.state, "Nevada");
        assert_eq!(merged.gender, stored.gender);
        assert_eq!(merged.date_of_birth, stored.date_of_birth);
        assert_eq!(merged.profile_image, stored.profile_image);
        assert!(!merged.is_active);
    }

    #[test]
    fn patch_distinguishes_cleared_date_from_omitted() {
        let omitted: EmployeePatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(omitted.date_of_birth, None);

        let cleared: EmployeePatch =
            serde_json::from_value(json!({ "dateOfBirth": "" })).unwrap();
        assert_eq!(cleared.date_of_birth, Some(None));
    }

    #[test]
    fn gender_parses_exact_names() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert!("female".parse::<Gender>().is_err());
    }
}
