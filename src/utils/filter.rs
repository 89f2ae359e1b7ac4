use std::fmt;
use std::str::FromStr;

use crate::models::employee::{Employee, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

impl GenderFilter {
    fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Only(wanted) => *wanted == gender,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(GenderFilter::All),
            other => other.parse().map(GenderFilter::Only),
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderFilter::All => f.write_str("all"),
            GenderFilter::Only(gender) => fmt::Display::fmt(gender, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// The three filter inputs, combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub search: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
}

impl Criteria {
    pub fn matches(&self, employee: &Employee) -> bool {
        employee
            .full_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.gender.matches(employee.gender)
            && self.status.matches(employee.is_active)
    }
}

/// Returns the records matching `criteria`, in collection order.
pub fn filter<'a>(employees: &'a [Employee], criteria: &Criteria) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| criteria.matches(employee))
        .collect()
}
