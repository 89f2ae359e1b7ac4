use chrono::NaiveDate;

use crate::models::employee::{Employee, EmployeeId, Gender};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    full_name: &str,
    gender: Gender,
    date_of_birth: &str,
    profile_image: &str,
    state: &str,
    is_active: bool,
    created_at: &str,
) -> Employee {
    Employee {
        id: EmployeeId::from(id),
        full_name: full_name.to_string(),
        gender,
        date_of_birth: date(date_of_birth),
        profile_image: profile_image.to_string(),
        state: state.to_string(),
        is_active,
        created_at: date(created_at),
    }
}

/// Sample roster written to an empty (or unreadable) slot.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "John Anderson",
            Gender::Male,
            "1990-05-15",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
            "California",
            true,
            "2024-01-15",
        ),
        employee(
            "2",
            "Sarah Mitchell",
            Gender::Female,
            "1988-11-22",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop&crop=face",
            "New York",
            true,
            "2024-02-10",
        ),
        employee(
            "3",
            "Michael Chen",
            Gender::Male,
            "1995-03-08",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
            "Texas",
            false,
            "2024-01-20",
        ),
        employee(
            "4",
            "Emily Rodriguez",
            Gender::Female,
            "1992-07-30",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
            "Florida",
            true,
            "2024-03-05",
        ),
        employee(
            "5",
            "David Kim",
            Gender::Male,
            "1987-12-18",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
            "Washington",
            true,
            "2024-02-28",
        ),
    ]
}
