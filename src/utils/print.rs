//! Standalone printable HTML documents for one employee or a roster table.

use chrono::NaiveDate;

use crate::models::employee::Employee;

const DETAIL_STYLE: &str = "\
body { font-family: system-ui, sans-serif; padding: 40px; color: #1a1a2e; }
.header { display: flex; align-items: center; gap: 20px; margin-bottom: 30px; }
.avatar { width: 100px; height: 100px; border-radius: 50%; object-fit: cover; border: 3px solid #e5e7eb; }
.avatar-placeholder { width: 100px; height: 100px; border-radius: 50%; background: #f3f4f6; display: flex; align-items: center; justify-content: center; font-size: 32px; font-weight: bold; color: #6b7280; }
h1 { margin: 0; font-size: 24px; }
.status { display: inline-block; padding: 4px 12px; border-radius: 20px; font-size: 12px; font-weight: 500; }
.active { background: #dcfce7; color: #166534; }
.inactive { background: #f3f4f6; color: #6b7280; }
.details { margin-top: 20px; }
.detail-row { display: flex; padding: 12px 0; border-bottom: 1px solid #e5e7eb; }
.label { width: 150px; color: #6b7280; font-weight: 500; }
.value { color: #1a1a2e; }";

const TABLE_STYLE: &str = "\
body { font-family: system-ui, sans-serif; padding: 40px; color: #1a1a2e; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #e5e7eb; }
th { color: #6b7280; font-weight: 500; }
.footer { margin-top: 16px; color: #6b7280; font-size: 12px; }";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Up to two uppercase initials, `EE` for a blank name.
pub fn initials(full_name: &str) -> String {
    let initials: String = full_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if initials.is_empty() {
        "EE".to_string()
    } else {
        initials
    }
}

/// `#` followed by the last four characters of the id, zero padded.
pub fn display_id(employee: &Employee) -> String {
    let chars: Vec<char> = employee.id.as_str().chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("#{:0>4}", tail)
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn status_label(is_active: bool) -> (&'static str, &'static str) {
    if is_active {
        ("active", "Active")
    } else {
        ("inactive", "Inactive")
    }
}

pub fn render_employee(employee: &Employee) -> String {
    let name = escape_html(&employee.full_name);
    let avatar = if employee.profile_image.is_empty() {
        format!(
            "<div class=\"avatar-placeholder\">{}</div>",
            escape_html(&initials(&employee.full_name))
        )
    } else {
        format!(
            "<img src=\"{}\" class=\"avatar\" alt=\"{}\" />",
            escape_html(&employee.profile_image),
            name
        )
    };
    let (status_class, status_text) = status_label(employee.is_active);

    let rows = [
        ("Employee ID", display_id(employee)),
        ("Gender", employee.gender.to_string()),
        ("Date of Birth", long_date(employee.date_of_birth)),
        ("State", employee.state.clone()),
        ("Joined", long_date(employee.created_at)),
    ];
    let mut details = String::new();
    for (label, value) in rows {
        details.push_str(&format!(
            "<div class=\"detail-row\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>",
            label,
            escape_html(&value)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>Employee Details - {name}</title>\n<style>\n{DETAIL_STYLE}\n</style>\n</head>\n<body>\n<div class=\"header\">{avatar}<div><h1>{name}</h1><span class=\"status {status_class}\">{status_text}</span></div></div>\n<div class=\"details\">{details}</div>\n</body>\n</html>\n"
    )
}

pub fn render_table<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> String {
    let mut rows = String::new();
    let mut count = 0usize;
    for employee in employees {
        count += 1;
        let (status_class, status_text) = status_label(employee.is_active);
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
            escape_html(&display_id(employee)),
            escape_html(&employee.full_name),
            employee.gender,
            short_date(employee.date_of_birth),
            escape_html(&employee.state),
            status_class,
            status_text
        ));
    }
    let noun = if count == 1 { "employee" } else { "employees" };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>Employee List</title>\n<style>\n{TABLE_STYLE}\n</style>\n</head>\n<body>\n<h1>Employee List</h1>\n<table>\n<thead><tr><th>ID</th><th>Name</th><th>Gender</th><th>Date of Birth</th><th>State</th><th>Status</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n<p class=\"footer\">{count} {noun}</p>\n</body>\n</html>\n"
    )
}
