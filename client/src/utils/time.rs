use chrono::{DateTime, Utc};

use crate::api::LeaveType;

/// "10 Mar 2026 09:00 AM" — the duration format on the details screen.
pub fn format_display_datetime(value: DateTime<Utc>) -> String {
    value.format("%d %b %Y %I:%M %p").to_string()
}

/// "10 Mar 2026" — used for application and review dates.
pub fn format_display_date(value: DateTime<Utc>) -> String {
    value.format("%d %b %Y").to_string()
}

pub fn format_date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} - {}",
        format_display_datetime(start),
        format_display_datetime(end)
    )
}

/// "Annual Leave", "Sick Leave", ...
pub fn leave_type_display(leave_type: LeaveType) -> String {
    format!("{} Leave", leave_type.label())
}
