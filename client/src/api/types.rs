use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Annual,
    Childcare,
    Compassionate,
    Parental,
    Sick,
    Unpaid,
}

impl LeaveType {
    /// Display label, e.g. "Annual" for the wire value "ANNUAL".
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Childcare => "Childcare",
            LeaveType::Compassionate => "Compassionate",
            LeaveType::Parental => "Parental",
            LeaveType::Sick => "Sick",
            LeaveType::Unpaid => "Unpaid",
        }
    }
}

/// Review state of a leave application. Applications are created Pending;
/// Approved and Rejected are reviewer transitions, Cancelled is the
/// applicant's own withdrawal and only reachable from Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }
}

/// The reviewer shown alongside an approved or rejected application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: String,
    pub application_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub description: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub vetted_by: Option<EmployeeSummary>,
    #[serde(default)]
    pub comments_by_vetter: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub employee_id: String,
}

/// Body of the update call. Dates come from the edit session's selected
/// range, not from the working copy, and employee_id is passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveApplicationRequest {
    pub id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub description: Option<String>,
    pub employee_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserialize_leave_application_camel_case_fields() {
        let raw = r#"{
            "id": "42",
            "applicationDate": "2026-01-02T08:00:00Z",
            "startDate": "2026-01-10T09:00:00Z",
            "endDate": "2026-01-12T18:00:00Z",
            "leaveType": "SICK",
            "description": "flu",
            "status": "PENDING",
            "vettedBy": null,
            "commentsByVetter": null,
            "lastUpdated": "2026-01-02T08:00:00Z",
            "employeeId": "e-7"
        }"#;
        let application: LeaveApplication = serde_json::from_str(raw).unwrap();
        assert_eq!(application.id, "42");
        assert_eq!(application.leave_type, LeaveType::Sick);
        assert_eq!(application.status, LeaveStatus::Pending);
        assert_eq!(application.description.as_deref(), Some("flu"));
        assert!(application.vetted_by.is_none());
        assert_eq!(
            application.start_date,
            Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn deserialize_reviewed_application_includes_vetter() {
        let raw = r#"{
            "id": "43",
            "applicationDate": "2026-01-02T08:00:00Z",
            "startDate": "2026-01-10T09:00:00Z",
            "endDate": "2026-01-12T18:00:00Z",
            "leaveType": "ANNUAL",
            "status": "APPROVED",
            "vettedBy": { "id": "m-1", "firstName": "Dana", "lastName": "Ng" },
            "commentsByVetter": "enjoy",
            "lastUpdated": "2026-01-05T08:00:00Z",
            "employeeId": "e-7"
        }"#;
        let application: LeaveApplication = serde_json::from_str(raw).unwrap();
        assert_eq!(application.status, LeaveStatus::Approved);
        let vetter = application.vetted_by.expect("vetter present");
        assert_eq!(vetter.first_name, "Dana");
        assert_eq!(application.comments_by_vetter.as_deref(), Some("enjoy"));
    }

    #[test]
    fn serialize_update_request_uses_camel_case_and_iso_dates() {
        let request = UpdateLeaveApplicationRequest {
            id: "42".into(),
            start_date: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 1, 12, 18, 0, 0).unwrap(),
            leave_type: LeaveType::Annual,
            description: None,
            employee_id: "e-7".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["id"], serde_json::json!("42"));
        assert_eq!(value["leaveType"], serde_json::json!("ANNUAL"));
        assert_eq!(value["employeeId"], serde_json::json!("e-7"));
        assert_eq!(
            value["startDate"],
            serde_json::json!("2026-01-10T09:00:00Z")
        );
        assert!(value["description"].is_null());
    }

    #[test]
    fn leave_type_labels_match_display_casing() {
        assert_eq!(LeaveType::Annual.label(), "Annual");
        assert_eq!(LeaveType::Compassionate.label(), "Compassionate");
        assert_eq!(LeaveStatus::Cancelled.label(), "Cancelled");
    }
}
