use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::api::{LeaveApi, LeaveApplication, LeaveStatus, LeaveType, UpdateLeaveApplicationRequest};
use crate::details::repository::DetailsRepository;

const MISSING_DATE_RANGE: &str = "Please input a start and end date!";
const UPDATE_SUCCESS: &str = "Leave Application updated successfully.";
const UPDATE_FAILURE: &str = "Leave Application was not updated successfully.";
const CANCEL_SUCCESS: &str = "Leave Application cancelled successfully.";
const CANCEL_FAILURE: &str =
    "Leave Application was not cancelled successfully, please try again later.";

/// Controller for one leave application's detail screen.
///
/// Holds two independent copies of the application: `original` mirrors the
/// last state confirmed by the server, `updated` absorbs in-progress edits.
/// They are equal whenever no edit session is open. The date range is kept
/// as a separate transient selection and only folded into the record on a
/// successful save, matching how the range picker feeds the form.
///
/// All operations run on one logical task; `loading` doubles as the guard
/// against overlapping mutating calls, which are dropped with a debug log
/// rather than queued.
pub struct DetailsViewModel {
    repository: DetailsRepository,
    original: Option<LeaveApplication>,
    updated: Option<LeaveApplication>,
    selected_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    editing: bool,
    loading: bool,
    alert: Option<Alert>,
}

impl DetailsViewModel {
    pub fn new(api: Arc<dyn LeaveApi>) -> Self {
        Self {
            repository: DetailsRepository::new(api),
            original: None,
            updated: None,
            selected_range: None,
            editing: false,
            loading: false,
            alert: None,
        }
    }

    /// Fetch the application and seed both copies from it. Fetch failures
    /// surface only in the log; the screen renders empty.
    pub async fn load(&mut self, id: &str) {
        if self.loading {
            log::debug!("load ignored while a request is in flight");
            return;
        }
        self.loading = true;
        match self.repository.fetch(id).await {
            Ok(application) => {
                self.selected_range = Some((application.start_date, application.end_date));
                self.updated = Some(application.clone());
                self.original = Some(application);
            }
            Err(err) => {
                log::warn!("failed to load leave application {}: {}", id, err);
            }
        }
        self.loading = false;
    }

    /// Open an edit session. No network call is made.
    pub fn begin_edit(&mut self) {
        if self.original.is_none() {
            log::warn!("begin_edit called before an application was loaded");
            return;
        }
        self.editing = true;
    }

    pub fn set_leave_type(&mut self, leave_type: LeaveType) {
        if let Some(updated) = self.updated.as_mut() {
            updated.leave_type = leave_type;
        }
    }

    pub fn set_description(&mut self, description: Option<String>) {
        if let Some(updated) = self.updated.as_mut() {
            updated.description = description;
        }
    }

    pub fn set_date_range(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.selected_range = Some((start, end));
    }

    /// The range picker reports a cleared selection as null; keep that state
    /// representable so `save` can refuse it.
    pub fn clear_date_range(&mut self) {
        self.selected_range = None;
    }

    /// Abandon the edit session. Idempotent: safe to call when no session is
    /// open.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.updated = self.original.clone();
        self.selected_range = self
            .original
            .as_ref()
            .map(|application| (application.start_date, application.end_date));
    }

    /// Commit the edit session.
    ///
    /// On success the submitted range, type, and description are merged into
    /// the authoritative copy; the server's echo of those fields is ignored
    /// and review fields (status, vetter, comments) are left untouched. On
    /// failure the session still ends and the edits are discarded.
    pub async fn save(&mut self) {
        if self.loading {
            log::debug!("save ignored while a request is in flight");
            return;
        }
        let Some(updated) = self.updated.clone() else {
            log::warn!("save called before an application was loaded");
            return;
        };
        let Some((start_date, end_date)) = self.selected_range else {
            self.alert = Some(Alert::warning(MISSING_DATE_RANGE));
            return;
        };

        self.loading = true;
        let request = UpdateLeaveApplicationRequest {
            id: updated.id.clone(),
            start_date,
            end_date,
            leave_type: updated.leave_type,
            description: updated.description.clone(),
            employee_id: updated.employee_id.clone(),
        };
        match self.repository.update(&request).await {
            Ok(_) => {
                if let Some(original) = self.original.as_mut() {
                    original.start_date = start_date;
                    original.end_date = end_date;
                    original.leave_type = updated.leave_type;
                    original.description = updated.description.clone();
                }
                self.updated = self.original.clone();
                self.alert = Some(Alert::success(UPDATE_SUCCESS));
            }
            Err(err) => {
                log::warn!("failed to update leave application {}: {}", request.id, err);
                self.updated = self.original.clone();
                self.selected_range = self
                    .original
                    .as_ref()
                    .map(|application| (application.start_date, application.end_date));
                self.alert = Some(Alert::error(UPDATE_FAILURE));
            }
        }
        self.editing = false;
        self.loading = false;
    }

    /// Withdraw the application. Only a pending application can be
    /// cancelled; the transition is irreversible and the server's success
    /// response is trusted as final.
    pub async fn cancel_application(&mut self) {
        if self.loading {
            log::debug!("cancel_application ignored while a request is in flight");
            return;
        }
        let Some(application) = self.original.as_ref() else {
            log::warn!("cancel_application called before an application was loaded");
            return;
        };
        if application.status != LeaveStatus::Pending {
            log::warn!(
                "cancel_application requires a pending application, status is {}",
                application.status.label()
            );
            return;
        }
        let id = application.id.clone();

        self.loading = true;
        match self.repository.cancel(&id).await {
            Ok(_) => {
                if let Some(original) = self.original.as_mut() {
                    original.status = LeaveStatus::Cancelled;
                }
                if let Some(updated) = self.updated.as_mut() {
                    updated.status = LeaveStatus::Cancelled;
                }
                self.alert = Some(Alert::success(CANCEL_SUCCESS));
            }
            Err(err) => {
                log::warn!("failed to cancel leave application {}: {}", id, err);
                self.alert = Some(Alert::error(CANCEL_FAILURE));
            }
        }
        self.loading = false;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn original(&self) -> Option<&LeaveApplication> {
        self.original.as_ref()
    }

    pub fn updated(&self) -> Option<&LeaveApplication> {
        self.updated.as_ref()
    }

    pub fn selected_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.selected_range
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }
}
