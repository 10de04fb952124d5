pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ErrorResponse};
pub use types::*;

use async_trait::async_trait;

/// Transport contract for the leave endpoints.
///
/// The view models only ever talk to this trait, so tests can substitute
/// `MockLeaveApi` for the HTTP-backed [`ApiClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveApi: Send + Sync {
    /// Fetch a single application by id.
    async fn get_application(&self, id: &str) -> Result<LeaveApplication, ApiError>;

    /// Replace the editable fields of an application.
    async fn update_application(
        &self,
        request: &UpdateLeaveApplicationRequest,
    ) -> Result<LeaveApplication, ApiError>;

    /// Withdraw a pending application. Fails with `Conflict` if the
    /// application has already left the pending state.
    async fn cancel_application(&self, id: &str) -> Result<LeaveApplication, ApiError>;

    /// List all applications filed by one employee.
    async fn applications_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, ApiError>;
}
