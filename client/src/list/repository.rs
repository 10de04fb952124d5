use std::sync::Arc;

use crate::api::{ApiError, LeaveApi, LeaveApplication};

/// Data access for the "my leave applications" screen.
#[derive(Clone)]
pub struct ApplicationsRepository {
    api: Arc<dyn LeaveApi>,
}

impl ApplicationsRepository {
    pub fn new(api: Arc<dyn LeaveApi>) -> Self {
        Self { api }
    }

    pub async fn for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, ApiError> {
        self.api.applications_for_employee(employee_id).await
    }
}
