use std::sync::Arc;

use crate::api::{ApiError, LeaveApi, LeaveApplication, UpdateLeaveApplicationRequest};

/// Data access for the details screen.
#[derive(Clone)]
pub struct DetailsRepository {
    api: Arc<dyn LeaveApi>,
}

impl DetailsRepository {
    pub fn new(api: Arc<dyn LeaveApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        self.api.get_application(id).await
    }

    pub async fn update(
        &self,
        request: &UpdateLeaveApplicationRequest,
    ) -> Result<LeaveApplication, ApiError> {
        self.api.update_application(request).await
    }

    pub async fn cancel(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        self.api.cancel_application(id).await
    }
}
