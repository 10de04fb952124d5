use std::sync::Arc;

use crate::api::{LeaveApi, LeaveApplication};
use crate::list::repository::ApplicationsRepository;

/// Data source for the "my leave applications" table.
///
/// The owner is always an explicit argument; nothing here reads ambient
/// user context.
pub struct MyApplicationsViewModel {
    repository: ApplicationsRepository,
    applications: Vec<LeaveApplication>,
    loading: bool,
}

impl MyApplicationsViewModel {
    pub fn new(api: Arc<dyn LeaveApi>) -> Self {
        Self {
            repository: ApplicationsRepository::new(api),
            applications: Vec::new(),
            loading: false,
        }
    }

    /// Fetch one employee's applications, sorted ascending by start date.
    /// A failed fetch keeps whatever was loaded before and logs a warning.
    pub async fn load_for_employee(&mut self, employee_id: &str) {
        if self.loading {
            log::debug!("load_for_employee ignored while a request is in flight");
            return;
        }
        self.loading = true;
        match self.repository.for_employee(employee_id).await {
            Ok(mut applications) => {
                applications.sort_by_key(|application| application.start_date);
                self.applications = applications;
            }
            Err(err) => {
                log::warn!(
                    "failed to load leave applications for employee {}: {}",
                    employee_id,
                    err
                );
            }
        }
        self.loading = false;
    }

    pub fn applications(&self) -> &[LeaveApplication] {
        &self.applications
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
