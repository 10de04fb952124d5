/// Who is talking to the service.
///
/// Passed explicitly to [`crate::api::ApiClient`] and to the list view model
/// instead of being read from ambient storage, so callers stay in control of
/// whose applications are being fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub employee_id: String,
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            access_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_token_sets_access_token() {
        let session = Session::new("e-7").with_token("t");
        assert_eq!(session.employee_id, "e-7");
        assert_eq!(session.access_token.as_deref(), Some("t"));
    }
}
