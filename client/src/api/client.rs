use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::types::{LeaveApplication, UpdateLeaveApplicationRequest};
use crate::api::LeaveApi;
use crate::session::Session;

/// HTTP-backed implementation of [`LeaveApi`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.session.access_token {
            headers.insert(
                AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::Transport("Invalid token format".into()))?,
            );
        }
        Ok(headers)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.headers(self.auth_headers()?).send().await?;
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            log::warn!("leave api returned {}: {}", status, message);
            Err(ApiError::from_status(status, message))
        }
    }
}

#[async_trait]
impl LeaveApi for ApiClient {
    async fn get_application(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        let url = self.endpoint(&format!("/leave/applications/{}", id));
        self.send_json(self.client.get(&url)).await
    }

    async fn update_application(
        &self,
        request: &UpdateLeaveApplicationRequest,
    ) -> Result<LeaveApplication, ApiError> {
        let url = self.endpoint(&format!("/leave/applications/{}", request.id));
        self.send_json(self.client.put(&url).json(request)).await
    }

    async fn cancel_application(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        let url = self.endpoint(&format!("/leave/applications/{}/cancel", id));
        self.send_json(self.client.put(&url)).await
    }

    async fn applications_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, ApiError> {
        let url = self.endpoint("/leave/applications");
        self.send_json(
            self.client
                .get(&url)
                .query(&[("employeeId", employee_id)]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8080/api///", Session::new("e-7"));
        assert_eq!(
            client.endpoint("/leave/applications/42"),
            "http://localhost:8080/api/leave/applications/42"
        );
    }

    #[test]
    fn auth_headers_carry_bearer_token_when_present() {
        let session = Session::new("e-7").with_token("token-abc");
        let client = ApiClient::new("http://localhost:8080/api", session);
        let headers = client.auth_headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer token-abc");
    }

    #[test]
    fn auth_headers_empty_without_token() {
        let client = ApiClient::new("http://localhost:8080/api", Session::new("e-7"));
        let headers = client.auth_headers().unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn auth_headers_reject_unencodable_token() {
        let session = Session::new("e-7").with_token("bad\ntoken");
        let client = ApiClient::new("http://localhost:8080/api", session);
        assert!(matches!(
            client.auth_headers(),
            Err(ApiError::Transport(_))
        ));
    }
}
