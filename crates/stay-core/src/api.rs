//! Swift Stay Backend Client
//!
//! Typed wrappers over the three endpoints the site depends on. Each method
//! issues exactly one request and maps status codes and body fields onto
//! [`FlowError`].

use serde_json::{Value, json};

use crate::config::ApiConfig;
use crate::deletion::{AuthToken, DeletionCredentials};
use crate::error::{DELETE_FAILED, FlowError, INVALID_CREDENTIALS, Result, SUBMIT_FAILED};
use crate::lead::LeadSubmission;
use crate::transport::{ApiRequest, HttpTransport, ReqwestTransport};

/// Backend client
#[derive(Clone, Debug)]
pub struct SwiftStayApi<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl SwiftStayApi<ReqwestTransport> {
    /// Create a `reqwest` client using the configured timeout
    pub fn from_config(config: ApiConfig) -> Self {
        let transport = ReqwestTransport::new(config.request_timeout);
        Self::new(config, transport)
    }
}

impl<T: HttpTransport> SwiftStayApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /api/auth/login`
    ///
    /// A non-2xx status is an authentication failure. A 2xx without
    /// `data.tokens.accessToken` fails closed with [`FlowError::TokenMissing`].
    pub async fn login(&self, credentials: &DeletionCredentials) -> Result<AuthToken> {
        let body = json!({
            "phoneNumber": credentials.phone_number(),
            "password": credentials.password(),
        });

        let response = self
            .transport
            .send(ApiRequest::post(self.config.login_url(), body))
            .await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "login rejected");
            return Err(FlowError::Authentication(
                response.message().unwrap_or_else(|| INVALID_CREDENTIALS.into()),
            ));
        }

        AuthToken::from_login_body(&response.body).ok_or_else(|| {
            tracing::warn!(status = response.status, "login response has no access token");
            FlowError::TokenMissing
        })
    }

    /// `DELETE /api/users/profile`
    ///
    /// Consumes the token: it is presented once and dropped when this returns.
    pub async fn delete_profile(&self, token: AuthToken) -> Result<()> {
        let response = self
            .transport
            .send(ApiRequest::delete(self.config.profile_url()).bearer(token.expose()))
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            tracing::warn!(status = response.status, "profile deletion rejected");
            Err(FlowError::Deletion(
                response.message().unwrap_or_else(|| DELETE_FAILED.into()),
            ))
        }
    }

    /// `POST /api/owner-applications/submit`
    ///
    /// Success needs both a 2xx status and `"success": true` in the body.
    pub async fn submit_owner_application(&self, submission: &LeadSubmission) -> Result<()> {
        let body = serde_json::to_value(submission)
            .map_err(|e| FlowError::Validation(e.to_string()))?;

        let response = self
            .transport
            .send(ApiRequest::post(self.config.owner_application_url(), body))
            .await?;

        let accepted = response.body.get("success").and_then(Value::as_bool) == Some(true);
        if response.is_success() && accepted {
            tracing::info!("owner application submitted");
            Ok(())
        } else {
            Err(FlowError::Submission(
                response.message().unwrap_or_else(|| SUBMIT_FAILED.into()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    fn credentials() -> DeletionCredentials {
        DeletionCredentials::new("0240333837", "hunter2").unwrap()
    }

    #[tokio::test]
    async fn test_login_body_and_token() {
        let api = SwiftStayApi::new(
            ApiConfig::default(),
            MockTransport::new().respond(200, json!({"data": {"tokens": {"accessToken": "tok-1"}}})),
        );

        let token = api.login(&credentials()).await.unwrap();
        assert_eq!(token.expose(), "tok-1");

        let request = &api.transport().requests()[0];
        assert_eq!(request.url, "https://hos-find-be.onrender.com/api/auth/login");
        assert_eq!(
            request.body,
            Some(json!({"phoneNumber": "0240333837", "password": "hunter2"}))
        );
    }

    #[tokio::test]
    async fn test_login_rejection_message() {
        let api = SwiftStayApi::new(
            ApiConfig::default(),
            MockTransport::new()
                .respond(401, json!({"message": "Wrong password"}))
                .respond(401, Value::Null),
        );

        assert_eq!(
            api.login(&credentials()).await.unwrap_err(),
            FlowError::Authentication("Wrong password".into())
        );
        assert_eq!(
            api.login(&credentials()).await.unwrap_err(),
            FlowError::Authentication(INVALID_CREDENTIALS.into())
        );
    }

    #[tokio::test]
    async fn test_submission_needs_success_flag() {
        let submission = LeadSubmission {
            full_name: "A".into(),
            email: "a@b.c".into(),
            phone: "1".into(),
            property_name: "P".into(),
            city: "C".into(),
            region: "R".into(),
            property_type: None,
            units_available: None,
            message: None,
        };
        let api = SwiftStayApi::new(
            ApiConfig::default(),
            MockTransport::new()
                .respond(200, json!({}))
                .respond(400, json!({"success": true, "message": "Bad email"})),
        );

        assert_eq!(
            api.submit_owner_application(&submission).await,
            Err(FlowError::Submission(SUBMIT_FAILED.into()))
        );
        assert_eq!(
            api.submit_owner_application(&submission).await,
            Err(FlowError::Submission("Bad email".into()))
        );
    }
}
