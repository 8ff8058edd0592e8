//! Account Deletion Flow
//!
//! Authenticate with phone number and password, then delete the profile with
//! the token from that same login. The steps run strictly in order and stop
//! at the first failure.
//!
//! ```text
//! Idle ──▶ Authenticating ──▶ Deleting ──▶ Succeeded
//!               │                 │
//!               └────▶ Failed ◀───┘
//! ```
//!
//! The token never outlives the attempt: [`SwiftStayApi::delete_profile`]
//! takes it by value and it is zeroed when dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::api::SwiftStayApi;
use crate::error::{FlowError, Result};
use crate::lead::SubmissionResult;
use crate::transport::HttpTransport;

/// Notification shown after the profile is gone
pub const ACCOUNT_DELETED: &str = "Account deleted successfully!";

/// Phone number and password for one deletion attempt
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DeletionCredentials {
    phone_number: String,
    password: String,
}

impl DeletionCredentials {
    /// Apply the form's field rules
    pub fn new(phone_number: &str, password: &str) -> Result<Self> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(FlowError::Validation("Please enter your phone number".into()));
        }
        if !is_phone_number(phone_number) {
            return Err(FlowError::Validation("Please enter a valid phone number".into()));
        }
        if password.is_empty() {
            return Err(FlowError::Validation("Please enter your password".into()));
        }

        Ok(Self {
            phone_number: phone_number.to_string(),
            password: password.to_string(),
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for DeletionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeletionCredentials")
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Digits, spaces, `+`, `-` and parentheses
fn is_phone_number(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')') || c.is_whitespace())
}

/// Bearer token issued by login. Not `Clone`, not serializable.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AuthToken(String);

impl AuthToken {
    /// Read `data.tokens.accessToken` from a login response body
    pub(crate) fn from_login_body(body: &Value) -> Option<Self> {
        body.pointer("/data/tokens/accessToken")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(|t| Self(t.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Progress of a deletion attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionPhase {
    #[default]
    Idle,
    Authenticating,
    Deleting,
    Succeeded,
    Failed,
}

impl DeletionPhase {
    /// A request is outstanding
    pub fn is_in_flight(self) -> bool {
        matches!(self, DeletionPhase::Authenticating | DeletionPhase::Deleting)
    }
}

/// Run login then delete, reporting each phase change to `on_phase`
pub async fn delete_account<T, F>(
    api: &SwiftStayApi<T>,
    credentials: &DeletionCredentials,
    mut on_phase: F,
) -> Result<()>
where
    T: HttpTransport,
    F: FnMut(DeletionPhase),
{
    on_phase(DeletionPhase::Authenticating);
    let outcome = match api.login(credentials).await {
        Ok(token) => {
            on_phase(DeletionPhase::Deleting);
            api.delete_profile(token).await
        }
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(()) => {
            tracing::info!("account deleted");
            on_phase(DeletionPhase::Succeeded);
        }
        Err(e) => {
            if e.is_retryable() {
                tracing::error!("account deletion failed: {}", e);
            } else {
                tracing::warn!("account deletion failed: {}", e);
            }
            on_phase(DeletionPhase::Failed);
        }
    }

    outcome
}

/// State behind the immediate-deletion form
///
/// `Succeeded` and `Failed` hand control back: a new attempt may start from
/// either exactly as from `Idle`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeletionForm {
    pub phone_number: String,
    pub password: String,
    visible: bool,
    phase: DeletionPhase,
    notice: Option<SubmissionResult>,
}

impl fmt::Debug for DeletionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeletionForm")
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .field("visible", &self.visible)
            .field("phase", &self.phase)
            .field("notice", &self.notice)
            .finish()
    }
}

impl DeletionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DeletionPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_in_flight()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The "Delete Account Now" toggle
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn notice(&self) -> Option<&SubmissionResult> {
        self.notice.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            "Deleting Account..."
        } else {
            "Delete My Account"
        }
    }

    /// Start an attempt. `None` while pending or when a field rule fails.
    pub fn begin(&mut self) -> Option<DeletionCredentials> {
        if self.is_pending() {
            return None;
        }

        self.notice = None;
        match DeletionCredentials::new(&self.phone_number, &self.password) {
            Ok(credentials) => {
                self.phase = DeletionPhase::Authenticating;
                Some(credentials)
            }
            Err(e) => {
                self.phase = DeletionPhase::Idle;
                self.notice = Some(SubmissionResult::error(e.user_message()));
                None
            }
        }
    }

    /// Follow the phase reported by [`delete_account`]
    pub fn advance(&mut self, phase: DeletionPhase) {
        self.phase = phase;
    }

    /// Record the outcome. Fields are reset and the form hidden only on success.
    pub fn finish(&mut self, outcome: Result<()>) -> &SubmissionResult {
        let notice = match outcome {
            Ok(()) => {
                self.phase = DeletionPhase::Succeeded;
                self.phone_number.clear();
                self.password.zeroize();
                self.visible = false;
                SubmissionResult::success(ACCOUNT_DELETED)
            }
            Err(e) => {
                self.phase = DeletionPhase::Failed;
                SubmissionResult::error(e.user_message())
            }
        };
        self.notice.insert(notice)
    }

    /// Run a full attempt against the API
    pub async fn submit<T: HttpTransport>(&mut self, api: &SwiftStayApi<T>) -> Option<SubmissionResult> {
        let credentials = self.begin()?;
        let mut phase = self.phase;
        let outcome = delete_account(api, &credentials, |p| phase = p).await;
        self.advance(phase);
        Some(self.finish(outcome).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::{DELETE_FAILED, INVALID_CREDENTIALS, NETWORK_ERROR, TOKEN_MISSING};
    use crate::transport::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    fn login_ok(token: &str) -> Value {
        json!({"success": true, "data": {"tokens": {"accessToken": token, "refreshToken": "r"}}})
    }

    fn api(transport: MockTransport) -> SwiftStayApi<MockTransport> {
        SwiftStayApi::new(ApiConfig::default(), transport)
    }

    fn filled_form() -> DeletionForm {
        let mut form = DeletionForm::new();
        form.toggle();
        form.phone_number = "+233 (24) 033-3837".into();
        form.password = "s3cret".into();
        form
    }

    async fn run(api: &SwiftStayApi<MockTransport>) -> (Result<()>, Vec<DeletionPhase>) {
        let credentials = DeletionCredentials::new("0240333837", "s3cret").unwrap();
        let mut phases = vec![DeletionPhase::Idle];
        let outcome = delete_account(api, &credentials, |p| phases.push(p)).await;
        (outcome, phases)
    }

    #[test]
    fn test_credential_rules() {
        assert_eq!(
            DeletionCredentials::new("", "pw").unwrap_err(),
            FlowError::Validation("Please enter your phone number".into())
        );
        assert_eq!(
            DeletionCredentials::new("024-abc", "pw").unwrap_err(),
            FlowError::Validation("Please enter a valid phone number".into())
        );
        assert_eq!(
            DeletionCredentials::new("0240333837", "").unwrap_err(),
            FlowError::Validation("Please enter your password".into())
        );
        assert!(DeletionCredentials::new("+233 (24) 033-3837", "pw").is_ok());
    }

    #[test]
    fn test_secrets_redacted_from_debug() {
        let credentials = DeletionCredentials::new("0240333837", "hunter2").unwrap();
        assert!(!format!("{credentials:?}").contains("hunter2"));

        let token = AuthToken::from_login_body(&login_ok("tok-abc")).unwrap();
        assert!(!format!("{token:?}").contains("tok-abc"));

        let mut form = DeletionForm::new();
        form.phone_number = "0240333837".into();
        form.password = "hunter2".into();
        let rendered = format!("{form:?}");
        assert!(rendered.contains("0240333837"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_token_extraction() {
        assert!(AuthToken::from_login_body(&json!({"data": {"tokens": {}}})).is_none());
        assert!(AuthToken::from_login_body(&json!({"data": {"tokens": {"accessToken": ""}}})).is_none());
        assert!(AuthToken::from_login_body(&json!({"data": {"tokens": {"accessToken": 7}}})).is_none());
        assert!(AuthToken::from_login_body(&json!({"accessToken": "top-level"})).is_none());
        assert!(AuthToken::from_login_body(&Value::Null).is_none());
    }

    #[tokio::test]
    async fn test_happy_path() {
        let api = api(
            MockTransport::new()
                .respond(200, login_ok("tok-1"))
                .respond(200, json!({"success": true})),
        );

        let (outcome, phases) = run(&api).await;
        assert_eq!(outcome, Ok(()));
        assert_eq!(
            phases,
            vec![
                DeletionPhase::Idle,
                DeletionPhase::Authenticating,
                DeletionPhase::Deleting,
                DeletionPhase::Succeeded,
            ]
        );

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].url, "https://hos-find-be.onrender.com/api/users/profile");
        assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-1"));
        assert_eq!(requests[1].body, None);
    }

    #[tokio::test]
    async fn test_login_rejected_skips_delete() {
        let api = api(MockTransport::new().respond(401, json!({})));

        let (outcome, phases) = run(&api).await;
        assert_eq!(outcome, Err(FlowError::Authentication(INVALID_CREDENTIALS.into())));
        assert_eq!(
            phases,
            vec![DeletionPhase::Idle, DeletionPhase::Authenticating, DeletionPhase::Failed]
        );
        assert_eq!(api.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_token_skips_delete() {
        let api = api(
            MockTransport::new()
                .respond(200, json!({"success": true, "data": {"user": {"id": 1}}}))
                .respond(200, json!({"success": true})),
        );

        let (outcome, _) = run(&api).await;
        assert_eq!(outcome, Err(FlowError::TokenMissing));
        assert_eq!(outcome.unwrap_err().user_message(), TOKEN_MISSING);
        assert_eq!(api.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_rejection_uses_body_message() {
        let api = api(
            MockTransport::new()
                .respond(200, login_ok("tok-1"))
                .respond(403, json!({"message": "X"})),
        );

        let (outcome, phases) = run(&api).await;
        assert_eq!(outcome.unwrap_err().user_message(), "X");
        assert_eq!(phases.last(), Some(&DeletionPhase::Failed));
        assert!(phases.contains(&DeletionPhase::Deleting));
    }

    #[tokio::test]
    async fn test_delete_rejection_fallback() {
        let api = api(
            MockTransport::new()
                .respond(200, login_ok("tok-1"))
                .respond(500, Value::Null),
        );

        let (outcome, _) = run(&api).await;
        assert_eq!(outcome, Err(FlowError::Deletion(DELETE_FAILED.into())));
    }

    #[tokio::test]
    async fn test_transport_failure_on_login() {
        let api = api(MockTransport::new().fail("connection refused"));

        let (outcome, _) = run(&api).await;
        let err = outcome.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), NETWORK_ERROR);
        assert_eq!(api.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_form_success_resets_fields() {
        let api = api(
            MockTransport::new()
                .respond(200, login_ok("tok-1"))
                .respond(200, json!({})),
        );
        let mut form = filled_form();

        let notice = form.submit(&api).await.unwrap();
        assert_eq!(notice, SubmissionResult::success(ACCOUNT_DELETED));
        assert_eq!(form.phase(), DeletionPhase::Succeeded);
        assert!(form.phone_number.is_empty());
        assert!(form.password.is_empty());
        assert!(!form.is_visible());
        assert!(!form.is_pending());
    }

    #[tokio::test]
    async fn test_form_failure_keeps_fields() {
        let api = api(MockTransport::new().respond(401, json!({"message": "Invalid phone or password"})));
        let mut form = filled_form();

        let notice = form.submit(&api).await.unwrap();
        assert_eq!(notice, SubmissionResult::error("Invalid phone or password"));
        assert_eq!(form.phase(), DeletionPhase::Failed);
        assert_eq!(form.password, "s3cret");
        assert!(form.is_visible());
        assert_eq!(form.submit_label(), "Delete My Account");
    }

    #[tokio::test]
    async fn test_form_validation_sends_nothing() {
        let api = api(MockTransport::new());
        let mut form = filled_form();
        form.password.clear();

        assert_eq!(form.submit(&api).await, None);
        assert_eq!(api.transport().call_count(), 0);
        assert_eq!(form.phase(), DeletionPhase::Idle);
        assert_eq!(
            form.notice(),
            Some(&SubmissionResult::error("Please enter your password"))
        );
    }

    #[test]
    fn test_pending_blocks_resubmit() {
        let mut form = filled_form();
        assert!(form.begin().is_some());
        assert!(form.is_pending());
        assert_eq!(form.submit_label(), "Deleting Account...");
        assert!(form.begin().is_none());

        form.advance(DeletionPhase::Deleting);
        assert!(form.begin().is_none());

        form.finish(Err(FlowError::Transport("timeout".into())));
        assert!(form.begin().is_some());
    }

    #[tokio::test]
    async fn test_each_attempt_uses_its_own_token() {
        let api = api(
            MockTransport::new()
                .respond(200, login_ok("tok-1"))
                .respond(500, json!({}))
                .respond(200, login_ok("tok-2"))
                .respond(200, json!({})),
        );
        let mut form = filled_form();

        form.submit(&api).await.unwrap();
        assert_eq!(form.phase(), DeletionPhase::Failed);
        form.submit(&api).await.unwrap();
        assert_eq!(form.phase(), DeletionPhase::Succeeded);

        let auth: Vec<_> = api
            .transport()
            .requests()
            .into_iter()
            .filter_map(|r| r.authorization)
            .collect();
        assert_eq!(auth, vec!["Bearer tok-1", "Bearer tok-2"]);
    }
}
