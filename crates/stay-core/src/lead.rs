//! Partner Lead Form
//!
//! Property owners leave their details and the backend records an owner
//! application. The form is a small state machine: a mutable draft, a pending
//! flag that blocks duplicate submits, and the status of the last attempt.

use serde::{Deserialize, Serialize};

use crate::api::SwiftStayApi;
use crate::error::{FlowError, Result};
use crate::transport::HttpTransport;

/// Confirmation shown after a successful submission
pub const SUBMITTED: &str = "Application submitted. Our team will contact you shortly.";

/// Raw form fields as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub property_name: String,
    pub city: String,
    pub region: String,
    pub property_type: String,
    pub units_available: String,
    pub message: String,
}

/// Form fields addressable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    PropertyName,
    City,
    Region,
    PropertyType,
    UnitsAvailable,
    Message,
}

impl LeadField {
    /// Label used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            LeadField::FullName => "Full name",
            LeadField::Email => "Email",
            LeadField::Phone => "Phone",
            LeadField::PropertyName => "Property name",
            LeadField::City => "City",
            LeadField::Region => "Region/State",
            LeadField::PropertyType => "Property type",
            LeadField::UnitsAvailable => "Units available",
            LeadField::Message => "Message",
        }
    }
}

impl LeadDraft {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::PropertyName => &self.property_name,
            LeadField::City => &self.city,
            LeadField::Region => &self.region,
            LeadField::PropertyType => &self.property_type,
            LeadField::UnitsAvailable => &self.units_available,
            LeadField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::FullName => self.full_name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::PropertyName => self.property_name = value,
            LeadField::City => self.city = value,
            LeadField::Region => self.region = value,
            LeadField::PropertyType => self.property_type = value,
            LeadField::UnitsAvailable => self.units_available = value,
            LeadField::Message => self.message = value,
        }
    }

    /// The submit control is enabled only with a phone number
    pub fn can_submit(&self) -> bool {
        !self.phone.is_empty()
    }

    /// Check required fields and build the wire payload
    pub fn validate(&self) -> Result<LeadSubmission> {
        const REQUIRED: [LeadField; 6] = [
            LeadField::FullName,
            LeadField::Email,
            LeadField::Phone,
            LeadField::PropertyName,
            LeadField::City,
            LeadField::Region,
        ];

        if let Some(missing) = REQUIRED.iter().find(|f| self.get(**f).trim().is_empty()) {
            return Err(FlowError::Validation(format!("{} is required", missing.label())));
        }

        let units_available = match self.units_available.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| {
                FlowError::Validation("Units available must be a whole number".into())
            })?),
        };

        Ok(LeadSubmission {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            property_name: self.property_name.trim().to_string(),
            city: self.city.trim().to_string(),
            region: self.region.trim().to_string(),
            property_type: optional(&self.property_type),
            units_available,
            message: optional(&self.message),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validated owner application payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub property_name: String,
    pub city: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_available: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome kind of one attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Success,
    Error,
}

/// Status message for one submission attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub kind: ResultKind,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ResultKind::Success
    }
}

impl From<Result<()>> for SubmissionResult {
    fn from(outcome: Result<()>) -> Self {
        match outcome {
            Ok(()) => SubmissionResult::success(SUBMITTED),
            Err(e) => SubmissionResult::error(e.user_message()),
        }
    }
}

/// Send one owner application
pub async fn submit_lead<T: HttpTransport>(
    api: &SwiftStayApi<T>,
    submission: &LeadSubmission,
) -> Result<()> {
    api.submit_owner_application(submission).await.map_err(|e| {
        match &e {
            FlowError::Transport(reason) => tracing::error!("owner application transport failure: {}", reason),
            other => tracing::warn!("owner application rejected: {}", other),
        }
        e
    })
}

/// Partner lead form state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub draft: LeadDraft,
    pending: bool,
    status: Option<SubmissionResult>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn status(&self) -> Option<&SubmissionResult> {
        self.status.as_ref()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.pending && self.draft.can_submit()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "Submitting..."
        } else {
            "Submit Application"
        }
    }

    /// Start an attempt.
    ///
    /// Returns the payload to send, or `None` when the control is disabled.
    /// Validation failures become the status and leave the form idle.
    pub fn begin(&mut self) -> Option<LeadSubmission> {
        if !self.can_submit() {
            return None;
        }

        self.status = None;
        match self.draft.validate() {
            Ok(submission) => {
                self.pending = true;
                Some(submission)
            }
            Err(e) => {
                self.status = Some(SubmissionResult::error(e.user_message()));
                None
            }
        }
    }

    /// Record the outcome of the attempt started by `begin`
    pub fn finish(&mut self, outcome: Result<()>) -> &SubmissionResult {
        self.pending = false;
        let result = SubmissionResult::from(outcome);
        if result.is_success() {
            self.draft = LeadDraft::default();
        }
        self.status.insert(result)
    }

    /// Run a full attempt against the API
    pub async fn submit<T: HttpTransport>(&mut self, api: &SwiftStayApi<T>) -> Option<SubmissionResult> {
        let submission = self.begin()?;
        let outcome = submit_lead(api, &submission).await;
        Some(self.finish(outcome).clone())
    }
}
