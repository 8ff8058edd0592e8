//! # stay-core
//!
//! Account self-service flows behind the Swift Stay website.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        stay-web (Leptos)                      │
//! │   ┌───────────────┐                  ┌────────────────────┐   │
//! │   │   LeadForm    │                  │   DeletionForm     │   │
//! │   └───────┬───────┘                  └─────────┬──────────┘   │
//! └───────────┼────────────────────────────────────┼──────────────┘
//!             ▼                                    ▼
//!      submit_lead()                      delete_account()
//!             │                          login ──▶ delete_profile
//!             └──────────────┬───────────────────────┘
//!                     SwiftStayApi<T>
//!                            │
//!                   HttpTransport (Strategy)
//!              ReqwestTransport │ MockTransport
//! ```
//!
//! Nothing here retries, caches or persists. Each form instance allows one
//! request chain in flight at a time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stay_core::{ApiConfig, DeletionCredentials, SwiftStayApi, delete_account};
//!
//! let api = SwiftStayApi::from_config(ApiConfig::from_env()?);
//! let credentials = DeletionCredentials::new("0240333837", "password")?;
//! delete_account(&api, &credentials, |phase| tracing::debug!(?phase)).await?;
//! ```

pub mod api;
pub mod config;
pub mod deletion;
pub mod error;
pub mod lead;
pub mod transport;

pub use api::SwiftStayApi;
pub use config::ApiConfig;
pub use deletion::{AuthToken, DeletionCredentials, DeletionForm, DeletionPhase, delete_account};
pub use error::{FlowError, Result};
pub use lead::{LeadDraft, LeadField, LeadForm, LeadSubmission, ResultKind, SubmissionResult, submit_lead};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, MockTransport, ReqwestTransport};
