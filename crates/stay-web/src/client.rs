//! Backend Client Wiring
//!
//! Builds the API client from build-time settings and runs form attempts
//! on the browser event loop with a deadline and a cancel handle.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use stay_core::{ApiConfig, FlowError, SwiftStayApi, config};

/// Settings baked in when the bundle is built. Invalid values fall back to defaults.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_lookup(|key| {
        let value = match key {
            config::AUTH_URL_VAR => option_env!("SWIFT_STAY_AUTH_URL"),
            config::API_BASE_URL_VAR => option_env!("SWIFT_STAY_API_BASE_URL"),
            config::REQUEST_TIMEOUT_VAR => option_env!("SWIFT_STAY_REQUEST_TIMEOUT_SECS"),
            _ => None,
        };
        value.map(String::from)
    })
    .unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build-time API settings, using defaults: {e}");
        ApiConfig::default()
    })
}

pub fn api() -> SwiftStayApi {
    SwiftStayApi::from_config(api_config())
}

/// Error reported when an attempt hits its deadline
pub fn timed_out() -> FlowError {
    FlowError::Transport("request timed out".into())
}

/// Spawn one form attempt.
///
/// The attempt is dropped mid-flight when the configured timeout elapses or
/// the returned handle is aborted. `on_abort` runs in either case.
pub fn spawn_attempt<F, A>(attempt: F, on_abort: A) -> AbortHandle
where
    F: Future<Output = ()> + 'static,
    A: FnOnce() + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();

    let deadline = handle.clone();
    set_timeout(move || deadline.abort(), api_config().request_timeout);

    leptos::task::spawn_local(async move {
        if Abortable::new(attempt, registration).await.is_err() {
            on_abort();
        }
    });

    handle
}
