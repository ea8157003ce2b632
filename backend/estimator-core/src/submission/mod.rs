//! Submission pipeline: `Idle → Submitting → {Success, Failure}`.
//!
//! Exactly one request may be in flight per cycle. The guard is the state
//! machine itself, not a disabled button: a `submit` that arrives while a
//! cycle is `Submitting` is ignored outright, so programmatic double
//! submits are blocked the same way rapid clicks are.
//!
//! Each cycle gets its own id. The cosmetic tone revert scheduled after a
//! transport failure checks that id before firing, so a superseding cycle
//! silently cancels the stale timer instead of having its result
//! clobbered three seconds later.

pub mod client;
pub mod display;

pub use client::PredictionClient;
pub use display::{
    DisplayTone, PRICE_MISSING_MESSAGE, REQUEST_FAILED_MESSAGE, ResultDisplay,
};

use crate::error::CoreError;
use crate::form::FormFields;

use common::Price;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Delay before the error tone reverts, purely presentational.
pub const ERROR_TONE_REVERT_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    /// Terminal for the cycle; submit is re-enabled, so this is
    /// idle-equivalent for the guard.
    Success,
    Failure,
}

/// What a call to [`SubmissionPipeline::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionOutcome {
    /// The endpoint returned a usable price; the display renders it.
    Priced(Price),
    /// The request failed; the display renders the fixed error message.
    Failed,
    /// Another submission was in flight; nothing happened.
    Ignored,
}

/// Drives a submission cycle end to end and keeps the shared
/// [`ResultDisplay`] in sync.
///
/// Clones share state, so the revert task and the caller observe the same
/// display.
#[derive(Clone)]
pub struct SubmissionPipeline {
    client: PredictionClient,
    display: Arc<RwLock<ResultDisplay>>,
    phase: Arc<RwLock<SubmissionPhase>>,
    current_cycle: Arc<RwLock<Option<Uuid>>>,
    revert_delay: Duration,
}

impl SubmissionPipeline {
    pub fn new(client: PredictionClient) -> Self {
        Self::with_revert_delay(client, ERROR_TONE_REVERT_DELAY)
    }

    /// Pipeline with a custom revert delay; tests shrink it.
    pub fn with_revert_delay(client: PredictionClient, revert_delay: Duration) -> Self {
        Self {
            client,
            display: Arc::new(RwLock::new(ResultDisplay::default())),
            phase: Arc::new(RwLock::new(SubmissionPhase::Idle)),
            current_cycle: Arc::new(RwLock::new(None)),
            revert_delay,
        }
    }

    /// Shared display state for the UI layer to render from.
    pub fn display(&self) -> Arc<RwLock<ResultDisplay>> {
        Arc::clone(&self.display)
    }

    pub async fn phase(&self) -> SubmissionPhase {
        *self.phase.read().await
    }

    /// Run one submission cycle from the current form field values.
    ///
    /// Ignored (no request, no display change) when a cycle is already in
    /// flight. Request assembly failures (no turbo choice checked) fail
    /// fast before any network traffic and surface as an error; network
    /// and response failures are handled in place, rendered to the
    /// display, and reported as [`SubmissionOutcome::Failed`].
    pub async fn submit(&self, fields: &FormFields) -> Result<SubmissionOutcome, CoreError> {
        {
            let mut phase = self.phase.write().await;
            if *phase == SubmissionPhase::Submitting {
                warn!("Submission ignored: another request is in flight");
                return Ok(SubmissionOutcome::Ignored);
            }
            *phase = SubmissionPhase::Submitting;
        }

        let cycle = Uuid::new_v4();
        *self.current_cycle.write().await = Some(cycle);
        self.display.write().await.begin_cycle();

        let request = match fields.to_request() {
            Ok(request) => request,
            Err(form_error) => {
                error!("Request assembly failed: {form_error}");
                self.display.write().await.show_error(REQUEST_FAILED_MESSAGE);
                *self.phase.write().await = SubmissionPhase::Failure;
                return Err(form_error.into());
            }
        };

        info!(
            "Submitting prediction request: {} {}",
            request.manufacturer, request.model
        );

        match self.client.predict(&request).await {
            Ok(price) => {
                info!("Prediction succeeded: {price}");
                self.display.write().await.show_price(price);
                *self.phase.write().await = SubmissionPhase::Success;
                Ok(SubmissionOutcome::Priced(price))
            }
            Err(client_error) => {
                *self.phase.write().await = SubmissionPhase::Failure;
                if client_error.is_transport_level() {
                    error!("Prediction request failed: {client_error}");
                    self.display.write().await.show_error(REQUEST_FAILED_MESSAGE);
                    self.schedule_tone_revert(cycle);
                } else {
                    error!("Prediction response unusable: {client_error}");
                    self.display.write().await.show_error(PRICE_MISSING_MESSAGE);
                }
                Ok(SubmissionOutcome::Failed)
            }
        }
    }

    /// Fire-and-forget tone revert, keyed to the cycle that scheduled it.
    /// A newer cycle makes it a no-op. Never delays re-enabling submit.
    fn schedule_tone_revert(&self, cycle: Uuid) {
        let display = Arc::clone(&self.display);
        let current_cycle = Arc::clone(&self.current_cycle);
        let delay = self.revert_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if *current_cycle.read().await == Some(cycle) {
                display.write().await.revert_tone();
            }
        });
    }
}
