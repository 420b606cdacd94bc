//! # Verification View
//!
//! State machine behind the verification page:
//!
//! ```text
//!            present/submit             2xx
//!   Idle ─────────────────▶ Verifying ───────▶ Verified (terminal)
//!    ▲                          │
//!    │ retry                    │ non-2xx / transport failure
//!    └───────────────────── Failed ◀┘
//! ```
//!
//! ## Busy flag
//!
//! At most one submission is in flight per view. The flag is claimed with a
//! compare-exchange and released by a guard on every exit path, so it is
//! clear before the first submission and after any terminal outcome.
//! Separate views (other tabs, other devices) are not coordinated.
//!
//! ## Teardown
//!
//! Each view owns a [`CancellationToken`]. Closing or dropping the view
//! cancels it; a submission still in flight is abandoned and the view
//! returns to the state it held before that submission began.

use std::sync::atomic::{AtomicBool, Ordering};

use mood_core::{ProofPayload, Route, Session, VerificationResult, WidgetConfig, WidgetProof};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::{HandshakeError, VerifyError};
use crate::verify::VerifyClient;
use crate::widget::{VerificationWidget, WidgetError};

/// Message shown when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Verification failed. Please try again.";

/// Identifier recorded when a successful response omits `id`.
pub const FALLBACK_VERIFICATION_ID: &str = "verified";

/// Observable state of a verification view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Verifying,
    Verified { verification_id: String },
    Failed { error: String },
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One instance of the verification page.
pub struct VerificationView {
    client: VerifyClient,
    session: watch::Receiver<Session>,
    widget_config: WidgetConfig,
    state: Mutex<ViewState>,
    busy: AtomicBool,
    lifetime: CancellationToken,
}

impl VerificationView {
    pub fn new(
        client: VerifyClient,
        session: watch::Receiver<Session>,
        widget_config: WidgetConfig,
    ) -> Self {
        Self {
            client,
            session,
            widget_config,
            state: Mutex::new(ViewState::Idle),
            busy: AtomicBool::new(false),
            lifetime: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn is_verified(&self) -> bool {
        matches!(*self.state.lock(), ViewState::Verified { .. })
    }

    pub fn verification_id(&self) -> Option<String> {
        match &*self.state.lock() {
            ViewState::Verified { verification_id } => Some(verification_id.clone()),
            _ => None,
        }
    }

    /// Error text to display, if the last attempt failed.
    pub fn error(&self) -> Option<String> {
        match &*self.state.lock() {
            ViewState::Failed { error } => Some(error.clone()),
            _ => None,
        }
    }

    pub fn widget_config(&self) -> &WidgetConfig {
        &self.widget_config
    }

    /// Present the widget, then submit the proof it yields.
    ///
    /// A dismissed widget leaves the view as it was.
    pub async fn verify_with<W: VerificationWidget>(
        &self,
        widget: &W,
    ) -> Result<ViewState, HandshakeError> {
        if self.is_busy() {
            return Err(HandshakeError::Busy);
        }
        if self.is_verified() {
            return Err(HandshakeError::AlreadyVerified);
        }

        let presented = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return Err(HandshakeError::Cancelled),
            presented = widget.present(&self.widget_config) => presented,
        };

        match presented {
            Ok(proof) => self.handle_proof(proof).await,
            Err(WidgetError::Dismissed) => Ok(self.state()),
            Err(err) => {
                tracing::error!(error = %err, "verification widget error");
                Err(err.into())
            }
        }
    }

    /// Submit a proof produced by the widget.
    pub async fn handle_proof(&self, proof: WidgetProof) -> Result<ViewState, HandshakeError> {
        if self.lifetime.is_cancelled() {
            return Err(HandshakeError::Cancelled);
        }
        if self.is_verified() {
            return Err(HandshakeError::AlreadyVerified);
        }
        let _busy = BusyGuard::acquire(&self.busy).ok_or(HandshakeError::Busy)?;

        let address = self.session.borrow().wallet_address().map(str::to_string);
        let payload = ProofPayload::from_widget(proof, address);
        let previous = std::mem::replace(&mut *self.state.lock(), ViewState::Verifying);

        let outcome = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                *self.state.lock() = previous;
                return Err(HandshakeError::Cancelled);
            }
            outcome = self.client.submit_proof(&payload) => outcome,
        };

        let next = settle(outcome);
        *self.state.lock() = next.clone();
        Ok(next)
    }

    /// Return a failed view to idle so the widget can be offered again.
    pub fn retry(&self) {
        let mut state = self.state.lock();
        if matches!(*state, ViewState::Failed { .. }) {
            *state = ViewState::Idle;
        }
    }

    /// Onward navigation once verified.
    pub fn continue_to_dashboard(&self) -> Result<Route, HandshakeError> {
        if self.is_verified() {
            Ok(Route::Dashboard)
        } else {
            Err(HandshakeError::NotVerified)
        }
    }

    /// Leave without verifying.
    pub fn skip(&self) -> Route {
        Route::Dashboard
    }

    /// Tear the view down, abandoning any submission in flight.
    pub fn close(&self) {
        self.lifetime.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.lifetime.is_cancelled()
    }
}

impl Drop for VerificationView {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

fn settle(outcome: Result<VerificationResult, VerifyError>) -> ViewState {
    match outcome {
        Ok(result) => ViewState::Verified {
            verification_id: result
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| FALLBACK_VERIFICATION_ID.to_string()),
        },
        Err(VerifyError::Rejected {
            status, message, ..
        }) => {
            tracing::warn!(status, "verification rejected");
            ViewState::Failed {
                error: message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "verification error");
            let message = err.to_string();
            ViewState::Failed {
                error: if message.is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                },
            }
        }
    }
}
