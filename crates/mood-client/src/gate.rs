//! # Session Gate Driver
//!
//! Applies [`mood_core::evaluate`] the way a page effect would: once per
//! distinct session snapshot. Re-observing an unchanged session never
//! navigates again, so each redirect is pushed exactly once per state.
//!
//! [`SessionGate::watch`] follows a session channel until the gate settles
//! on a redirect or on staying put. While the auth collaborator is still
//! loading the driver simply waits; the wait is unbounded unless a settle
//! timeout is supplied.

use std::sync::Arc;
use std::time::Duration;

use mood_core::{evaluate, GateDecision, Route, Session};
use parking_lot::Mutex;
use tokio::sync::watch;

/// Performs page navigation.
pub trait Navigator {
    fn push(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn push(&self, route: Route) {
        (**self).push(route)
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn push(&self, route: Route) {
        (**self).push(route)
    }
}

/// Navigator that records every push.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pushed: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes pushed so far, oldest first.
    pub fn pushed(&self) -> Vec<Route> {
        self.pushed.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.pushed.lock().push(route);
    }
}

/// Errors from [`SessionGate::watch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("session did not resolve within {0:?}")]
    Timeout(Duration),
    #[error("session publisher went away before the session resolved")]
    SessionClosed,
}

/// Gate bound to a navigator, remembering the last session it acted on.
#[derive(Debug)]
pub struct SessionGate<N> {
    navigator: N,
    last: Option<(Session, GateDecision)>,
}

impl<N: Navigator> SessionGate<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            last: None,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Most recent decision, if any session has been observed.
    pub fn last_decision(&self) -> Option<GateDecision> {
        self.last.as_ref().map(|(_, decision)| *decision)
    }

    /// Evaluate a session snapshot, navigating if it calls for a redirect.
    pub fn observe(&mut self, session: &Session) -> GateDecision {
        if let Some((seen, decision)) = &self.last {
            if seen == session {
                return *decision;
            }
        }

        let decision = evaluate(session);
        if let Some(route) = decision.redirect() {
            tracing::debug!(%route, "session gate redirect");
            self.navigator.push(route);
        }
        self.last = Some((session.clone(), decision));
        decision
    }

    /// Follow the session channel until the gate leaves the pending state.
    pub async fn watch(
        &mut self,
        sessions: &mut watch::Receiver<Session>,
        settle_timeout: Option<Duration>,
    ) -> Result<GateDecision, GateError> {
        match settle_timeout {
            Some(limit) => tokio::time::timeout(limit, self.settle(sessions))
                .await
                .map_err(|_| GateError::Timeout(limit))?,
            None => self.settle(sessions).await,
        }
    }

    async fn settle(
        &mut self,
        sessions: &mut watch::Receiver<Session>,
    ) -> Result<GateDecision, GateError> {
        loop {
            let session = sessions.borrow_and_update().clone();
            let decision = self.observe(&session);
            if !decision.is_pending() {
                return Ok(decision);
            }
            sessions
                .changed()
                .await
                .map_err(|_| GateError::SessionClosed)?;
        }
    }
}
