//! # Session Gate
//!
//! Decides where a visitor of the verification page belongs in the
//! onboarding funnel. The decision is a pure function of the [`Session`]:
//!
//! | `is_loading` | user             | decision                       |
//! |--------------|------------------|--------------------------------|
//! | `true`       | any              | [`GateDecision::Pending`]      |
//! | `false`      | none             | redirect to [`Route::SignIn`]  |
//! | `false`      | no wallet        | redirect to [`Route::ConnectWallet`] |
//! | `false`      | wallet connected | [`GateDecision::Stay`]         |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::session::Session;

/// Navigation targets of the onboarding funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Route {
    SignIn,
    ConnectWallet,
    Verify,
    Dashboard,
}

impl Route {
    /// All routes in funnel order.
    pub const ALL: [Route; 4] = [
        Route::SignIn,
        Route::ConnectWallet,
        Route::Verify,
        Route::Dashboard,
    ];

    pub fn as_path(&self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::ConnectWallet => "/connect-wallet",
            Self::Verify => "/verify",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for Route {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.as_path() == s)
            .ok_or_else(|| ValidationError::UnknownRoute(s.to_string()))
    }
}

impl From<Route> for &'static str {
    fn from(route: Route) -> Self {
        route.as_path()
    }
}

impl TryFrom<String> for Route {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Outcome of evaluating a session against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "route", rename_all = "snake_case")]
pub enum GateDecision {
    /// Auth state is still resolving: show a spinner, do not navigate.
    Pending,
    /// The visitor must complete an earlier step first.
    Redirect(Route),
    /// All preconditions hold; remain on the verification page.
    Stay,
}

impl GateDecision {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The route to navigate to, if any.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Redirect(route) => Some(*route),
            _ => None,
        }
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Redirect(route) => write!(f, "redirect {route}"),
            Self::Stay => f.write_str("stay"),
        }
    }
}

/// Evaluate the gate for a session snapshot.
pub fn evaluate(session: &Session) -> GateDecision {
    if session.is_loading {
        return GateDecision::Pending;
    }
    match &session.user {
        None => GateDecision::Redirect(Route::SignIn),
        Some(user) if user.wallet().is_none() => GateDecision::Redirect(Route::ConnectWallet),
        Some(_) => GateDecision::Stay,
    }
}
