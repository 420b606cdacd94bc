//! # mood-client: Client Side of the Verification Funnel
//!
//! Everything the verification page does, minus the rendering:
//!
//! - [`gate`]: applies the session gate to a stream of session snapshots
//!   and pushes redirects through a [`gate::Navigator`].
//! - [`verify`]: typed HTTP client for `POST /api/verify`.
//! - [`widget`]: the async boundary standing in for the World ID widget.
//! - [`view`]: the verification view state machine
//!   (`Idle → Verifying → {Verified, Failed}`) with its busy flag and
//!   teardown guard.
//!
//! ## Session Context
//!
//! The auth collaborator publishes [`mood_core::Session`] snapshots through a
//! `tokio::sync::watch` channel. Both the gate and the view take the
//! receiving end explicitly; nothing here reads ambient global state.

pub mod config;
pub mod error;
pub mod gate;
pub mod verify;
pub mod view;
pub mod widget;

pub use config::{ClientConfig, ConfigError};
pub use error::{HandshakeError, VerifyError};
pub use gate::{GateError, Navigator, RecordingNavigator, SessionGate};
pub use verify::VerifyClient;
pub use view::{VerificationView, ViewState};
pub use widget::{PresentedProof, VerificationWidget, WidgetError};
