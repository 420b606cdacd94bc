//! # mood-core: Foundational Types for the Mood Stack
//!
//! Shared vocabulary for every other crate in the workspace: the session
//! snapshot published by the auth collaborator, the onboarding routes, the
//! session gate decision table, the proof payload produced by the World ID
//! widget, and the verification envelope returned by `/api/verify`.
//!
//! ## Onboarding Funnel
//!
//! ```text
//! /signin → /connect-wallet → /verify → /dashboard
//! ```
//!
//! The gate ([`gate::evaluate`]) is a pure function of the [`Session`]; the
//! crates that act on its decisions (navigation, waiting on the auth
//! collaborator) live in `mood-client`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mood-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod gate;
pub mod proof;
pub mod session;
pub mod verification;
pub mod widget;

pub use error::ValidationError;
pub use gate::{evaluate, GateDecision, Route};
pub use proof::{ProofPayload, VerificationLevel, WidgetProof};
pub use session::{Session, User};
pub use verification::{VerificationId, VerificationResult};
pub use widget::WidgetConfig;
