//! # Verification Widget Boundary
//!
//! The World ID widget is an external SDK that calls back into the page
//! with a proof once the user finishes the challenge. Here that callback is
//! a single async call: [`VerificationWidget::present`] resolves with the
//! proof, or with the reason none was produced.

use std::future::Future;

use mood_core::{WidgetConfig, WidgetProof};

/// Why the widget produced no proof.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The user closed the widget without finishing.
    #[error("verification widget dismissed")]
    Dismissed,
    /// The widget reported an error of its own.
    #[error("{0}")]
    Failed(String),
}

/// Source of personhood proofs.
pub trait VerificationWidget {
    /// Present the widget and wait for the user to complete it.
    fn present(
        &self,
        config: &WidgetConfig,
    ) -> impl Future<Output = Result<WidgetProof, WidgetError>> + Send;
}

/// A widget whose proof was obtained out of band (a file, a test fixture).
#[derive(Debug, Clone)]
pub struct PresentedProof(pub WidgetProof);

impl VerificationWidget for PresentedProof {
    fn present(
        &self,
        _config: &WidgetConfig,
    ) -> impl Future<Output = Result<WidgetProof, WidgetError>> + Send {
        let proof = self.0.clone();
        async move { Ok(proof) }
    }
}
