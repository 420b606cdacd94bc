//! # Session Snapshot
//!
//! The authentication and wallet state owned by the external auth
//! collaborator. This crate only reads it; producers publish new snapshots
//! whenever sign-in or wallet connection progresses.

use serde::{Deserialize, Serialize};

/// A signed-in user as seen by the onboarding funnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Connected wallet address, if any.
    #[serde(default)]
    pub wallet_address: Option<String>,
}

impl User {
    /// A user who has signed in but not connected a wallet.
    pub fn without_wallet() -> Self {
        Self {
            wallet_address: None,
        }
    }

    /// A user with a connected wallet.
    pub fn with_wallet(address: impl Into<String>) -> Self {
        Self {
            wallet_address: Some(address.into()),
        }
    }

    /// The wallet address, treating an empty string as absent.
    pub fn wallet(&self) -> Option<&str> {
        self.wallet_address.as_deref().filter(|a| !a.is_empty())
    }
}

/// Authentication state: the current user and whether it is still resolving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_loading: bool,
}

impl Session {
    /// The auth collaborator has not resolved yet.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    /// Resolved with nobody signed in.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    /// Resolved with a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    /// Wallet address of the signed-in user, if both exist.
    pub fn wallet_address(&self) -> Option<&str> {
        self.user.as_ref().and_then(User::wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wallet_address_counts_as_absent() {
        let user = User::with_wallet("");
        assert_eq!(user.wallet(), None);
        assert_eq!(Session::signed_in(user).wallet_address(), None);
    }

    #[test]
    fn wallet_address_requires_user() {
        assert_eq!(Session::signed_out().wallet_address(), None);
        assert_eq!(
            Session::signed_in(User::with_wallet("0xabc")).wallet_address(),
            Some("0xabc")
        );
    }

    #[test]
    fn deserializes_camel_case_wire_shape() {
        let session: Session = serde_json::from_str(
            r#"{"user":{"walletAddress":"0x1234"},"isLoading":false}"#,
        )
        .unwrap();
        assert_eq!(session, Session::signed_in(User::with_wallet("0x1234")));
    }

    #[test]
    fn missing_fields_default_to_signed_out() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::signed_out());

        let session: Session = serde_json::from_str(r#"{"user":{}}"#).unwrap();
        assert_eq!(session, Session::signed_in(User::without_wallet()));
    }
}
