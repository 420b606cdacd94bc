//! # Proof Payloads
//!
//! The World ID widget hands back a [`WidgetProof`] once the user completes
//! the challenge. The client combines it with the session's wallet address
//! into a [`ProofPayload`] and posts it to `/api/verify`.
//!
//! None of these fields are validated before sending; the server does not
//! validate them either.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Credential strength requested from the widget.
///
/// Unknown levels are carried through verbatim so that newer widget
/// releases do not break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VerificationLevel {
    Orb,
    #[default]
    Device,
    Other(String),
}

impl VerificationLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Orb => "orb",
            Self::Device => "device",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for VerificationLevel {
    fn from(s: &str) -> Self {
        match s {
            "orb" => Self::Orb,
            "device" => Self::Device,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VerificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VerificationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Result object delivered by the verification widget's success callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetProof {
    pub merkle_root: String,
    pub nullifier_hash: String,
    pub proof: String,
    pub verification_level: VerificationLevel,
}

/// Request body of `POST /api/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProofPayload {
    pub merkle_root: String,
    pub nullifier_hash: String,
    pub proof: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "device"))]
    pub verification_level: VerificationLevel,
    /// Wallet address of the submitting user; `null` when none is connected.
    pub address: Option<String>,
}

impl ProofPayload {
    /// Attach the submitting wallet address to a widget proof.
    pub fn from_widget(proof: WidgetProof, address: Option<String>) -> Self {
        Self {
            merkle_root: proof.merkle_root,
            nullifier_hash: proof.nullifier_hash,
            proof: proof.proof,
            verification_level: proof.verification_level,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_proof() -> WidgetProof {
        WidgetProof {
            merkle_root: "0x1f38".into(),
            nullifier_hash: "0x2a7c".into(),
            proof: "0xdeadbeef".into(),
            verification_level: VerificationLevel::Device,
        }
    }

    #[test]
    fn payload_serializes_null_address() {
        let payload = ProofPayload::from_widget(widget_proof(), None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "merkle_root": "0x1f38",
                "nullifier_hash": "0x2a7c",
                "proof": "0xdeadbeef",
                "verification_level": "device",
                "address": null
            })
        );
    }

    #[test]
    fn payload_carries_wallet_address() {
        let payload = ProofPayload::from_widget(widget_proof(), Some("0xabc".into()));
        assert_eq!(payload.address.as_deref(), Some("0xabc"));
        assert_eq!(payload.merkle_root, "0x1f38");
    }

    #[test]
    fn unknown_verification_level_is_preserved() {
        let level: VerificationLevel = serde_json::from_str(r#""secure_document""#).unwrap();
        assert_eq!(level, VerificationLevel::Other("secure_document".into()));
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""secure_document""#);
    }

    #[test]
    fn known_levels_parse() {
        assert_eq!(VerificationLevel::from("orb"), VerificationLevel::Orb);
        assert_eq!(VerificationLevel::from("device"), VerificationLevel::Device);
        assert_eq!(VerificationLevel::default().to_string(), "device");
    }
}
