//! # Verification Envelope and Identifiers
//!
//! `/api/verify` answers with a [`VerificationResult`]. On success it
//! carries a freshly minted [`VerificationId`]:
//!
//! ```text
//! wld_<base36 unix millis>_<7 base36 chars>
//! ```
//!
//! The timestamp alone does not make ids unique (two requests in the same
//! millisecond share it); uniqueness rests on the random suffix.
//!
//! Issuing an id does not mean any proof was checked. The endpoint that
//! mints these is a stub.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const PREFIX: &str = "wld_";
const SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

fn is_base36(s: &str) -> bool {
    s.bytes().all(|b| BASE36.contains(&b))
}

/// Opaque identifier minted for a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VerificationId(String);

impl VerificationId {
    /// Mint an identifier stamped with the current time.
    pub fn issue() -> Self {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        Self::issue_at(now, &mut rand::thread_rng())
    }

    /// Mint an identifier for the given unix timestamp in milliseconds.
    pub fn issue_at<R: Rng>(timestamp_ms: u64, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{PREFIX}{}_{suffix}", to_base36(timestamp_ms)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unix milliseconds encoded in the identifier.
    pub fn timestamp_ms(&self) -> u64 {
        self.0[PREFIX.len()..]
            .split('_')
            .next()
            .and_then(|ts| u64::from_str_radix(ts, 36).ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VerificationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ValidationError::InvalidVerificationId {
            value: s.to_string(),
            reason,
        };
        let rest = s.strip_prefix(PREFIX).ok_or_else(|| invalid("missing wld_ prefix"))?;
        let (timestamp, suffix) = rest
            .split_once('_')
            .ok_or_else(|| invalid("missing suffix separator"))?;
        if timestamp.is_empty() || !is_base36(timestamp) {
            return Err(invalid("timestamp is not base36"));
        }
        if u64::from_str_radix(timestamp, 36).is_err() {
            return Err(invalid("timestamp out of range"));
        }
        if suffix.len() != SUFFIX_LEN || !is_base36(suffix) {
            return Err(invalid("suffix must be 7 base36 characters"));
        }
        Ok(Self(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for VerificationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Response envelope of `/api/verify`.
///
/// Every field is optional on the wire: clients must tolerate servers that
/// omit `id` on success or `error` on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    pub fn success(id: &VerificationId) -> Self {
        Self {
            success: true,
            id: Some(id.to_string()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error.into()),
        }
    }
}
