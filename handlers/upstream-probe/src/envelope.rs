//! Response envelope shapes.
//!
//! Exactly one of the two shapes is produced per invocation, and the HTTP
//! status always matches the `ok` discriminator: 200 for success, 500 for
//! failure. The discriminator is emitted from the variant itself rather
//! than stored, so a success envelope carrying `ok: false` cannot be built.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Fixed literal identifying this implementation in the success envelope.
pub const RUNTIME: &str = "rust";

/// The top-level JSON object returned to the caller.
#[derive(Debug, Clone)]
pub enum Envelope {
    Success { upstream: Value },
    Failure { error: String },
}

impl Envelope {
    /// Success envelope embedding the upstream payload verbatim.
    pub fn success(upstream: Value) -> Self {
        Self::Success { upstream }
    }

    /// Failure envelope carrying the human-readable failure message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// HTTP status code matching this envelope's outcome.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Failure { .. } => 500,
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { upstream } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("runtime", RUNTIME)?;
                map.serialize_entry("upstream", upstream)?;
                map.end()
            }
            Self::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
