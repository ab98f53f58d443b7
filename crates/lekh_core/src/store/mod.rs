//! Persisted entity stores and their shared plumbing.
//!
//! # Responsibility
//! - Own the in-memory collections mirrored to the bridge on every
//!   mutation.
//! - Wrap persisted payloads in a versioned envelope so future shape
//!   changes can be migrated instead of silently discarded.
//!
//! # Invariants
//! - Mutation discipline is always: mutate in memory, persist the full
//!   collection, then notify subscribers.
//! - A malformed persisted payload degrades to the store's empty default;
//!   it never aborts store construction.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::bridge::BridgeError;

pub mod notes;
pub mod todos;
pub mod watch;

/// Version stamped on every persisted payload.
pub const PAYLOAD_VERSION: u32 = 1;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for persistence and serialization failures.
#[derive(Debug)]
pub enum StoreError {
    Bridge(BridgeError),
    Codec(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bridge(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "payload serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bridge(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<BridgeError> for StoreError {
    fn from(value: BridgeError) -> Self {
        Self::Bridge(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Decode-side failure for persisted payloads.
///
/// Consumers treat every variant the same way: log it and fall back to the
/// store's empty default. The distinction exists only for diagnostics.
#[derive(Debug)]
pub enum PayloadError {
    Parse(serde_json::Error),
    UnsupportedVersion(u32),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::UnsupportedVersion(version) => {
                write!(
                    f,
                    "payload version {version} is newer than supported {PAYLOAD_VERSION}"
                )
            }
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::UnsupportedVersion(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Serializes `data` inside the current payload envelope.
pub(crate) fn encode_payload<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Envelope {
        version: PAYLOAD_VERSION,
        data,
    })
}

/// Decodes a persisted payload, rejecting envelopes from a newer binary.
pub(crate) fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, PayloadError> {
    let envelope: Envelope<T> = serde_json::from_str(raw).map_err(PayloadError::Parse)?;
    if envelope.version > PAYLOAD_VERSION {
        return Err(PayloadError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope.data)
}
