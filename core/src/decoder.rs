//! Decode stage: raw bytes to a typed value, all or nothing.

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};

/// Turns a response body into a value of the caller's type.
///
/// Implementations are pure: no I/O, no state carried between calls.
pub trait Decoder: Send + Sync {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// JSON decoding through `serde_json`.
///
/// Fields the target type does not name are ignored. `Option` fields may be
/// missing or `null`; every other field must be present with a compatible
/// type.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        decode_json(bytes)
    }
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value = serde_json::from_slice(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    debug!("decoded {} bytes into {}", bytes.len(), std::any::type_name::<T>());
    Ok(value)
}
