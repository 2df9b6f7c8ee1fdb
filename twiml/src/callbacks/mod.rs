//! Callback payloads sent back by the telephony API
//!
//! Every record keeps the vendor's wire field names through serde renames, so
//! a form body can be decoded straight into it. Missing fields decode to their
//! defaults; unknown fields are ignored.

pub mod addons;
pub mod recording;
pub mod voice;

pub use addons::{AddonResult, AddonsResults};
pub use recording::{RecordingStatusCallbackRequest, TranscribeCallbackRequest};
pub use voice::{DialActionRequest, RecordActionRequest, VoiceRequest};

use crate::types::Result;
use serde::de::DeserializeOwned;

/// Decoding of `application/x-www-form-urlencoded` callback payloads
pub trait CallbackRequest: DeserializeOwned {
    /// Short name of the callback, used in log messages
    const KIND: &'static str;

    /// Decode a form-encoded request body
    fn from_form(body: &[u8]) -> Result<Self> {
        log::debug!("Decoding {} callback ({} bytes)", Self::KIND, body.len());
        Ok(serde_urlencoded::from_bytes(body)?)
    }

    /// Decode a query string, with or without the leading `?`
    fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        log::debug!("Decoding {} callback from query string", Self::KIND);
        Ok(serde_urlencoded::from_str(query)?)
    }
}

impl CallbackRequest for VoiceRequest {
    const KIND: &'static str = "voice";
}

impl CallbackRequest for DialActionRequest {
    const KIND: &'static str = "dial-action";
}

impl CallbackRequest for RecordActionRequest {
    const KIND: &'static str = "record-action";
}

impl CallbackRequest for RecordingStatusCallbackRequest {
    const KIND: &'static str = "recording-status";
}

impl CallbackRequest for TranscribeCallbackRequest {
    const KIND: &'static str = "transcribe";
}
