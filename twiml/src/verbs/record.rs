//! `<Record>` verb

use super::rules::{check_events, check_keys, check_method, check_one_of, DTMF_KEYS, TRIM_VALUES};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::Element;
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

const RECORDING_STATUS_EVENTS: &[&str] = &["in-progress", "completed", "absent"];

/// Records the caller's voice
///
/// The recording URL is delivered to `action` as a
/// [`RecordActionRequest`](crate::callbacks::RecordActionRequest); recording
/// and transcription status callbacks arrive as
/// [`RecordingStatusCallbackRequest`](crate::callbacks::RecordingStatusCallbackRequest)
/// and [`TranscribeCallbackRequest`](crate::callbacks::TranscribeCallbackRequest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub action: Option<String>,
    pub method: Option<String>,
    pub timeout: Option<u32>,
    pub finish_on_key: Option<String>,
    pub max_length: Option<u32>,
    pub play_beep: Option<bool>,
    pub trim: Option<String>,
    pub transcribe: Option<bool>,
    pub transcribe_callback: Option<String>,
    pub recording_status_callback: Option<String>,
    pub recording_status_callback_method: Option<String>,
    pub recording_status_callback_event: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_max_length(mut self, seconds: u32) -> Self {
        self.max_length = Some(seconds);
        self
    }

    pub fn with_transcription(mut self, callback: impl Into<String>) -> Self {
        self.transcribe = Some(true);
        self.transcribe_callback = Some(callback.into());
        self
    }
}

impl Element for Record {
    fn type_name(&self) -> &'static str {
        "Record"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_method("Record", "method", &self.method, &mut errors);
        check_method(
            "Record",
            "recordingStatusCallbackMethod",
            &self.recording_status_callback_method,
            &mut errors,
        );
        check_keys(
            "Record",
            "finishOnKey",
            &self.finish_on_key,
            DTMF_KEYS,
            "digits, # or *",
            &mut errors,
        );
        check_one_of(
            "Record",
            "trim",
            &self.trim,
            TRIM_VALUES,
            "trim-silence or do-not-trim",
            &mut errors,
        );
        check_events(
            "Record",
            "recordingStatusCallbackEvent",
            &self.recording_status_callback_event,
            RECORDING_STATUS_EVENTS,
            "in-progress, completed or absent",
            &mut errors,
        );

        ValidationError::check(errors)
    }
}

impl Render for Record {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
            .value("timeout", &self.timeout)
            .text("finishOnKey", &self.finish_on_key)
            .value("maxLength", &self.max_length)
            .value("playBeep", &self.play_beep)
            .text("trim", &self.trim)
            .value("transcribe", &self.transcribe)
            .text("transcribeCallback", &self.transcribe_callback)
            .text("recordingStatusCallback", &self.recording_status_callback)
            .text(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .text(
                "recordingStatusCallbackEvent",
                &self.recording_status_callback_event,
            )
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}
