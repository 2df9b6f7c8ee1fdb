//! Recording status and transcription callbacks

use serde::{Deserialize, Serialize};

/// Request made to `recordingStatusCallback`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RecordingStatusCallbackRequest {
    pub account_sid: String,
    pub call_sid: String,
    pub recording_sid: String,
    pub recording_url: String,
    pub recording_status: String,
    pub recording_duration: u32,
    pub recording_channels: u32,
    pub recording_source: String,
}

impl RecordingStatusCallbackRequest {
    pub fn is_completed(&self) -> bool {
        self.recording_status == "completed"
    }
}

/// Request made to `transcribeCallback`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TranscribeCallbackRequest {
    pub transcription_sid: String,
    pub transcription_text: String,
    pub transcription_status: String,
    pub transcription_url: String,
    pub recording_sid: String,
    pub recording_url: String,
    pub call_sid: String,
    pub account_sid: String,
    pub from: String,
    pub to: String,
    pub call_status: String,
    pub api_version: String,
    pub direction: String,
    pub forwarded_from: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::CallbackRequest;

    #[test]
    fn test_recording_status() {
        let body = "AccountSid=AC1&CallSid=CA1&RecordingSid=RE1&RecordingStatus=completed\
                    &RecordingDuration=35&RecordingChannels=2&RecordingSource=DialVerb";
        let req = RecordingStatusCallbackRequest::from_form(body.as_bytes()).unwrap();

        assert!(req.is_completed());
        assert_eq!(req.recording_duration, 35);
        assert_eq!(req.recording_channels, 2);
        assert_eq!(req.recording_source, "DialVerb");
        assert_eq!(req.recording_url, "");
    }

    #[test]
    fn test_transcription() {
        let body = "TranscriptionSid=TR1&TranscriptionText=call+me+back\
                    &TranscriptionStatus=completed&RecordingSid=RE1&Unrelated=x";
        let req = TranscribeCallbackRequest::from_form(body.as_bytes()).unwrap();

        assert_eq!(req.transcription_text, "call me back");
        assert_eq!(req.transcription_status, "completed");
        assert_eq!(req.recording_sid, "RE1");
    }
}
