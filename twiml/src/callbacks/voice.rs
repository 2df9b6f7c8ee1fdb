//! Voice webhook, `<Dial>` action and `<Record>` action payloads

use super::addons::{deserialize_addons, AddonsResults};
use serde::{Deserialize, Serialize};

/// Parameters sent with every voice webhook request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VoiceRequest {
    pub call_sid: String,
    pub account_sid: String,
    pub from: String,
    pub to: String,
    pub call_status: String,
    pub api_version: String,
    pub direction: String,
    pub forwarded_from: String,
    pub caller_name: String,
    pub from_city: String,
    pub from_state: String,
    pub from_zip: String,
    pub from_country: String,
    pub to_city: String,
    pub to_state: String,
    pub to_zip: String,
    pub to_country: String,
    pub recording_sid: String,
    // Left out when empty so an outer record's own field is the only one written
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recording_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recording_duration: String,
    pub transcription_text: String,
    pub transcription_sid: String,
    pub transcription_url: String,
    #[serde(deserialize_with = "deserialize_addons")]
    pub add_ons: AddonsResults,
    pub friendly_name: String,
}

impl VoiceRequest {
    pub fn is_inbound(&self) -> bool {
        self.direction == "inbound"
    }
}

/// Request made to the `action` URL when a `<Dial>` ends
///
/// Keys not listed here fill the embedded [`VoiceRequest`]. `RecordingUrl` is
/// claimed by this record, so `voice.recording_url` stays empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DialActionRequest {
    #[serde(flatten)]
    pub voice: VoiceRequest,
    pub dial_call_status: String,
    pub dial_call_sid: String,
    pub dial_call_duration: u32,
    pub recording_url: String,
    pub queue_sid: String,
    pub dequeue_result: String,
    pub dequeued_call_sid: String,
    pub dequeued_call_queue_time: u32,
    pub dequeued_call_duration: u32,
}

/// Request made to the `action` URL when a `<Record>` ends
///
/// `RecordingUrl` and `RecordingDuration` are claimed by this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RecordActionRequest {
    #[serde(flatten)]
    pub voice: VoiceRequest,
    pub recording_url: String,
    pub recording_duration: u32,
    pub digits: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::CallbackRequest;

    #[test]
    fn test_voice_request_wire_names() {
        let body = "CallSid=CA123&AccountSid=AC456&From=%2B15551234567&To=%2B15557654321\
                    &CallStatus=ringing&ApiVersion=2010-04-01&Direction=inbound\
                    &RecordingUrl=https%3A%2F%2Fapi.example.com%2Frec%2FRE1\
                    &TranscriptionUrl=https%3A%2F%2Fapi.example.com%2Ftr%2FTR1";
        let req = VoiceRequest::from_form(body.as_bytes()).unwrap();

        assert_eq!(req.call_sid, "CA123");
        assert_eq!(req.from, "+15551234567");
        assert_eq!(req.api_version, "2010-04-01");
        assert_eq!(req.recording_url, "https://api.example.com/rec/RE1");
        assert_eq!(req.transcription_url, "https://api.example.com/tr/TR1");
        assert!(req.is_inbound());
        assert_eq!(req.add_ons, AddonsResults::default());
    }

    #[test]
    fn test_voice_request_addons_field() {
        let addons = r#"{"status":"successful","message":null,"code":null,"results":{}}"#;
        let body = serde_urlencoded::to_string(&[("CallSid", "CA1"), ("AddOns", addons)]).unwrap();

        let req = VoiceRequest::from_form(body.as_bytes()).unwrap();
        assert!(req.add_ons.is_successful());

        let empty = VoiceRequest::from_query("?CallSid=CA1&AddOns=").unwrap();
        assert_eq!(empty.add_ons, AddonsResults::default());

        assert!(VoiceRequest::from_query("AddOns=%7Bbroken").is_err());
    }

    #[test]
    fn test_dial_action_embeds_voice_request() {
        let body = "CallSid=CA1&CallStatus=in-progress&DialCallStatus=busy\
                    &DialCallSid=CA2&DialCallDuration=42&RecordingUrl=https%3A%2F%2Fr";
        let req = DialActionRequest::from_form(body.as_bytes()).unwrap();

        assert_eq!(req.voice.call_sid, "CA1");
        assert_eq!(req.voice.call_status, "in-progress");
        assert_eq!(req.dial_call_status, "busy");
        assert_eq!(req.dial_call_duration, 42);
        assert_eq!(req.recording_url, "https://r");
        assert_eq!(req.voice.recording_url, "");
    }

    #[test]
    fn test_record_action_duration_is_numeric() {
        let req = RecordActionRequest::from_query("CallSid=CA1&RecordingDuration=17&Digits=%23")
            .unwrap();
        assert_eq!(req.recording_duration, 17);
        assert_eq!(req.digits, "#");
        assert_eq!(req.voice.call_sid, "CA1");

        assert!(RecordActionRequest::from_query("RecordingDuration=soon").is_err());
    }

    #[test]
    fn test_embedded_records_round_trip_through_json() {
        let dial = DialActionRequest::from_form(b"CallSid=CA1&DialCallStatus=busy&RecordingUrl=u")
            .unwrap();
        let json = serde_json::to_string(&dial).unwrap();
        assert_eq!(json.matches("\"RecordingUrl\"").count(), 1);
        let back: DialActionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dial);

        let record =
            RecordActionRequest::from_form(b"CallSid=CA1&RecordingUrl=u&RecordingDuration=3")
                .unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json.matches("\"RecordingDuration\"").count(), 1);
        let back: RecordActionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.recording_duration, 3);
    }
}
