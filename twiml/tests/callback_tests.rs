// Integration tests for decoding callback payloads
use twiml::{
    AddonsResults, CallbackRequest, DialActionRequest, RecordActionRequest,
    RecordingStatusCallbackRequest, TranscribeCallbackRequest, TwimlError, VoiceRequest,
};

fn form(pairs: &[(&str, &str)]) -> Vec<u8> {
    serde_urlencoded::to_string(pairs).unwrap().into_bytes()
}

const ADDONS: &str = r#"{
    "status": "successful",
    "message": null,
    "code": null,
    "results": {
        "whitepages_pro_caller_id": {
            "request_sid": "XR1",
            "status": "successful",
            "message": null,
            "code": null,
            "result": {"caller_name": "Jane Doe", "line_type": "Mobile"}
        }
    }
}"#;

#[test]
fn test_voice_request_full_payload() {
    let body = form(&[
        ("CallSid", "CA0001"),
        ("AccountSid", "AC0001"),
        ("From", "+15551234567"),
        ("To", "+15557654321"),
        ("CallStatus", "in-progress"),
        ("ApiVersion", "2010-04-01"),
        ("Direction", "outbound-api"),
        ("CallerName", "JANE DOE"),
        ("FromCity", "SAN FRANCISCO"),
        ("FromCountry", "US"),
        ("ToZip", "94105"),
        ("FriendlyName", "support"),
        ("AddOns", ADDONS),
    ]);

    let req = VoiceRequest::from_form(&body).unwrap();
    assert_eq!(req.call_sid, "CA0001");
    assert_eq!(req.call_status, "in-progress");
    assert_eq!(req.caller_name, "JANE DOE");
    assert_eq!(req.from_city, "SAN FRANCISCO");
    assert_eq!(req.to_zip, "94105");
    assert_eq!(req.friendly_name, "support");
    assert!(!req.is_inbound());

    let caller = req.add_ons.result("whitepages_pro_caller_id").unwrap();
    assert_eq!(caller.request_sid, "XR1");
    assert_eq!(caller.result["line_type"], "Mobile");
}

#[test]
fn test_missing_fields_default() {
    let req = VoiceRequest::from_form(b"").unwrap();
    assert_eq!(req, VoiceRequest::default());

    let req = DialActionRequest::from_form(b"DialCallStatus=no-answer").unwrap();
    assert_eq!(req.dial_call_duration, 0);
    assert_eq!(req.voice, VoiceRequest::default());
}

#[test]
fn test_dial_action_with_queue_fields() {
    let body = form(&[
        ("CallSid", "CA1"),
        ("QueueSid", "QU1"),
        ("DequeueResult", "bridged"),
        ("DequeuedCallSid", "CA9"),
        ("DequeuedCallQueueTime", "12"),
        ("DequeuedCallDuration", "300"),
    ]);

    let req = DialActionRequest::from_form(&body).unwrap();
    assert_eq!(req.voice.call_sid, "CA1");
    assert_eq!(req.queue_sid, "QU1");
    assert_eq!(req.dequeue_result, "bridged");
    assert_eq!(req.dequeued_call_queue_time, 12);
    assert_eq!(req.dequeued_call_duration, 300);
}

#[test]
fn test_record_action_claims_recording_fields() {
    let body = form(&[
        ("CallSid", "CA1"),
        ("RecordingUrl", "https://api.example.com/RE1"),
        ("RecordingDuration", "9"),
        ("Digits", "hangup"),
    ]);

    let req = RecordActionRequest::from_form(&body).unwrap();
    assert_eq!(req.recording_url, "https://api.example.com/RE1");
    assert_eq!(req.recording_duration, 9);
    assert_eq!(req.digits, "hangup");
    assert_eq!(req.voice.recording_url, "");
    assert_eq!(req.voice.recording_duration, "");
}

#[test]
fn test_recording_status_from_query() {
    let req = RecordingStatusCallbackRequest::from_query(
        "?RecordingSid=RE1&RecordingStatus=absent&RecordingDuration=0&RecordingChannels=1",
    )
    .unwrap();
    assert!(!req.is_completed());
    assert_eq!(req.recording_channels, 1);
}

#[test]
fn test_transcription_payload() {
    let body = form(&[
        ("TranscriptionSid", "TR1"),
        ("TranscriptionText", "Hi, it's me"),
        ("TranscriptionStatus", "completed"),
        ("TranscriptionUrl", "https://api.example.com/TR1"),
        ("RecordingUrl", "https://api.example.com/RE1"),
        ("ForwardedFrom", "+15550000000"),
    ]);

    let req = TranscribeCallbackRequest::from_form(&body).unwrap();
    assert_eq!(req.transcription_text, "Hi, it's me");
    assert_eq!(req.transcription_url, "https://api.example.com/TR1");
    assert_eq!(req.forwarded_from, "+15550000000");
}

#[test]
fn test_malformed_payloads() {
    let err = DialActionRequest::from_form(b"DialCallDuration=forever").unwrap_err();
    assert!(matches!(err, TwimlError::Form(_)));

    let err = VoiceRequest::from_form(&form(&[("AddOns", "{")])).unwrap_err();
    assert!(matches!(err, TwimlError::Form(_)));
}

#[test]
fn test_records_serialize_with_wire_names() {
    let req = VoiceRequest {
        call_sid: "CA1".to_string(),
        recording_url: "https://r".to_string(),
        add_ons: AddonsResults::from_json(ADDONS).unwrap(),
        ..VoiceRequest::default()
    };

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["CallSid"], "CA1");
    assert_eq!(json["RecordingUrl"], "https://r");
    assert_eq!(json["AddOns"]["status"], "successful");

    // Structured AddOns are accepted when reading JSON back
    let back: VoiceRequest = serde_json::from_value(json).unwrap();
    assert_eq!(back, req);
}
