//! `<Dial>` and the nouns it connects the caller to
//!
//! `<Dial>` either carries a phone number as text or nests one or more of
//! `<Number>`, `<Client>`, `<Conference>`, `<Queue>` and `<Sip>`. Nested nouns
//! go through the same whitelist-then-validate check as the children of a
//! response.

use super::rules::{
    check_events, check_keys, check_method, check_one_of, require_text, CALL_PROGRESS_EVENTS,
    TRIM_VALUES,
};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::{validate_children, Element, Markup};
use crate::types::{MarkupError, ValidationError};
use serde::{Deserialize, Serialize};

/// Nouns allowed inside `<Dial>`
pub const DIAL_CHILDREN: &[&str] = &["Number", "Client", "Conference", "Queue", "Sip"];

const DIAL_RECORD_MODES: &[&str] = &[
    "do-not-record",
    "record-from-answer",
    "record-from-ringing",
    "record-from-answer-dual",
    "record-from-ringing-dual",
];

const CONFERENCE_RECORD_MODES: &[&str] = &["do-not-record", "record-from-start"];

const CONFERENCE_BEEP_VALUES: &[&str] = &["true", "false", "onEnter", "onExit"];

const CONFERENCE_EVENTS: &[&str] = &[
    "start",
    "end",
    "join",
    "leave",
    "mute",
    "hold",
    "modify",
    "speaker",
    "announcement",
];

const SEND_DIGITS: &str = "0123456789#*w";

/// Connects the current caller to another party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dial {
    /// Phone number to dial when no nouns are nested
    pub number: String,
    pub children: Vec<Markup>,
    pub action: Option<String>,
    pub method: Option<String>,
    pub timeout: Option<u32>,
    pub hangup_on_star: Option<bool>,
    pub time_limit: Option<u32>,
    pub caller_id: Option<String>,
    pub record: Option<String>,
    pub answer_on_bridge: Option<bool>,
    pub ring_tone: Option<String>,
}

impl Dial {
    /// Dial a single phone number
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    /// Dial one or more nested nouns
    pub fn with_children(children: Vec<Markup>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Append nouns, preserving order
    pub fn add<I, M>(&mut self, nouns: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.children.extend(nouns.into_iter().map(Into::into));
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_caller_id(mut self, caller_id: impl Into<String>) -> Self {
        self.caller_id = Some(caller_id.into());
        self
    }
}

impl Element for Dial {
    fn type_name(&self) -> &'static str {
        "Dial"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        let has_number = !self.number.trim().is_empty();
        if !has_number && self.children.is_empty() {
            errors.push(MarkupError::missing("Dial", "number or nested noun"));
        } else if has_number && !self.children.is_empty() {
            errors.push(MarkupError::invalid(
                "Dial",
                "number",
                &self.number,
                "either a number or nested nouns, not both",
            ));
        }

        check_method("Dial", "method", &self.method, &mut errors);
        check_one_of(
            "Dial",
            "record",
            &self.record,
            DIAL_RECORD_MODES,
            "a Dial recording mode",
            &mut errors,
        );
        errors.extend(validate_children("Dial", DIAL_CHILDREN, &self.children));

        ValidationError::check(errors)
    }
}

impl Render for Dial {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
            .value("timeout", &self.timeout)
            .value("hangupOnStar", &self.hangup_on_star)
            .value("timeLimit", &self.time_limit)
            .text("callerId", &self.caller_id)
            .text("record", &self.record)
            .value("answerOnBridge", &self.answer_on_bridge)
            .text("ringTone", &self.ring_tone)
    }

    fn body(&self) -> Body<'_> {
        if self.children.is_empty() {
            Body::Text(&self.number)
        } else {
            Body::Children(&self.children)
        }
    }
}

/// A phone number inside `<Dial>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Number {
    pub number: String,
    pub send_digits: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub status_callback_event: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
}

impl Number {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }
}

impl Element for Number {
    fn type_name(&self) -> &'static str {
        "Number"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Number", "number", &self.number, &mut errors);
        check_keys(
            "Number",
            "sendDigits",
            &self.send_digits,
            SEND_DIGITS,
            "digits, #, * or w",
            &mut errors,
        );
        check_method("Number", "method", &self.method, &mut errors);
        check_status_callback(
            "Number",
            &self.status_callback_event,
            &self.status_callback_method,
            CALL_PROGRESS_EVENTS,
            &mut errors,
        );
        ValidationError::check(errors)
    }
}

impl Render for Number {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("sendDigits", &self.send_digits)
            .text("url", &self.url)
            .text("method", &self.method)
            .text("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.number)
    }
}

/// A client identity inside `<Dial>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub identity: String,
    pub url: Option<String>,
    pub method: Option<String>,
    pub status_callback_event: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
}

impl Client {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            ..Self::default()
        }
    }
}

impl Element for Client {
    fn type_name(&self) -> &'static str {
        "Client"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Client", "identity", &self.identity, &mut errors);
        check_method("Client", "method", &self.method, &mut errors);
        check_status_callback(
            "Client",
            &self.status_callback_event,
            &self.status_callback_method,
            CALL_PROGRESS_EVENTS,
            &mut errors,
        );
        ValidationError::check(errors)
    }
}

impl Render for Client {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("url", &self.url)
            .text("method", &self.method)
            .text("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.identity)
    }
}

/// A named conference room inside `<Dial>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conference {
    pub name: String,
    pub muted: Option<bool>,
    pub beep: Option<String>,
    pub start_conference_on_enter: Option<bool>,
    pub end_conference_on_exit: Option<bool>,
    pub wait_url: Option<String>,
    pub wait_method: Option<String>,
    pub max_participants: Option<u32>,
    pub record: Option<String>,
    pub trim: Option<String>,
    pub status_callback_event: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
}

impl Conference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Element for Conference {
    fn type_name(&self) -> &'static str {
        "Conference"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Conference", "name", &self.name, &mut errors);
        check_one_of(
            "Conference",
            "beep",
            &self.beep,
            CONFERENCE_BEEP_VALUES,
            "true, false, onEnter or onExit",
            &mut errors,
        );
        check_method("Conference", "waitMethod", &self.wait_method, &mut errors);
        if let Some(max) = self.max_participants {
            if !(2..=250).contains(&max) {
                errors.push(MarkupError::invalid(
                    "Conference",
                    "maxParticipants",
                    max.to_string(),
                    "a value between 2 and 250",
                ));
            }
        }
        check_one_of(
            "Conference",
            "record",
            &self.record,
            CONFERENCE_RECORD_MODES,
            "do-not-record or record-from-start",
            &mut errors,
        );
        check_one_of(
            "Conference",
            "trim",
            &self.trim,
            TRIM_VALUES,
            "trim-silence or do-not-trim",
            &mut errors,
        );
        check_status_callback(
            "Conference",
            &self.status_callback_event,
            &self.status_callback_method,
            CONFERENCE_EVENTS,
            &mut errors,
        );
        ValidationError::check(errors)
    }
}

impl Render for Conference {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .value("muted", &self.muted)
            .text("beep", &self.beep)
            .value("startConferenceOnEnter", &self.start_conference_on_enter)
            .value("endConferenceOnExit", &self.end_conference_on_exit)
            .text("waitUrl", &self.wait_url)
            .text("waitMethod", &self.wait_method)
            .value("maxParticipants", &self.max_participants)
            .text("record", &self.record)
            .text("trim", &self.trim)
            .text("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.name)
    }
}

/// A call queue inside `<Dial>`; dequeues the first waiting caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    pub name: String,
    pub url: Option<String>,
    pub method: Option<String>,
}

impl Queue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Element for Queue {
    fn type_name(&self) -> &'static str {
        "Queue"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Queue", "name", &self.name, &mut errors);
        check_method("Queue", "method", &self.method, &mut errors);
        ValidationError::check(errors)
    }
}

impl Render for Queue {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("url", &self.url)
            .text("method", &self.method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.name)
    }
}

/// A SIP endpoint inside `<Dial>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sip {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub status_callback_event: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
}

impl Sip {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

impl Element for Sip {
    fn type_name(&self) -> &'static str {
        "Sip"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        let uri = self.uri.trim();
        if uri.is_empty() {
            errors.push(MarkupError::missing("Sip", "uri"));
        } else if !uri.get(..4).is_some_and(|s| s.eq_ignore_ascii_case("sip:")) {
            errors.push(MarkupError::invalid("Sip", "uri", uri, "a sip: URI"));
        }
        check_method("Sip", "method", &self.method, &mut errors);
        check_status_callback(
            "Sip",
            &self.status_callback_event,
            &self.status_callback_method,
            CALL_PROGRESS_EVENTS,
            &mut errors,
        );
        ValidationError::check(errors)
    }
}

impl Render for Sip {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("username", &self.username)
            .text("password", &self.password)
            .text("url", &self.url)
            .text("method", &self.method)
            .text("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.uri)
    }
}

fn check_status_callback(
    element: &'static str,
    events: &Option<String>,
    method: &Option<String>,
    allowed_events: &[&str],
    errors: &mut Vec<MarkupError>,
) {
    check_events(
        element,
        "statusCallbackEvent",
        events,
        allowed_events,
        "a space-separated list of status events",
        errors,
    );
    check_method(element, "statusCallbackMethod", method, errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::Say;

    #[test]
    fn test_dial_number_or_nouns() {
        assert!(Dial::new("+15551234567").validate().is_ok());
        assert!(Dial::with_children(vec![Client::new("alice").into()])
            .validate()
            .is_ok());

        let err = Dial::default().validate().unwrap_err();
        assert_eq!(
            err.errors(),
            &[MarkupError::missing("Dial", "number or nested noun")]
        );

        let mut both = Dial::new("+15551234567");
        both.add([Number::new("+15557654321")]);
        assert!(both.validate().is_err());
    }

    #[test]
    fn test_dial_rejects_verbs_as_children() {
        let dial = Dial::with_children(vec![
            Number::new("").into(),
            Say::new("not allowed here").into(),
        ]);

        let err = dial.validate().unwrap_err();
        // The unknown child stops the check; the empty Number is not reported
        assert_eq!(
            err.errors(),
            &[MarkupError::UnknownChild {
                parent: "Dial",
                child: "Say",
            }]
        );
    }

    #[test]
    fn test_dial_reports_each_invalid_noun() {
        let mut dial = Dial::with_children(Vec::new()).with_action("/dial-status");
        dial.add([Number::new(""), Number::new("+15551234567"), Number::new("")]);

        let err = dial.validate().unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_conference_limits() {
        assert!(Conference::new("standup").validate().is_ok());

        let conference = Conference {
            max_participants: Some(1),
            beep: Some("sometimes".to_string()),
            status_callback_event: Some("start join explode".to_string()),
            ..Conference::new("standup")
        };
        assert_eq!(conference.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn test_sip_uri() {
        assert!(Sip::new("sip:alice@example.com").validate().is_ok());
        assert!(Sip::new("SIP:alice@example.com").validate().is_ok());
        assert!(Sip::new("alice@example.com").validate().is_err());
        assert!(Sip::new("").validate().is_err());
    }

    #[test]
    fn test_number_send_digits() {
        let number = Number {
            send_digits: Some("ww1234#".to_string()),
            ..Number::new("+15551234567")
        };
        assert!(number.validate().is_ok());

        let number = Number {
            send_digits: Some("call me".to_string()),
            ..Number::new("+15551234567")
        };
        assert!(number.validate().is_err());
    }
}
