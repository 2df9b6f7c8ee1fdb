//! Media stream verbs: `<Start>`, `<Stop>` and `<Connect>`, with the
//! `<Stream>`, `<Siprec>`, `<Room>` and `<Parameter>` nouns they nest

use super::rules::{check_method, check_one_of, require_text};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::{validate_children, Element, Markup};
use crate::types::{MarkupError, ValidationError};
use serde::{Deserialize, Serialize};

/// Nouns allowed inside `<Start>` and `<Stop>`
pub const START_CHILDREN: &[&str] = &["Stream", "Siprec"];

/// Nouns allowed inside `<Connect>`
pub const CONNECT_CHILDREN: &[&str] = &["Stream", "Room"];

/// Nouns allowed inside `<Stream>` and `<Siprec>`
pub const STREAM_CHILDREN: &[&str] = &["Parameter"];

const TRACKS: &[&str] = &["inbound_track", "outbound_track", "both_tracks"];

fn require_children(element: &'static str, children: &[Markup], errors: &mut Vec<MarkupError>) {
    if children.is_empty() {
        errors.push(MarkupError::missing(element, "nested noun"));
    }
}

/// Starts an asynchronous media stream or SIPREC session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Start {
    pub children: Vec<Markup>,
    pub action: Option<String>,
    pub method: Option<String>,
}

impl Start {
    pub fn new(noun: impl Into<Markup>) -> Self {
        Self {
            children: vec![noun.into()],
            ..Self::default()
        }
    }
}

impl Element for Start {
    fn type_name(&self) -> &'static str {
        "Start"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_children("Start", &self.children, &mut errors);
        check_method("Start", "method", &self.method, &mut errors);
        errors.extend(validate_children("Start", START_CHILDREN, &self.children));
        ValidationError::check(errors)
    }
}

impl Render for Start {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.children)
    }
}

/// Stops a stream or SIPREC session started earlier, matched by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stop {
    pub children: Vec<Markup>,
}

impl Stop {
    pub fn new(noun: impl Into<Markup>) -> Self {
        Self {
            children: vec![noun.into()],
        }
    }
}

impl Element for Stop {
    fn type_name(&self) -> &'static str {
        "Stop"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_children("Stop", &self.children, &mut errors);
        errors.extend(validate_children("Stop", START_CHILDREN, &self.children));
        ValidationError::check(errors)
    }
}

impl Render for Stop {
    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.children)
    }
}

/// Connects the call to a bidirectional stream or a video room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connect {
    pub children: Vec<Markup>,
    pub action: Option<String>,
    pub method: Option<String>,
}

impl Connect {
    pub fn new(noun: impl Into<Markup>) -> Self {
        Self {
            children: vec![noun.into()],
            ..Self::default()
        }
    }
}

impl Element for Connect {
    fn type_name(&self) -> &'static str {
        "Connect"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_children("Connect", &self.children, &mut errors);
        check_method("Connect", "method", &self.method, &mut errors);
        errors.extend(validate_children("Connect", CONNECT_CHILDREN, &self.children));
        ValidationError::check(errors)
    }
}

impl Render for Connect {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.children)
    }
}

/// A media stream to a websocket URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub name: Option<String>,
    pub url: Option<String>,
    pub track: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
    pub parameters: Vec<Markup>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Reference a named stream, as `<Stop>` does
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value).into());
        self
    }
}

impl Element for Stream {
    fn type_name(&self) -> &'static str {
        "Stream"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if is_blank(&self.url) && is_blank(&self.name) {
            errors.push(MarkupError::missing("Stream", "url or name"));
        }
        check_one_of(
            "Stream",
            "track",
            &self.track,
            TRACKS,
            "inbound_track, outbound_track or both_tracks",
            &mut errors,
        );
        check_method(
            "Stream",
            "statusCallbackMethod",
            &self.status_callback_method,
            &mut errors,
        );
        errors.extend(validate_children("Stream", STREAM_CHILDREN, &self.parameters));
        ValidationError::check(errors)
    }
}

impl Render for Stream {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("name", &self.name)
            .text("url", &self.url)
            .text("track", &self.track)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.parameters)
    }
}

/// A SIPREC session to a configured connector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Siprec {
    pub name: Option<String>,
    pub connector_name: Option<String>,
    pub track: Option<String>,
    pub parameters: Vec<Markup>,
}

impl Siprec {
    pub fn new(connector_name: impl Into<String>) -> Self {
        Self {
            connector_name: Some(connector_name.into()),
            ..Self::default()
        }
    }
}

impl Element for Siprec {
    fn type_name(&self) -> &'static str {
        "Siprec"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if is_blank(&self.connector_name) && is_blank(&self.name) {
            errors.push(MarkupError::missing("Siprec", "connectorName or name"));
        }
        check_one_of(
            "Siprec",
            "track",
            &self.track,
            TRACKS,
            "inbound_track, outbound_track or both_tracks",
            &mut errors,
        );
        errors.extend(validate_children("Siprec", STREAM_CHILDREN, &self.parameters));
        ValidationError::check(errors)
    }
}

impl Render for Siprec {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("name", &self.name)
            .text("connectorName", &self.connector_name)
            .text("track", &self.track)
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.parameters)
    }
}

/// A video room inside `<Connect>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    pub name: String,
    pub participant_identity: Option<String>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            participant_identity: None,
        }
    }
}

impl Element for Room {
    fn type_name(&self) -> &'static str {
        "Room"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Room", "name", &self.name, &mut errors);
        ValidationError::check(errors)
    }
}

impl Render for Room {
    fn attributes(&self) -> Attributes {
        Attributes::new().text("participantIdentity", &self.participant_identity)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.name)
    }
}

/// A custom key/value pair passed along with a stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl Element for Parameter {
    fn type_name(&self) -> &'static str {
        "Parameter"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Parameter", "name", &self.name, &mut errors);
        ValidationError::check(errors)
    }
}

impl Render for Parameter {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .required("name", &self.name)
            .text("value", &self.value)
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::Number;

    #[test]
    fn test_start_stream() {
        let start = Start::new(
            Stream::to_url("wss://example.com/audio")
                .with_parameter("caller", "alice")
                .with_parameter("campaign", "spring"),
        );
        assert!(start.validate().is_ok());
    }

    #[test]
    fn test_containers_need_a_noun() {
        let err = Start::default().validate().unwrap_err();
        assert_eq!(
            err.errors(),
            &[MarkupError::missing("Start", "nested noun")]
        );
        assert!(Stop::default().validate().is_err());
        assert!(Connect::default().validate().is_err());
    }

    #[test]
    fn test_connect_allows_room_but_start_does_not() {
        assert!(Connect::new(Room::new("DailyStandup")).validate().is_ok());

        let err = Start::new(Room::new("DailyStandup")).validate().unwrap_err();
        assert_eq!(
            err.errors(),
            &[MarkupError::UnknownChild {
                parent: "Start",
                child: "Room",
            }]
        );
    }

    #[test]
    fn test_stream_checks() {
        assert!(Stop::new(Stream::named("recorder")).validate().is_ok());
        assert!(Stream::new().validate().is_err());

        let stream = Stream {
            track: Some("sideways".to_string()),
            parameters: vec![Number::new("+15551234567").into()],
            ..Stream::to_url("wss://example.com/audio")
        };
        let err = stream.validate().unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.errors().contains(&MarkupError::UnknownChild {
            parent: "Stream",
            child: "Number",
        }));
    }

    #[test]
    fn test_siprec_needs_connector() {
        assert!(Siprec::new("SipRecConnector").validate().is_ok());
        assert!(Siprec::default().validate().is_err());
    }
}
