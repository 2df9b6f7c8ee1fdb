//! Call flow verbs: `<Redirect>`, `<Reject>`, `<Hangup>`, `<Leave>` and `<Enqueue>`

use super::rules::{check_method, check_one_of, require_text};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::Element;
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

const REJECT_REASONS: &[&str] = &["rejected", "busy"];

/// Transfers control of the call to the TwiML at another URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redirect {
    pub url: String,
    pub method: Option<String>,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
        }
    }
}

impl Element for Redirect {
    fn type_name(&self) -> &'static str {
        "Redirect"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Redirect", "url", &self.url, &mut errors);
        check_method("Redirect", "method", &self.method, &mut errors);
        ValidationError::check(errors)
    }
}

impl Render for Redirect {
    fn attributes(&self) -> Attributes {
        Attributes::new().text("method", &self.method)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.url)
    }
}

/// Rejects an incoming call without billing it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reject {
    pub reason: Option<String>,
}

impl Reject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy() -> Self {
        Self {
            reason: Some("busy".to_string()),
        }
    }
}

impl Element for Reject {
    fn type_name(&self) -> &'static str {
        "Reject"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        check_one_of(
            "Reject",
            "reason",
            &self.reason,
            REJECT_REASONS,
            "rejected or busy",
            &mut errors,
        );
        ValidationError::check(errors)
    }
}

impl Render for Reject {
    fn attributes(&self) -> Attributes {
        Attributes::new().text("reason", &self.reason)
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}

/// Ends the call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hangup {}

impl Hangup {
    pub fn new() -> Self {
        Self {}
    }
}

impl Element for Hangup {
    fn type_name(&self) -> &'static str {
        "Hangup"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Render for Hangup {
    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}

/// Moves a queued caller out of the queue and on to the next verb
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leave {}

impl Leave {
    pub fn new() -> Self {
        Self {}
    }
}

impl Element for Leave {
    fn type_name(&self) -> &'static str {
        "Leave"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Render for Leave {
    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}

/// Places the caller in a named call queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enqueue {
    pub name: String,
    pub action: Option<String>,
    pub method: Option<String>,
    pub wait_url: Option<String>,
    pub wait_url_method: Option<String>,
    pub workflow_sid: Option<String>,
}

impl Enqueue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Element for Enqueue {
    fn type_name(&self) -> &'static str {
        "Enqueue"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        // A TaskRouter workflow picks the queue itself
        if self.workflow_sid.is_none() {
            require_text("Enqueue", "name", &self.name, &mut errors);
        }
        check_method("Enqueue", "method", &self.method, &mut errors);
        check_method("Enqueue", "waitUrlMethod", &self.wait_url_method, &mut errors);

        ValidationError::check(errors)
    }
}

impl Render for Enqueue {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
            .text("waitUrl", &self.wait_url)
            .text("waitUrlMethod", &self.wait_url_method)
            .text("workflowSid", &self.workflow_sid)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarkupError;

    #[test]
    fn test_redirect_requires_url() {
        assert!(Redirect::new("/next").validate().is_ok());

        let err = Redirect {
            url: String::new(),
            method: Some("DELETE".to_string()),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_reject_reason() {
        assert!(Reject::new().validate().is_ok());
        assert!(Reject::busy().validate().is_ok());

        let err = Reject {
            reason: Some("nope".to_string()),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.errors(),
            &[MarkupError::invalid("Reject", "reason", "nope", "rejected or busy")]
        );
    }

    #[test]
    fn test_enqueue_name_or_workflow() {
        assert!(Enqueue::new("support").validate().is_ok());
        assert!(Enqueue::new("").validate().is_err());

        let routed = Enqueue {
            workflow_sid: Some("WW0123456789abcdef0123456789abcdef".to_string()),
            ..Enqueue::default()
        };
        assert!(routed.validate().is_ok());
    }

    #[test]
    fn test_enqueue_attribute_order() {
        let enqueue = Enqueue {
            wait_url: Some("/hold".to_string()),
            action: Some("/done".to_string()),
            ..Enqueue::new("support")
        };
        let attrs = format!("{:?}", enqueue.attributes());
        let action = attrs.find("action").unwrap();
        let wait = attrs.find("waitUrl").unwrap();
        assert!(action < wait);
    }
}
