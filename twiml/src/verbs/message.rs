//! `<Sms>` verb

use super::rules::{check_method, require_text};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::Element;
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

/// Sends a text message during a call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sms {
    pub text: String,
    pub to: Option<String>,
    pub from: Option<String>,
    pub action: Option<String>,
    pub method: Option<String>,
    pub status_callback: Option<String>,
}

impl Sms {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

impl Element for Sms {
    fn type_name(&self) -> &'static str {
        "Sms"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Sms", "text", &self.text, &mut errors);
        check_method("Sms", "method", &self.method, &mut errors);
        ValidationError::check(errors)
    }
}

impl Render for Sms {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("to", &self.to)
            .text("from", &self.from)
            .text("action", &self.action)
            .text("method", &self.method)
            .text("statusCallback", &self.status_callback)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.text)
    }
}
