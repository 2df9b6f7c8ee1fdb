//! `<Gather>` verb

use super::rules::{check_keys, check_method, check_one_of, DTMF_KEYS};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::{validate_children, Element, Markup};
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

/// Verbs allowed inside `<Gather>`
pub const GATHER_CHILDREN: &[&str] = &["Say", "Play", "Pause"];

const INPUT_MODES: &[&str] = &["dtmf", "speech", "dtmf speech"];

/// Collects digits or speech from the caller, optionally while prompting
/// with nested `<Say>`, `<Play>` and `<Pause>` verbs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gather {
    pub children: Vec<Markup>,
    pub action: Option<String>,
    pub method: Option<String>,
    pub timeout: Option<u32>,
    pub finish_on_key: Option<String>,
    pub num_digits: Option<u32>,
    pub input: Option<String>,
    pub language: Option<String>,
    pub hints: Option<String>,
    pub speech_timeout: Option<String>,
    pub partial_result_callback: Option<String>,
    pub partial_result_callback_method: Option<String>,
}

impl Gather {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append prompts, preserving order
    pub fn add<I, M>(&mut self, prompts: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.children.extend(prompts.into_iter().map(Into::into));
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_num_digits(mut self, digits: u32) -> Self {
        self.num_digits = Some(digits);
        self
    }
}

impl Element for Gather {
    fn type_name(&self) -> &'static str {
        "Gather"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_method("Gather", "method", &self.method, &mut errors);
        check_method(
            "Gather",
            "partialResultCallbackMethod",
            &self.partial_result_callback_method,
            &mut errors,
        );
        check_keys(
            "Gather",
            "finishOnKey",
            &self.finish_on_key,
            DTMF_KEYS,
            "digits, # or *",
            &mut errors,
        );
        check_one_of(
            "Gather",
            "input",
            &self.input,
            INPUT_MODES,
            "dtmf, speech or \"dtmf speech\"",
            &mut errors,
        );
        errors.extend(validate_children("Gather", GATHER_CHILDREN, &self.children));

        ValidationError::check(errors)
    }
}

impl Render for Gather {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("action", &self.action)
            .text("method", &self.method)
            .value("timeout", &self.timeout)
            .text("finishOnKey", &self.finish_on_key)
            .value("numDigits", &self.num_digits)
            .text("input", &self.input)
            .text("language", &self.language)
            .text("hints", &self.hints)
            .text("speechTimeout", &self.speech_timeout)
            .text("partialResultCallback", &self.partial_result_callback)
            .text(
                "partialResultCallbackMethod",
                &self.partial_result_callback_method,
            )
    }

    fn body(&self) -> Body<'_> {
        Body::Children(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarkupError;
    use crate::verbs::{Dial, Pause, Play, Say};

    #[test]
    fn test_gather_with_prompts() {
        let mut gather = Gather::new().with_action("/menu").with_num_digits(1);
        gather.add([Say::new("Press 1 for sales")]);
        gather.add([Pause::seconds(1)]);
        gather.add([Play::new("https://example.com/menu.mp3")]);

        assert!(gather.validate().is_ok());
        assert_eq!(gather.children.len(), 3);
        assert_eq!(gather.children[1].type_name(), "Pause");
    }

    #[test]
    fn test_gather_rejects_dial() {
        let mut gather = Gather::new();
        gather.add([Dial::new("+15551234567")]);

        let err = gather.validate().unwrap_err();
        assert_eq!(
            err.errors(),
            &[MarkupError::UnknownChild {
                parent: "Gather",
                child: "Dial",
            }]
        );
    }

    #[test]
    fn test_gather_input_mode() {
        let gather = Gather {
            input: Some("dtmf speech".to_string()),
            ..Gather::new()
        };
        assert!(gather.validate().is_ok());

        let gather = Gather {
            input: Some("telepathy".to_string()),
            finish_on_key: Some("!".to_string()),
            ..Gather::new()
        };
        assert_eq!(gather.validate().unwrap_err().len(), 2);
    }
}
