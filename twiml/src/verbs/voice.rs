//! Audio verbs: `<Say>`, `<Play>` and `<Pause>`

use super::rules::{check_keys, require_text};
use crate::encoder::{Attributes, Body, Render};
use crate::markup::Element;
use crate::types::{MarkupError, ValidationError};
use serde::{Deserialize, Serialize};

const BASIC_VOICES: &[&str] = &["man", "woman", "alice"];

const PLAY_DIGITS: &str = "0123456789#*w";

/// Reads text to the caller using text-to-speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Say {
    pub text: String,
    pub voice: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "loop")]
    pub loop_count: Option<u32>,
}

impl Say {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl Element for Say {
    fn type_name(&self) -> &'static str {
        "Say"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require_text("Say", "text", &self.text, &mut errors);

        if let Some(voice) = &self.voice {
            let known = BASIC_VOICES.contains(&voice.as_str())
                || voice.starts_with("Polly.")
                || voice.starts_with("Google.");
            if !known {
                errors.push(MarkupError::invalid(
                    "Say",
                    "voice",
                    voice,
                    "man, woman, alice or a Polly./Google. voice",
                ));
            }
        }

        ValidationError::check(errors)
    }
}

impl Render for Say {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .text("voice", &self.voice)
            .text("language", &self.language)
            .value("loop", &self.loop_count)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.text)
    }
}

/// Plays an audio file or sends DTMF digits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Play {
    pub url: String,
    #[serde(rename = "loop")]
    pub loop_count: Option<u32>,
    pub digits: Option<String>,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Play DTMF tones instead of an audio file
    pub fn digits(digits: impl Into<String>) -> Self {
        Self {
            digits: Some(digits.into()),
            ..Self::default()
        }
    }
}

impl Element for Play {
    fn type_name(&self) -> &'static str {
        "Play"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        let has_digits = self.digits.as_deref().is_some_and(|d| !d.is_empty());
        if self.url.trim().is_empty() && !has_digits {
            errors.push(MarkupError::missing("Play", "url or digits"));
        }
        check_keys(
            "Play",
            "digits",
            &self.digits,
            PLAY_DIGITS,
            "digits, #, * or w",
            &mut errors,
        );

        ValidationError::check(errors)
    }
}

impl Render for Play {
    fn attributes(&self) -> Attributes {
        Attributes::new()
            .value("loop", &self.loop_count)
            .text("digits", &self.digits)
    }

    fn body(&self) -> Body<'_> {
        Body::Text(&self.url)
    }
}

/// Waits silently for a number of seconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pause {
    pub length: Option<u32>,
}

impl Pause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seconds(length: u32) -> Self {
        Self {
            length: Some(length),
        }
    }
}

impl Element for Pause {
    fn type_name(&self) -> &'static str {
        "Pause"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Render for Pause {
    fn attributes(&self) -> Attributes {
        Attributes::new().value("length", &self.length)
    }

    fn body(&self) -> Body<'_> {
        Body::Empty
    }
}
