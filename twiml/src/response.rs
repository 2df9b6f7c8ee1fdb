//! Response container API
//!
//! [`Response`] is the entry point for building a TwiML document. Verbs are
//! appended in the order they should execute, then the whole tree is
//! validated and encoded in one call.

use crate::encoder::write_document;
use crate::markup::{validate_children, Markup, RESPONSE_CHILDREN};
use crate::types::{MarkupError, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Root container for TwiML verbs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Encode even when verbs fail their own validation
    ///
    /// Only semantic failures are bypassed. An empty response or a child that
    /// is not a verb still fails [`Response::encode`].
    #[serde(default)]
    pub ignore_validation_errors: bool,

    /// Verbs in execution order
    #[serde(default)]
    pub verbs: Vec<Markup>,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Append verbs to the response, preserving call order
    ///
    /// Nothing is validated here; see [`Response::validate`].
    ///
    /// # Example
    /// ```
    /// use twiml::{Hangup, Response, Say};
    ///
    /// let mut response = Response::new();
    /// response.add([Say::new("Goodbye")]);
    /// response.add([Hangup::new()]);
    /// assert_eq!(response.len(), 2);
    /// ```
    pub fn add<I, M>(&mut self, verbs: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.verbs.extend(verbs.into_iter().map(Into::into));
    }

    /// Builder method: append a single verb
    pub fn with(mut self, verb: impl Into<Markup>) -> Self {
        self.verbs.push(verb.into());
        self
    }

    /// Builder method: set the ignore-validation-errors flag
    pub fn with_ignore_validation_errors(mut self, ignore: bool) -> Self {
        self.ignore_validation_errors = ignore;
        self
    }

    pub fn verbs(&self) -> &[Markup] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Validate every verb in the response
    ///
    /// An empty response fails with a single error. A child that is not one
    /// of the allowed verbs fails with a single error naming its type and no
    /// further children are checked. Otherwise every verb is validated and
    /// all failures are returned together.
    ///
    /// The ignore flag has no effect here.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.verbs.is_empty() {
            return Err(ValidationError::single(MarkupError::EmptyResponse));
        }
        ValidationError::check(validate_children(
            "Response",
            RESPONSE_CHILDREN,
            &self.verbs,
        ))
    }

    /// Validate and encode the response as an XML document
    ///
    /// # Returns
    /// * `Ok(bytes)` - the complete document
    /// * `Err(TwimlError::Validation)` - the same error [`Response::validate`]
    ///   returns, unless the ignore flag is set and every failure is semantic
    /// * `Err(TwimlError::Io | TwimlError::Xml)` - the writer failed
    ///
    /// # Example
    /// ```
    /// use twiml::{Response, Say};
    ///
    /// let response = Response::new().with(Say::new("Hello"));
    /// let xml = response.encode().unwrap();
    /// assert!(xml.starts_with(b"<?xml"));
    /// ```
    pub fn encode(&self) -> Result<Vec<u8>> {
        log::debug!("Encoding response with {} verbs", self.verbs.len());

        if let Err(e) = self.validate() {
            if !self.ignore_validation_errors || e.is_structural() {
                return Err(e.into());
            }
            log::warn!(
                "Encoding response despite {} validation error(s): {}",
                e.len(),
                e
            );
        }

        let bytes = write_document(Vec::new(), &self.verbs)?;
        log::debug!("Encoded response ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Validate and encode the response as a string
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.encode()?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl<M: Into<Markup>> FromIterator<M> for Response {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut response = Response::new();
        response.add(iter);
        response
    }
}
