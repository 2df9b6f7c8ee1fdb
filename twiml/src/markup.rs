//! Markup node abstraction
//!
//! Every TwiML element (verbs such as `Say` or `Dial` and the nouns nested
//! inside them such as `Number` or `Stream`) is one variant of the closed
//! [`Markup`] enum. Containers accept children by checking each child's
//! [`Element::type_name`] against a fixed whitelist and then asking the child
//! to validate itself.

use crate::encoder::Render;
use crate::types::{MarkupError, ValidationError};
use crate::verbs::{
    Client, Conference, Connect, Dial, Enqueue, Gather, Hangup, Leave, Number, Parameter, Pause,
    Play, Queue, Record, Redirect, Reject, Room, Say, Sip, Siprec, Sms, Start, Stop, Stream,
};
use serde::{Deserialize, Serialize};

/// Capability contract shared by all markup elements
pub trait Element {
    /// Stable element name used for whitelist checks and as the XML tag
    fn type_name(&self) -> &'static str;

    /// Check the element's own fields and nested children
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Verbs allowed as direct children of `<Response>`
pub const RESPONSE_CHILDREN: &[&str] = &[
    "Enqueue", "Hangup", "Leave", "Pause", "Play", "Record", "Redirect", "Reject", "Say", "Dial",
    "Gather", "Sms", "Start", "Stop", "Connect",
];

macro_rules! markup_variants {
    ($($variant:ident),* $(,)?) => {
        /// Any TwiML element
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "verb")]
        pub enum Markup {
            $($variant($variant),)*
        }

        impl Markup {
            pub(crate) fn as_render(&self) -> &dyn Render {
                match self {
                    $(Markup::$variant(m) => m as &dyn Render,)*
                }
            }
        }

        $(
            impl From<$variant> for Markup {
                fn from(value: $variant) -> Self {
                    Markup::$variant(value)
                }
            }
        )*
    };
}

markup_variants! {
    // Verbs
    Say,
    Play,
    Pause,
    Redirect,
    Reject,
    Hangup,
    Leave,
    Enqueue,
    Record,
    Dial,
    Gather,
    Sms,
    Start,
    Stop,
    Connect,
    // Nouns
    Number,
    Client,
    Conference,
    Queue,
    Sip,
    Stream,
    Siprec,
    Room,
    Parameter,
}

impl Element for Markup {
    fn type_name(&self) -> &'static str {
        self.as_render().type_name()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.as_render().validate()
    }
}

/// Validate the children of a container element
///
/// Membership is checked first: the first child whose type is not in
/// `allowed` produces a single [`MarkupError::UnknownChild`] and nothing else
/// is reported. Only when every child is allowed are the children validated,
/// each failing child contributing one [`MarkupError::Nested`] entry.
pub(crate) fn validate_children(
    parent: &'static str,
    allowed: &[&str],
    children: &[Markup],
) -> Vec<MarkupError> {
    if let Some(unknown) = children
        .iter()
        .find(|child| !allowed.contains(&child.type_name()))
    {
        log::debug!(
            "Rejecting {} as child of {}",
            unknown.type_name(),
            parent
        );
        return vec![MarkupError::UnknownChild {
            parent,
            child: unknown.type_name(),
        }];
    }

    let mut errors = Vec::new();
    for child in children {
        if let Err(e) = child.validate() {
            log::trace!("{} inside {} failed validation", child.type_name(), parent);
            errors.push(MarkupError::Nested {
                element: child.type_name(),
                errors: e.into_errors(),
            });
        }
    }
    errors
}
