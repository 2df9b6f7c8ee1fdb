//! TwiML Library
//!
//! Builds, validates and encodes TwiML documents that tell a telephony API how
//! to handle a call, and decodes the callback payloads the API sends back.
//!
//! # Architecture
//!
//! - [`Response`] owns an ordered list of [`Markup`] elements
//! - Every element validates itself; containers check their children against
//!   a fixed whitelist before asking each child to validate
//! - Encoding validates first, then writes an indented XML document
//! - Callback records in [`callbacks`] keep the vendor's wire field names and
//!   decode straight from form bodies
//!
//! The library does NOT:
//! - Talk to the network
//! - Check the full vendor grammar beyond child whitelists and simple
//!   per-element attribute checks
//!
//! # Example Usage
//!
//! ```
//! use twiml::{Dial, Number, Response, Say};
//!
//! let dial = Dial::with_children(vec![Number::new("+15551234567").into()]);
//!
//! let mut response = Response::new();
//! response.add([Say::new("Connecting you now")]);
//! response.add([dial]);
//!
//! match response.to_xml_string() {
//!     Ok(xml) => println!("{}", xml),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

// Public modules
pub mod callbacks;
pub mod markup;
pub mod response;
pub mod types;
pub mod verbs;

// Re-export main types for convenience
pub use callbacks::{
    AddonResult, AddonsResults, CallbackRequest, DialActionRequest, RecordActionRequest,
    RecordingStatusCallbackRequest, TranscribeCallbackRequest, VoiceRequest,
};
pub use markup::{Element, Markup, RESPONSE_CHILDREN};
pub use response::Response;
pub use types::{MarkupError, Result, TwimlError, ValidationError, VALIDATION_BANNER};
pub use verbs::{
    Client, Conference, Connect, Dial, Enqueue, Gather, Hangup, Leave, Number, Parameter, Pause,
    Play, Queue, Record, Redirect, Reject, Room, Say, Sip, Siprec, Sms, Start, Stop, Stream,
};

// Internal modules (not exposed in public API)
mod encoder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
