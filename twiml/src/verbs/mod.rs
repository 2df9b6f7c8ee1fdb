//! TwiML verbs and nouns
//!
//! Each element is a plain struct with public fields. Required content is
//! taken by `new`; optional attributes default to absent and are omitted from
//! the encoded document.

pub mod control;
pub mod dial;
pub mod gather;
pub mod media;
pub mod message;
pub mod record;
pub mod voice;

mod rules;

// Re-export element types for convenience
pub use control::{Enqueue, Hangup, Leave, Redirect, Reject};
pub use dial::{Client, Conference, Dial, Number, Queue, Sip, DIAL_CHILDREN};
pub use gather::{Gather, GATHER_CHILDREN};
pub use media::{
    Connect, Parameter, Room, Siprec, Start, Stop, Stream, CONNECT_CHILDREN, START_CHILDREN,
    STREAM_CHILDREN,
};
pub use message::Sms;
pub use record::Record;
pub use voice::{Pause, Play, Say};
