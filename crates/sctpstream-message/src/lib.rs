//! SCTP message model and capture record codec.
//!
//! An [`SctpMessage`] is one discrete unit handed up by an SCTP association:
//! the payload protocol identifier, the stream it arrived on, whether all of
//! its fragments have been reassembled, and the payload bytes.
//!
//! Captures of such messages are stored as a flat sequence of records:
//! - A 2-byte magic number ("SM") for stream synchronization
//! - A 4-byte little-endian payload length
//! - A 2-byte little-endian stream identifier
//! - A 4-byte little-endian payload protocol identifier
//! - A 1-byte flag set (bit 0: complete)

pub mod codec;
pub mod error;
pub mod message;
pub mod ppid;
pub mod reader;
pub mod writer;

pub use codec::{
    decode_record, encode_record, RecordConfig, DEFAULT_MAX_PAYLOAD, FLAG_COMPLETE, HEADER_SIZE,
};
pub use error::{RecordError, Result};
pub use message::SctpMessage;
pub use ppid::{is_webrtc, protocol_name};
pub use reader::MessageReader;
pub use writer::MessageWriter;
