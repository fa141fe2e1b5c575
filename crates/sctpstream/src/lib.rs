//! Demultiplex SCTP streams into byte streams.
//!
//! sctpstream sits between an SCTP association, which delivers discrete
//! messages on many streams, and decoders that expect one continuous byte
//! sequence per application protocol.
//!
//! # Crate Structure
//!
//! - [`message`] — The SCTP message model, well-known payload protocol
//!   identifiers, and the capture record codec
//! - [`handler`] — The inbound stream demultiplexing handler and its pipeline
//!   context

/// Re-export message types.
pub mod message {
    pub use sctpstream_message::*;
}

/// Re-export handler types.
pub mod handler {
    pub use sctpstream_handler::*;
}
