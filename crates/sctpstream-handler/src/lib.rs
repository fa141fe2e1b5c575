//! Inbound SCTP stream demultiplexing.
//!
//! An association carries many independent streams, each speaking one
//! application protocol. [`InboundByteStreamHandler`] picks the messages of a
//! single (protocol identifier, stream identifier) pair out of that traffic and
//! appends their payloads to a continuous byte buffer, so byte-oriented
//! decoders further down the pipeline never see message boundaries. Every
//! other message is forwarded untouched to the next stage.
//!
//! The handler requires reassembled messages: a matching message that is not
//! yet complete is rejected with [`HandlerError::IncompleteMessage`].

pub mod context;
pub mod error;
pub mod handler;
pub mod selector;

pub use context::{InboundBuffers, InboundContext};
pub use error::{HandlerError, Result};
pub use handler::{Classification, InboundByteStreamHandler, InboundMessageHandler};
pub use selector::StreamSelector;
