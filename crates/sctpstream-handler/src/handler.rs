use sctpstream_message::SctpMessage;
use tracing::{trace, warn};

use crate::context::InboundContext;
use crate::error::{HandlerError, Result};
use crate::selector::StreamSelector;

/// Outcome of matching a message against a handler's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The message belongs to the selected protocol and stream.
    Match,
    /// The message belongs to some other protocol or stream.
    NoMatch,
}

/// A stage of an inbound pipeline that receives SCTP messages.
pub trait InboundMessageHandler {
    /// Handle one message, writing results into `ctx`.
    fn message_received(&self, ctx: &mut dyn InboundContext, msg: SctpMessage) -> Result<()>;
}

/// Turns the messages of one SCTP stream into a byte stream.
///
/// Messages whose protocol identifier and stream identifier both match are
/// appended, payload only, to the next stage's byte buffer. All other messages
/// are forwarded to the next stage's message queue as they are. Each handled
/// message produces exactly one buffer-updated signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundByteStreamHandler {
    selector: StreamSelector,
}

impl InboundByteStreamHandler {
    /// Create a handler for `protocol_identifier` on `stream_identifier`.
    ///
    /// `stream_identifier` should be between 0 and the maximum stream number
    /// of the association.
    pub fn new(protocol_identifier: u32, stream_identifier: u16) -> Self {
        Self::with_selector(StreamSelector::new(protocol_identifier, stream_identifier))
    }

    pub fn with_selector(selector: StreamSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> StreamSelector {
        self.selector
    }

    pub fn protocol_identifier(&self) -> u32 {
        self.selector.protocol_identifier
    }

    pub fn stream_identifier(&self) -> u16 {
        self.selector.stream_identifier
    }

    pub fn classify(&self, msg: &SctpMessage) -> Classification {
        if self.selector.matches(msg) {
            Classification::Match
        } else {
            Classification::NoMatch
        }
    }

    /// Whether this handler converts `msg` rather than forwarding it.
    pub fn is_decodable(&self, msg: &SctpMessage) -> bool {
        self.classify(msg) == Classification::Match
    }

    /// Route one message into `ctx`.
    ///
    /// Fails with [`HandlerError::IncompleteMessage`] when a matching message
    /// has not been reassembled; nothing is written to `ctx` in that case.
    /// Completeness of forwarded messages is not checked.
    pub fn process<C>(&self, ctx: &mut C, msg: SctpMessage) -> Result<()>
    where
        C: InboundContext + ?Sized,
    {
        if self.classify(&msg) == Classification::NoMatch {
            trace!(
                protocol = msg.protocol_identifier,
                stream = msg.stream_identifier,
                "forwarding message"
            );
            ctx.forward_message(msg);
            ctx.fire_buffer_updated();
            return Ok(());
        }

        if !msg.complete {
            warn!(
                protocol = msg.protocol_identifier,
                stream = msg.stream_identifier,
                size = msg.payload.len(),
                "rejecting incomplete message"
            );
            return Err(HandlerError::IncompleteMessage {
                protocol_identifier: msg.protocol_identifier,
                stream_identifier: msg.stream_identifier,
            });
        }

        trace!(
            protocol = msg.protocol_identifier,
            stream = msg.stream_identifier,
            size = msg.payload.len(),
            "appending payload"
        );
        ctx.append_bytes(&msg.payload);
        ctx.fire_buffer_updated();
        Ok(())
    }
}

impl InboundMessageHandler for InboundByteStreamHandler {
    fn message_received(&self, ctx: &mut dyn InboundContext, msg: SctpMessage) -> Result<()> {
        self.process(ctx, msg)
    }
}
