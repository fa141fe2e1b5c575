use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};
use sctpstream_message::SctpMessage;

/// The inputs of the next pipeline stage, as seen by an inbound handler.
///
/// The pipeline owns both buffers and any synchronization around them. A
/// handler only appends to them and then signals that they changed.
pub trait InboundContext {
    /// Append bytes to the next stage's inbound byte buffer.
    fn append_bytes(&mut self, bytes: &[u8]);

    /// Queue a message, unchanged, for the next stage.
    fn forward_message(&mut self, msg: SctpMessage);

    /// Tell the next stage that its inbound buffers were updated.
    fn fire_buffer_updated(&mut self);
}

/// In-memory inbound buffers for a single downstream stage.
///
/// Holds the byte buffer a stream decoder reads from, the queue of messages
/// passed through untouched, and a count of buffer-updated signals.
#[derive(Debug, Default)]
pub struct InboundBuffers {
    bytes: BytesMut,
    messages: VecDeque<SctpMessage>,
    updates: u64,
}

impl InboundBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes appended so far and not yet taken.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take everything in the byte buffer, leaving it empty.
    pub fn take_bytes(&mut self) -> Bytes {
        self.bytes.split().freeze()
    }

    /// Messages forwarded so far and not yet popped.
    pub fn messages(&self) -> &VecDeque<SctpMessage> {
        &self.messages
    }

    /// Pop the oldest forwarded message.
    pub fn pop_message(&mut self) -> Option<SctpMessage> {
        self.messages.pop_front()
    }

    /// Number of buffer-updated signals received.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl InboundContext for InboundBuffers {
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    fn forward_message(&mut self, msg: SctpMessage) {
        self.messages.push_back(msg);
    }

    fn fire_buffer_updated(&mut self) {
        self.updates += 1;
    }
}
