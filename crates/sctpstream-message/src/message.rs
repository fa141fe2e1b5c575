use bytes::Bytes;

use crate::ppid::protocol_name;

/// A discrete message received on an SCTP association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SctpMessage {
    /// Payload protocol identifier (PPID) of the application using the stream.
    pub protocol_identifier: u32,
    /// Stream number within the association.
    pub stream_identifier: u16,
    /// True once every fragment of the message has been reassembled.
    pub complete: bool,
    /// The message payload.
    pub payload: Bytes,
}

impl SctpMessage {
    /// Create a complete message.
    pub fn new(protocol_identifier: u32, stream_identifier: u16, payload: impl Into<Bytes>) -> Self {
        Self {
            protocol_identifier,
            stream_identifier,
            complete: true,
            payload: payload.into(),
        }
    }

    /// Create a message that still awaits further fragments.
    pub fn partial(
        protocol_identifier: u32,
        stream_identifier: u16,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            complete: false,
            ..Self::new(protocol_identifier, stream_identifier, payload)
        }
    }

    /// Whether all fragments of this message have been reassembled.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Human-readable name of the payload protocol.
    pub fn protocol_name(&self) -> &'static str {
        protocol_name(self.protocol_identifier)
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppid::DIAMETER;

    #[test]
    fn new_message_is_complete() {
        let msg = SctpMessage::new(DIAMETER, 3, Bytes::from_static(b"cer"));
        assert!(msg.is_complete());
        assert_eq!(msg.stream_identifier, 3);
        assert_eq!(msg.len(), 3);
        assert_eq!(msg.protocol_name(), "DIAMETER");
    }

    #[test]
    fn partial_message_is_incomplete() {
        let msg = SctpMessage::partial(37, 2, vec![0x03]);
        assert!(!msg.is_complete());
        assert_eq!(msg.protocol_identifier, 37);
        assert_eq!(msg.payload.as_ref(), &[0x03]);
    }

    #[test]
    fn empty_payload() {
        let msg = SctpMessage::new(0, 0, Bytes::new());
        assert!(msg.is_empty());
        assert_eq!(msg.protocol_name(), "UNSPECIFIED");
    }
}
