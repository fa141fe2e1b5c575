use bytes::{Buf, BufMut, BytesMut};

use crate::error::{RecordError, Result};
use crate::message::SctpMessage;

/// Record header: magic (2) + length (4) + stream (2) + ppid (4) + flags (1) = 13 bytes.
pub const HEADER_SIZE: usize = 13;

/// Magic bytes: "SM" (0x53 0x4D).
pub const MAGIC: [u8; 2] = [0x53, 0x4D];

/// Flag bit set when the message was fully reassembled.
pub const FLAG_COMPLETE: u8 = 0x01;

const KNOWN_FLAGS: u8 = FLAG_COMPLETE;

/// Default maximum payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Encode a message as one capture record.
///
/// Wire format:
/// ```text
/// ┌────────────┬──────────┬──────────┬──────────┬─────────┬────────────────┐
/// │ Magic (2B) │ Length   │ Stream   │ PPID     │ Flags   │ Payload        │
/// │ 0x53 0x4D  │ (4B LE)  │ (2B LE)  │ (4B LE)  │ (1B)    │ (Length bytes) │
/// │ "SM"       │          │          │          │         │                │
/// └────────────┴──────────┴──────────┴──────────┴─────────┴────────────────┘
/// ```
pub fn encode_record(msg: &SctpMessage, dst: &mut BytesMut) -> Result<()> {
    let len = u32::try_from(msg.payload.len()).map_err(|_| RecordError::PayloadTooLarge {
        size: msg.payload.len(),
        max: u32::MAX as usize,
    })?;
    let flags = if msg.complete { FLAG_COMPLETE } else { 0 };

    dst.reserve(HEADER_SIZE + msg.payload.len());
    dst.put_slice(&MAGIC);
    dst.put_u32_le(len);
    dst.put_u16_le(msg.stream_identifier);
    dst.put_u32_le(msg.protocol_identifier);
    dst.put_u8(flags);
    dst.put_slice(&msg.payload);
    Ok(())
}

/// Decode one record from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete record yet.
/// On success, consumes the record bytes from the buffer.
pub fn decode_record(src: &mut BytesMut, max_payload: usize) -> Result<Option<SctpMessage>> {
    if src.len() < HEADER_SIZE {
        return Ok(None);
    }

    if src[0..2] != MAGIC {
        return Err(RecordError::InvalidMagic);
    }

    let mut header = &src[2..HEADER_SIZE];
    let payload_len = header.get_u32_le() as usize;
    let stream_identifier = header.get_u16_le();
    let protocol_identifier = header.get_u32_le();
    let flags = header.get_u8();

    if flags & !KNOWN_FLAGS != 0 {
        return Err(RecordError::InvalidFlags(flags));
    }

    if payload_len > max_payload {
        return Err(RecordError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    if src.len() < HEADER_SIZE + payload_len {
        return Ok(None);
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(SctpMessage {
        protocol_identifier,
        stream_identifier,
        complete: flags & FLAG_COMPLETE != 0,
        payload,
    }))
}

/// Configuration for the capture record codec.
#[derive(Debug, Clone)]
pub struct RecordConfig {
    /// Maximum payload size in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}
