use std::io::{ErrorKind, Read};

use bytes::BytesMut;
use tracing::debug;

use crate::codec::{decode_record, RecordConfig};
use crate::error::{RecordError, Result};
use crate::message::SctpMessage;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete messages from a capture on any `Read` source.
///
/// Handles partial reads internally, so callers always get whole records.
/// After the first error the reader is fused and yields no further messages.
pub struct MessageReader<T> {
    inner: T,
    buf: BytesMut,
    config: RecordConfig,
    records: u64,
    failed: bool,
}

impl<T: Read> MessageReader<T> {
    /// Create a new message reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, RecordConfig::default())
    }

    /// Create a new message reader with explicit configuration.
    pub fn with_config(inner: T, config: RecordConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
            records: 0,
            failed: false,
        }
    }

    /// Read the next message (blocking).
    ///
    /// Returns `Ok(None)` when the source ends on a record boundary and
    /// `Err(RecordError::Truncated)` when it ends part way through one.
    /// Once an error has been returned every later call returns `Ok(None)`.
    pub fn read_message(&mut self) -> Result<Option<SctpMessage>> {
        if self.failed {
            return Ok(None);
        }

        let result = self.next_record();
        if let Err(err) = &result {
            debug!(records = self.records, error = %err, "capture reader stopped");
            self.failed = true;
            self.buf.clear();
        }
        result
    }

    fn next_record(&mut self) -> Result<Option<SctpMessage>> {
        loop {
            if let Some(msg) = decode_record(&mut self.buf, self.config.max_payload_size)? {
                self.records += 1;
                return Ok(Some(msg));
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(RecordError::Io(err)),
            };

            if read == 0 {
                if self.buf.is_empty() {
                    debug!(records = self.records, "end of capture");
                    return Ok(None);
                }
                return Err(RecordError::Truncated {
                    buffered: self.buf.len(),
                });
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Number of records decoded so far.
    pub fn records_read(&self) -> u64 {
        self.records
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> Iterator for MessageReader<T> {
    type Item = Result<SctpMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_message().transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::{BufMut, BytesMut};

    use super::*;
    use crate::codec::{encode_record, FLAG_COMPLETE, MAGIC};

    fn capture(messages: &[SctpMessage]) -> Vec<u8> {
        let mut wire = BytesMut::new();
        for msg in messages {
            encode_record(msg, &mut wire).unwrap();
        }
        wire.to_vec()
    }

    #[test]
    fn read_single_message() {
        let wire = capture(&[SctpMessage::new(46, 1, b"hello".to_vec())]);

        let mut reader = MessageReader::new(Cursor::new(wire));
        let msg = reader.read_message().unwrap().unwrap();

        assert_eq!(msg.protocol_identifier, 46);
        assert_eq!(msg.stream_identifier, 1);
        assert_eq!(msg.payload.as_ref(), b"hello");
        assert!(reader.read_message().unwrap().is_none());
        assert_eq!(reader.records_read(), 1);
    }

    #[test]
    fn iterates_in_capture_order() {
        let wire = capture(&[
            SctpMessage::new(37, 2, b"one".to_vec()),
            SctpMessage::partial(37, 5, b"two".to_vec()),
            SctpMessage::new(18, 0, b"three".to_vec()),
        ]);

        let messages: Vec<_> = MessageReader::new(Cursor::new(wire))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].payload.as_ref(), b"one");
        assert!(!messages[1].complete);
        assert_eq!(messages[1].stream_identifier, 5);
        assert_eq!(messages[2].protocol_identifier, 18);
    }

    #[test]
    fn read_message_with_large_payload() {
        let payload = vec![0xAB; 64 * 1024];
        let wire = capture(&[SctpMessage::new(53, 9, payload.clone())]);

        let mut reader = MessageReader::new(Cursor::new(wire));
        let msg = reader.read_message().unwrap().unwrap();

        assert_eq!(msg.stream_identifier, 9);
        assert_eq!(msg.payload.as_ref(), payload.as_slice());
    }

    #[test]
    fn partial_read_handling() {
        let wire = capture(&[SctpMessage::new(4, 4, b"slow".to_vec())]);

        let mut reader = MessageReader::new(ByteByByteReader {
            bytes: wire,
            pos: 0,
        });

        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.stream_identifier, 4);
        assert_eq!(msg.payload.as_ref(), b"slow");
    }

    #[test]
    fn empty_capture_ends_cleanly() {
        let mut reader = MessageReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_message().unwrap().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn capture_truncated_mid_record() {
        let mut partial = BytesMut::new();
        partial.put_slice(&MAGIC);
        partial.put_u32_le(16);
        partial.put_u16_le(2);
        partial.put_u32_le(37);
        partial.put_u8(FLAG_COMPLETE);
        partial.put_slice(b"only-part");

        let mut reader = MessageReader::new(Cursor::new(partial.to_vec()));
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, RecordError::Truncated { buffered: 22 }));
    }

    #[test]
    fn invalid_magic_in_capture() {
        let bytes = vec![0x00; 13];
        let mut reader = MessageReader::new(Cursor::new(bytes));
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, RecordError::InvalidMagic));
    }

    #[test]
    fn corrupt_capture_yields_one_error_then_ends() {
        let mut reader = MessageReader::new(Cursor::new(vec![0xFF; 13]));

        let items: Vec<_> = reader.by_ref().take(5).collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(RecordError::InvalidMagic)));
        assert!(reader.read_message().unwrap().is_none());
    }

    #[test]
    fn truncated_capture_yields_one_error_then_ends() {
        let wire = capture(&[SctpMessage::new(37, 2, b"ok".to_vec())]);
        let mut tail = wire.clone();
        tail.extend_from_slice(&wire[..3]);

        let items: Vec<_> = MessageReader::new(Cursor::new(tail)).take(5).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap().payload.as_ref(), b"ok");
        assert!(matches!(items[1], Err(RecordError::Truncated { buffered: 3 })));
    }

    #[test]
    fn flatten_stops_on_corrupt_capture() {
        let mut wire = capture(&[SctpMessage::new(37, 2, b"a".to_vec())]);
        wire.extend_from_slice(&[0xFF; 20]);

        let messages: Vec<_> = MessageReader::new(Cursor::new(wire)).flatten().collect();
        assert_eq!(messages, vec![SctpMessage::new(37, 2, b"a".to_vec())]);
    }

    #[test]
    fn oversized_record_in_capture() {
        let wire = capture(&[SctpMessage::new(46, 1, vec![0u8; 1024])]);

        let cfg = RecordConfig {
            max_payload_size: 16,
        };
        let mut reader = MessageReader::with_config(Cursor::new(wire), cfg);
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, RecordError::PayloadTooLarge { size: 1024, max: 16 }));
    }

    #[test]
    fn interrupted_read_retries() {
        let wire = capture(&[SctpMessage::new(8, 8, b"ok".to_vec())]);

        let mut reader = MessageReader::new(InterruptedThenData {
            interrupted: false,
            inner: Cursor::new(wire),
        });
        let msg = reader.read_message().unwrap().unwrap();

        assert_eq!(msg.stream_identifier, 8);
        assert_eq!(msg.payload.as_ref(), b"ok");
    }

    #[test]
    fn other_io_errors_propagate() {
        let mut reader = MessageReader::new(FailingReader);
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, RecordError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
    }
}
