use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_record, RecordConfig};
use crate::error::{RecordError, Result};
use crate::message::SctpMessage;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes messages as capture records to any `Write` sink.
pub struct MessageWriter<T> {
    inner: T,
    buf: BytesMut,
    config: RecordConfig,
}

impl<T: Write> MessageWriter<T> {
    /// Create a new message writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, RecordConfig::default())
    }

    /// Create a new message writer with explicit configuration.
    pub fn with_config(inner: T, config: RecordConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Encode and write one message as a complete record (blocking).
    pub fn write_message(&mut self, msg: &SctpMessage) -> Result<()> {
        if msg.payload.len() > self.config.max_payload_size {
            return Err(RecordError::PayloadTooLarge {
                size: msg.payload.len(),
                max: self.config.max_payload_size,
            });
        }

        self.buf.clear();
        encode_record(msg, &mut self.buf)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(RecordError::WriterClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }

        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
