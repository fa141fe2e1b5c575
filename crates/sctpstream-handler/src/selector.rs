use std::fmt;

use sctpstream_message::{protocol_name, SctpMessage};
use serde::{Deserialize, Serialize};

/// The (protocol identifier, stream identifier) pair a handler accepts.
///
/// `stream_identifier` should lie between 0 and the maximum stream number of
/// the association. Out-of-range values are not rejected; they simply never
/// match real traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamSelector {
    /// Accepted payload protocol identifier.
    pub protocol_identifier: u32,
    /// Accepted stream number.
    pub stream_identifier: u16,
}

impl StreamSelector {
    pub const fn new(protocol_identifier: u32, stream_identifier: u16) -> Self {
        Self {
            protocol_identifier,
            stream_identifier,
        }
    }

    /// True when both identifiers of `msg` equal the selected ones.
    pub fn matches(&self, msg: &SctpMessage) -> bool {
        msg.protocol_identifier == self.protocol_identifier
            && msg.stream_identifier == self.stream_identifier
    }
}

impl fmt::Display for StreamSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) on stream {}",
            protocol_name(self.protocol_identifier),
            self.protocol_identifier,
            self.stream_identifier
        )
    }
}
