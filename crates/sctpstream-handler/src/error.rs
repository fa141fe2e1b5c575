/// Errors raised while processing inbound messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    /// A message for the selected stream arrived before it was reassembled.
    ///
    /// This means no message completion stage runs ahead of the handler.
    #[error(
        "received SCTP message (protocol {protocol_identifier}, stream {stream_identifier}) \
         is not complete, add a message completion stage to the pipeline before this handler"
    )]
    IncompleteMessage {
        protocol_identifier: u32,
        stream_identifier: u16,
    },
}

pub type Result<T> = std::result::Result<T, HandlerError>;
