//! Well-known SCTP payload protocol identifiers.
//!
//! Values follow the IANA "SCTP Payload Protocol Identifiers" registry.
//! Identifier 0 means the application did not specify a protocol.

/// No protocol specified by the sender.
pub const UNSPECIFIED: u32 = 0;

/// MTP3 User Adaptation Layer.
pub const M3UA: u32 = 3;

/// SCCP User Adaptation Layer.
pub const SUA: u32 = 4;

/// MTP2 Peer-to-Peer Adaptation Layer.
pub const M2PA: u32 = 5;

/// LTE S1 Application Protocol.
pub const S1AP: u32 = 18;

/// LTE X2 Application Protocol.
pub const X2AP: u32 = 27;

/// Diameter over SCTP.
pub const DIAMETER: u32 = 46;

/// WebRTC Data Channel Establishment Protocol.
pub const WEBRTC_DCEP: u32 = 50;

/// WebRTC string data channel message.
pub const WEBRTC_STRING: u32 = 51;

/// WebRTC binary data channel message.
pub const WEBRTC_BINARY: u32 = 53;

/// 5G NG Application Protocol.
pub const NGAP: u32 = 60;

/// 5G Xn Application Protocol.
pub const XNAP: u32 = 61;

/// Returns a human-readable name for a payload protocol identifier.
pub fn protocol_name(id: u32) -> &'static str {
    match id {
        UNSPECIFIED => "UNSPECIFIED",
        M3UA => "M3UA",
        SUA => "SUA",
        M2PA => "M2PA",
        S1AP => "S1AP",
        X2AP => "X2AP",
        DIAMETER => "DIAMETER",
        WEBRTC_DCEP => "WEBRTC_DCEP",
        WEBRTC_STRING => "WEBRTC_STRING",
        WEBRTC_BINARY => "WEBRTC_BINARY",
        NGAP => "NGAP",
        XNAP => "XNAP",
        _ => "OTHER",
    }
}

/// Returns true if the identifier belongs to a WebRTC data channel.
pub fn is_webrtc(id: u32) -> bool {
    matches!(id, WEBRTC_DCEP | WEBRTC_STRING | WEBRTC_BINARY)
}
