use crate::kind::PrimitiveKind;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// An error that can occur while decoding a value from a column store.
///
/// None of these errors can be retried, they indicate the reader and writer
/// disagree on the type being exchanged.
pub enum DecodeError {
    #[error("buffer underflow: {kind} column exhausted at position {position}")]
    /// A value was pulled past the end of its column.
    BufferUnderflow {
        kind: PrimitiveKind,
        position: usize,
    },
    #[error("trailing data: {remaining} unread values left in the {kind} column")]
    /// Decoding completed but a column still had unread values.
    ///
    /// This is only reported when the caller asks for the columns to be
    /// fully consumed.
    TrailingData {
        kind: PrimitiveKind,
        remaining: usize,
    },
}

#[derive(Debug, thiserror::Error)]
/// An error that can occur when handing columns to a transport.
pub enum TransportError {
    #[error("column shape mismatch: sent {sent} {kind} values but received {received}")]
    /// The transport returned columns of a different shape to what it was given.
    ShapeMismatch {
        kind: PrimitiveKind,
        sent: usize,
        received: usize,
    },
    #[error("MessagePack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("MessagePack decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

#[derive(Debug, thiserror::Error)]
/// An error that aborts an exchange session.
pub enum SessionError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
}
