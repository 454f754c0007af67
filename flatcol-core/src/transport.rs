//! Transports move fully materialised column stores between an encode pass
//! and a decode pass.
//!
//! The only contract is "columns in, same-shape columns out", how the columns
//! travel is up to the implementation.

use tracing::trace;

use crate::error::TransportError;
use crate::kind::PrimitiveKind;
use crate::store::{ColumnShape, ColumnStore};

/// Hands the columns of an encoded store over to the decoding side.
pub trait Transport {
    /// Exchanges a single store.
    fn exchange(&self, outgoing: ColumnStore) -> Result<ColumnStore, TransportError>;

    /// Gathers the stores of several participants into one.
    ///
    /// The returned store holds each participant's columns concatenated per
    /// kind, in participant order.
    fn gather(&self, contributions: Vec<ColumnStore>) -> Result<ColumnStore, TransportError> {
        let mut gathered = ColumnStore::new();
        for (participant, contribution) in contributions.into_iter().enumerate() {
            let received = self.exchange(contribution)?;
            trace!(participant, shape = %received.shape(), "Gathered participant columns");
            gathered.append(received);
        }
        Ok(gathered)
    }
}

#[derive(Debug, Default, Copy, Clone)]
/// Passes the store straight through, for exchanges within one process.
pub struct LocalTransport;

impl Transport for LocalTransport {
    #[inline]
    fn exchange(&self, outgoing: ColumnStore) -> Result<ColumnStore, TransportError> {
        Ok(outgoing)
    }
}

#[derive(Debug, Default, Copy, Clone)]
/// Serializes the store to MessagePack and back.
///
/// This stands in for a byte-oriented wire.
pub struct MsgpackTransport;

impl MsgpackTransport {
    /// Serializes the store's columns to a MessagePack buffer.
    pub fn to_bytes(&self, store: &ColumnStore) -> Result<Vec<u8>, TransportError> {
        Ok(rmp_serde::to_vec(store)?)
    }

    /// Deserializes a store from a MessagePack buffer.
    pub fn from_bytes(&self, buffer: &[u8]) -> Result<ColumnStore, TransportError> {
        Ok(rmp_serde::from_slice(buffer)?)
    }
}

impl Transport for MsgpackTransport {
    fn exchange(&self, outgoing: ColumnStore) -> Result<ColumnStore, TransportError> {
        let buffer = self.to_bytes(&outgoing)?;
        trace!(num_bytes = buffer.len(), shape = %outgoing.shape(), "Serialized columns");
        self.from_bytes(&buffer)
    }
}

/// Checks a transport returned the shape that was handed to it.
pub(crate) fn ensure_shape(
    sent: ColumnShape,
    received: ColumnShape,
) -> Result<(), TransportError> {
    for kind in PrimitiveKind::ALL {
        if received.get(kind) != sent.get(kind) {
            return Err(TransportError::ShapeMismatch {
                kind,
                sent: sent.get(kind),
                received: received.get(kind),
            });
        }
    }
    Ok(())
}
