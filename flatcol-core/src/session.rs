//! Exchange sessions.
//!
//! A session runs one full round trip: encode into a fresh store, hand the
//! store to a [Transport], check the same shape came back, then decode from
//! fresh cursors.

use bon::Builder;
use tracing::{debug, warn};

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, SessionError, TransportError};
use crate::reader::ColumnReader;
use crate::store::{ColumnShape, ColumnStore};
use crate::transport::{ensure_shape, LocalTransport, Transport};

#[derive(Debug, Default, Clone, Builder)]
/// Options controlling how a session allocates and checks its columns.
pub struct SessionOptions {
    #[builder(default)]
    /// The number of values to reserve in every column before encoding.
    ///
    /// This is only a guess for the initial allocation.
    pub capacity_hint: usize,
    #[builder(default)]
    /// Require every column to be fully consumed once decoding completes.
    ///
    /// Columns carry no type information, so this is the only check that can
    /// catch a decode reading a different shape than was encoded. It cannot
    /// catch every mismatch.
    pub require_exhausted: bool,
}

/// Runs values through an encode, transport, decode round trip.
pub struct ExchangeSession<X = LocalTransport> {
    transport: X,
    options: SessionOptions,
}

impl ExchangeSession<LocalTransport> {
    /// Creates a session which exchanges within the current process.
    pub fn local() -> Self {
        Self::new(LocalTransport, SessionOptions::default())
    }
}

impl<X: Transport> ExchangeSession<X> {
    /// Creates a new session using the given transport.
    pub fn new(transport: X, options: SessionOptions) -> Self {
        Self { transport, options }
    }

    #[inline]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    #[inline]
    pub fn transport(&self) -> &X {
        &self.transport
    }

    /// Encodes `value` into a newly allocated store.
    pub fn encode<T: Encode + ?Sized>(&self, value: &T) -> ColumnStore {
        let mut store = ColumnStore::with_capacity(self.options.capacity_hint);
        store.encode(value);
        debug!(shape = %store.shape(), "Encoded value into columns");
        store
    }

    /// Hands `outgoing` to the transport and checks the returned columns have
    /// the shape that was sent.
    fn transmit(&self, outgoing: ColumnStore) -> Result<ColumnStore, TransportError> {
        let sent = outgoing.shape();
        let received = self.transport.exchange(outgoing)?;
        ensure_shape(sent, received.shape()).inspect_err(|e| {
            warn!(error = %e, "Transport returned columns of a different shape");
        })?;
        Ok(received)
    }

    /// Runs `value` through a full round trip, returning the decoded copy.
    pub fn exchange<T: Encode + Decode>(&self, value: &T) -> Result<T, SessionError> {
        let store = self.transmit(self.encode(value))?;
        let mut reader = store.reader();
        let decoded = reader.decode()?;
        self.finish(reader)?;
        Ok(decoded)
    }

    /// Runs `source` through a full round trip, decoding into `destination`.
    ///
    /// The destination type must have the same traversal as the source type,
    /// which allows, for example, decoding a multiset's columns into a set.
    pub fn exchange_into<S, D>(&self, source: &S, destination: &mut D) -> Result<(), SessionError>
    where
        S: Encode + ?Sized,
        D: Decode,
    {
        let store = self.transmit(self.encode(source))?;
        let mut reader = store.reader();
        destination.decode_into(&mut reader)?;
        self.finish(reader)?;
        Ok(())
    }

    /// Encodes each value as a separate participant, gathers them through the
    /// transport and decodes one value per participant.
    pub fn gather<T: Encode + Decode>(&self, values: &[T]) -> Result<Vec<T>, SessionError> {
        let contributions: Vec<ColumnStore> =
            values.iter().map(|value| self.encode(value)).collect();
        let sent = contributions
            .iter()
            .fold(ColumnShape::default(), |total, store| total + store.shape());
        let store = self.transport.gather(contributions)?;
        ensure_shape(sent, store.shape()).inspect_err(|e| {
            warn!(error = %e, "Transport gathered columns of a different shape");
        })?;
        debug!(
            participants = values.len(),
            shape = %store.shape(),
            "Gathered participant columns",
        );

        let mut reader = store.reader();
        let decoded = reader.decode_all(values.len())?;
        self.finish(reader)?;
        Ok(decoded)
    }

    fn finish(&self, reader: ColumnReader<'_>) -> Result<(), DecodeError> {
        if !self.options.require_exhausted {
            return Ok(());
        }

        reader.finish().inspect_err(|e| {
            warn!(error = %e, "Decode did not consume every column, were the types mismatched?");
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::kind::PrimitiveKind;
    use crate::multi::MultiSet;
    use crate::transport::MsgpackTransport;

    struct TruncatingTransport;

    impl Transport for TruncatingTransport {
        fn exchange(&self, mut outgoing: ColumnStore) -> Result<ColumnStore, TransportError> {
            outgoing.int32.truncate(1);
            Ok(outgoing)
        }
    }

    #[test]
    fn test_local_exchange_scenario() {
        let session = ExchangeSession::local();
        let value = (vec![1i32, 2, 3], 42i64);

        let store = session.encode(&value);
        assert_eq!(store.lengths(), &[3]);
        assert_eq!(store.int32(), &[1, 2, 3]);
        assert_eq!(store.int64(), &[42]);

        let decoded = session.exchange(&value).expect("Exchange should succeed");
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_msgpack_exchange() {
        let options = SessionOptions::builder()
            .capacity_hint(16)
            .require_exhausted(true)
            .build();
        let session = ExchangeSession::new(MsgpackTransport, options);

        let value = (vec![vec![0.5f64; 3]; 2], [7i64, 8]);
        let decoded = session.exchange(&value).expect("Exchange should succeed");
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_exchange_into_collapses_duplicates() {
        let session = ExchangeSession::local();
        let multiset: MultiSet<i64> = [1, 1, 2].into_iter().collect();

        let mut set: BTreeSet<i64> = BTreeSet::new();
        session
            .exchange_into(&multiset, &mut set)
            .expect("Exchange should succeed");
        assert_eq!(set, BTreeSet::from([1i64, 2]));
    }

    #[test]
    fn test_truncating_transport_is_rejected_before_decode() {
        let session = ExchangeSession::new(TruncatingTransport, SessionOptions::default());
        let err = session.exchange(&vec![1i32, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Transport(TransportError::ShapeMismatch {
                kind: PrimitiveKind::Int32,
                sent: 3,
                received: 1,
            })
        ));

        let err = session.gather(&[vec![1i32, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Transport(TransportError::ShapeMismatch {
                kind: PrimitiveKind::Int32,
                sent: 3,
                received: 2,
            })
        ));
    }

    #[test]
    fn test_truncated_columns_underflow() {
        let mut store = ColumnStore::from_value(&vec![1i32, 2, 3]);
        store.int32.truncate(1);
        let err = store.reader().decode::<Vec<i32>>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::BufferUnderflow {
                kind: PrimitiveKind::Int32,
                position: 1,
            }
        );
    }

    #[test]
    fn test_mismatched_decode_is_reported_when_exhaustion_required() {
        let options = SessionOptions::builder().require_exhausted(true).build();
        let session = ExchangeSession::new(LocalTransport, options);

        let mut narrower = 0i32;
        let err = session
            .exchange_into(&(5i32, 6i32), &mut narrower)
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Decode(DecodeError::TrailingData {
                kind: PrimitiveKind::Int32,
                remaining: 1,
            })
        ));

        // Without the check the mismatch goes unnoticed.
        ExchangeSession::local()
            .exchange_into(&(5i32, 6i32), &mut narrower)
            .expect("Mismatch is not detectable without the exhaustion check");
        assert_eq!(narrower, 5);
    }

    #[test]
    fn test_gather_decodes_one_value_per_participant() {
        let session = ExchangeSession::new(
            MsgpackTransport,
            SessionOptions::builder().require_exhausted(true).build(),
        );
        let values = vec![vec![1i32], vec![], vec![2, 3]];
        let gathered = session.gather(&values).expect("Gather should succeed");
        assert_eq!(gathered, values);
    }
}
