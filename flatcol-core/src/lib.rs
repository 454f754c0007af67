//! Flattens arbitrarily nested values into a handful of homogeneous
//! primitive columns, and back.
//!
//! A [ColumnStore] holds one column per [PrimitiveKind]: `i32`, `i64`, `f64`
//! and the internal length column. Values are decomposed by the [Encode]
//! rules and rebuilt by the mirrored [Decode] rules, with the element count of
//! every variable-size container threaded through the length column. The
//! columns carry no tags, so the reader must decode the exact type that was
//! encoded.
//!
//! ```
//! use flatcol_core::ColumnStore;
//!
//! let value = (vec![1i32, 2, 3], 42i64);
//! let store = ColumnStore::from_value(&value);
//! assert_eq!(store.lengths(), &[3]);
//! assert_eq!(store.int32(), &[1, 2, 3]);
//! assert_eq!(store.int64(), &[42]);
//!
//! let decoded: (Vec<i32>, i64) = store.reader().decode().unwrap();
//! assert_eq!(decoded, value);
//! ```

mod aggregate;
mod codec;
mod column;
mod error;
mod float;
mod kind;
mod multi;
mod reader;
mod session;
mod store;
mod transport;

pub use self::aggregate::Aggregate;
pub use self::codec::{Decode, Encode};
pub use self::column::{ColumnAccess, Primitive};
pub use self::error::{DecodeError, SessionError, TransportError};
pub use self::float::OrderedF64;
pub use self::kind::PrimitiveKind;
pub use self::multi::{HashMultiMap, HashMultiSet, MultiMap, MultiSet};
pub use self::reader::{ColumnReader, Cursors};
pub use self::session::{ExchangeSession, SessionOptions};
pub use self::store::{ColumnShape, ColumnStore};
pub use self::transport::{LocalTransport, MsgpackTransport, Transport};

/// Runs `value` through an in-process exchange session and returns the
/// decoded copy.
pub fn round_trip<T: Encode + Decode>(value: &T) -> Result<T, SessionError> {
    ExchangeSession::local().exchange(value)
}
