//! Encode and decode rules for every supported shape.
//!
//! Each rule is a pair of trait implementations which must visit the same
//! structure in the same order:
//!
//! - Primitives write to and read from the column matching their kind.
//! - Tuples and fixed-size arrays visit each element in index order with no
//!   length recorded.
//! - Sequences, sets and maps record their element count in the length
//!   column, then visit each element (for maps: key then value).
//! - References visit the referenced value and always decode into a freshly
//!   allocated one.
//! - User types participate through [Aggregate](crate::Aggregate).

mod array;
mod collection;
mod primitive;
mod reference;
mod sequence;
mod tuple;

use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

/// The largest number of elements a decoder reserves up front.
///
/// Lengths come from the columns, so a reservation is only a hint and is
/// capped to keep a misaligned decode from attempting a huge allocation.
pub(crate) const MAX_PREALLOCATION: usize = 4096;

/// A type that can be decomposed into a [ColumnStore].
///
/// The sequence of pushes is fully determined by the value's content: there is
/// no padding and no metadata other than the lengths of variable-size
/// containers.
///
/// The length column's type can't be encoded as data:
///
/// ```compile_fail
/// use flatcol_core::{ColumnStore, Encode};
///
/// let mut store = ColumnStore::new();
/// 5usize.encode(&mut store);
/// ```
pub trait Encode {
    /// Appends the encoding of `self` onto the store's columns.
    fn encode(&self, store: &mut ColumnStore);
}

/// A type that can be reconstructed from a [ColumnReader].
///
/// Decoding must mirror [Encode] exactly. Decoding with a type whose
/// traversal differs from the encoded type is not detected unless a column
/// runs out, it is the caller's obligation to read back the type it wrote.
pub trait Decode: Sized {
    /// Decodes the next value from the reader.
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError>;

    /// Decodes the next value from the reader, overwriting `self`.
    fn decode_into(&mut self, reader: &mut ColumnReader<'_>) -> Result<(), DecodeError> {
        *self = Self::decode(reader)?;
        Ok(())
    }
}

#[inline]
pub(crate) fn preallocation(len: usize) -> usize {
    len.min(MAX_PREALLOCATION)
}

/// Pushes `len` then encodes each item in iteration order.
pub(crate) fn encode_counted<'a, T, I>(store: &mut ColumnStore, len: usize, items: I)
where
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    store.push_length(len);
    for item in items {
        item.encode(store);
    }
}

/// Pushes `len` then encodes each entry as its key followed by its value.
pub(crate) fn encode_entries<'a, K, V, I>(store: &mut ColumnStore, len: usize, entries: I)
where
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    store.push_length(len);
    for (key, value) in entries {
        key.encode(store);
        value.encode(store);
    }
}
