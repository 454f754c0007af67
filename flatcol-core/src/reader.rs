//! Read cursors over a column store.

use crate::codec::Decode;
use crate::column::{ColumnAccess, Primitive};
use crate::error::DecodeError;
use crate::kind::PrimitiveKind;
use crate::store::ColumnStore;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
/// One read position per column.
pub struct Cursors {
    pub(crate) int32: usize,
    pub(crate) int64: usize,
    pub(crate) float64: usize,
    pub(crate) lengths: usize,
}

impl Cursors {
    /// Returns the read position of the column of the given kind.
    pub fn position(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Int32 => self.int32,
            PrimitiveKind::Int64 => self.int64,
            PrimitiveKind::Float64 => self.float64,
            PrimitiveKind::Length => self.lengths,
        }
    }
}

/// A single decode pass over a [ColumnStore].
///
/// The reader borrows the store immutably and exclusively owns its cursors,
/// so a store can't be written to while it is being read, and several readers
/// (for example one per thread) can decode the same columns independently.
///
/// Values must be decoded with the exact types, in the exact order, they were
/// encoded with. The columns carry no tags, so decoding a different type
/// produces wrong values rather than an error unless a column runs out.
pub struct ColumnReader<'a> {
    store: &'a ColumnStore,
    cursors: Cursors,
}

impl<'a> ColumnReader<'a> {
    /// Creates a reader with every cursor at the start of its column.
    pub fn new(store: &'a ColumnStore) -> Self {
        Self {
            store,
            cursors: Cursors::default(),
        }
    }

    #[inline]
    /// Pulls the next primitive data value of type `T`.
    pub fn pull<T: Primitive>(&mut self) -> Result<T, DecodeError> {
        self.next_value::<T>()
    }

    #[inline]
    /// Pulls the next container length.
    pub fn pull_length(&mut self) -> Result<usize, DecodeError> {
        self.next_value::<usize>()
    }

    #[inline]
    /// Decodes the next value of type `T`.
    pub fn decode<T: Decode>(&mut self) -> Result<T, DecodeError> {
        T::decode(self)
    }

    /// Decodes `count` consecutive values of type `T`.
    ///
    /// This is how the concatenated columns of a gather are split back into
    /// one value per participant.
    pub fn decode_all<T: Decode>(&mut self, count: usize) -> Result<Vec<T>, DecodeError> {
        let mut values = Vec::with_capacity(count.min(crate::codec::MAX_PREALLOCATION));
        for _ in 0..count {
            values.push(T::decode(self)?);
        }
        Ok(values)
    }

    #[inline]
    /// Returns the current cursor positions.
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Returns the number of unread values in the column of the given kind.
    pub fn remaining(&self, kind: PrimitiveKind) -> usize {
        self.store.len_of(kind) - self.cursors.position(kind)
    }

    /// Returns `true` if every column has been read to the end.
    pub fn is_exhausted(&self) -> bool {
        PrimitiveKind::ALL
            .into_iter()
            .all(|kind| self.remaining(kind) == 0)
    }

    /// Ends the pass, returning an error if any column has unread values.
    pub fn finish(self) -> Result<(), DecodeError> {
        for kind in PrimitiveKind::ALL {
            let remaining = self.remaining(kind);
            if remaining > 0 {
                return Err(DecodeError::TrailingData { kind, remaining });
            }
        }
        Ok(())
    }

    fn next_value<T: ColumnAccess>(&mut self) -> Result<T, DecodeError> {
        let position = T::cursor(&mut self.cursors);
        match T::values(self.store).get(*position) {
            Some(value) => {
                *position += 1;
                Ok(*value)
            },
            None => Err(DecodeError::BufferUnderflow {
                kind: T::KIND,
                position: *position,
            }),
        }
    }
}
