//! The typed column store.
//!
//! A store is the entire wire representation of an encoded value: one flat,
//! append-only column per primitive kind plus one column of container lengths.
//! There is no header, tag or type descriptor, the reader must know the static
//! type that was written.

use std::fmt::{Display, Formatter};
use std::ops::Add;

use crate::codec::Encode;
use crate::column::{ColumnAccess, Primitive};
use crate::kind::PrimitiveKind;
use crate::reader::ColumnReader;

#[derive(
    Debug, Default, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize,
)]
/// One growable sequence per primitive kind plus the length sequence.
pub struct ColumnStore {
    pub(crate) int32: Vec<i32>,
    pub(crate) int64: Vec<i64>,
    pub(crate) float64: Vec<f64>,
    pub(crate) lengths: Vec<usize>,
}

impl ColumnStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store with room for `capacity` values in every column.
    ///
    /// This is only a guess for the initial allocation, columns still grow
    /// as required.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slf = Self::new();
        slf.reserve(capacity);
        slf
    }

    /// Reserves room for at least `additional` more values in every column.
    pub fn reserve(&mut self, additional: usize) {
        self.int32.reserve(additional);
        self.int64.reserve(additional);
        self.float64.reserve(additional);
        self.lengths.reserve(additional);
    }

    /// Creates a store holding the encoding of `value`.
    pub fn from_value<T: Encode + ?Sized>(value: &T) -> Self {
        let mut slf = Self::new();
        slf.encode(value);
        slf
    }

    #[inline]
    /// Encodes `value` onto the end of the store's columns.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    #[inline]
    /// Appends a primitive data value to the column matching its kind.
    pub fn push<T: Primitive>(&mut self, value: T) {
        T::values_mut(self).push(value);
    }

    #[inline]
    /// Appends a container length to the length column.
    pub fn push_length(&mut self, len: usize) {
        self.lengths.push(len);
    }

    #[inline]
    /// Returns a reader with every cursor positioned at the start of its column.
    ///
    /// Creating a new reader is the only way to reset the cursors.
    pub fn reader(&self) -> ColumnReader<'_> {
        ColumnReader::new(self)
    }

    #[inline]
    /// Returns the values in the column for `T`.
    pub fn column<T: ColumnAccess>(&self) -> &[T] {
        T::values(self)
    }

    #[inline]
    pub fn int32(&self) -> &[i32] {
        &self.int32
    }

    #[inline]
    pub fn int64(&self) -> &[i64] {
        &self.int64
    }

    #[inline]
    pub fn float64(&self) -> &[f64] {
        &self.float64
    }

    #[inline]
    /// Returns the recorded container lengths in traversal order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Returns the number of values in the column of the given kind.
    pub fn len_of(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Int32 => self.int32.len(),
            PrimitiveKind::Int64 => self.int64.len(),
            PrimitiveKind::Float64 => self.float64.len(),
            PrimitiveKind::Length => self.lengths.len(),
        }
    }

    /// Returns the column of the given kind as a contiguous byte slice.
    ///
    /// The bytes are in native endianness, this is intended for handing
    /// columns to a bulk-transfer primitive between identical machines.
    pub fn column_bytes(&self, kind: PrimitiveKind) -> &[u8] {
        match kind {
            PrimitiveKind::Int32 => bytemuck::cast_slice(&self.int32),
            PrimitiveKind::Int64 => bytemuck::cast_slice(&self.int64),
            PrimitiveKind::Float64 => bytemuck::cast_slice(&self.float64),
            PrimitiveKind::Length => bytemuck::cast_slice(&self.lengths),
        }
    }

    /// Returns the number of values held in each column.
    pub fn shape(&self) -> ColumnShape {
        ColumnShape {
            int32: self.int32.len(),
            int64: self.int64.len(),
            float64: self.float64.len(),
            lengths: self.lengths.len(),
        }
    }

    /// Returns `true` if every column is empty.
    pub fn is_empty(&self) -> bool {
        self.shape().total() == 0
    }

    /// Moves every column of `other` onto the end of the matching column
    /// in this store.
    ///
    /// Per-kind order is preserved, so values encoded into `self` decode
    /// before values encoded into `other`.
    pub fn append(&mut self, mut other: ColumnStore) {
        self.int32.append(&mut other.int32);
        self.int64.append(&mut other.int64);
        self.float64.append(&mut other.float64);
        self.lengths.append(&mut other.lengths);
    }

    /// Removes every value from every column, keeping the allocations.
    pub fn clear(&mut self) {
        self.int32.clear();
        self.int64.clear();
        self.float64.clear();
        self.lengths.clear();
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
/// The number of values held in each column of a store.
pub struct ColumnShape {
    pub int32: usize,
    pub int64: usize,
    pub float64: usize,
    pub lengths: usize,
}

impl ColumnShape {
    /// Returns the number of values in the column of the given kind.
    pub fn get(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Int32 => self.int32,
            PrimitiveKind::Int64 => self.int64,
            PrimitiveKind::Float64 => self.float64,
            PrimitiveKind::Length => self.lengths,
        }
    }

    /// Returns the total number of values across every column.
    pub fn total(&self) -> usize {
        self.int32 + self.int64 + self.float64 + self.lengths
    }

    /// Returns the total number of bytes across every column.
    pub fn total_bytes(&self) -> usize {
        PrimitiveKind::ALL
            .into_iter()
            .map(|kind| self.get(kind) * kind.width())
            .sum()
    }
}

impl Add for ColumnShape {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            int32: self.int32 + other.int32,
            int64: self.int64 + other.int64,
            float64: self.float64 + other.float64,
            lengths: self.lengths + other.lengths,
        }
    }
}

impl Display for ColumnShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "int32={} int64={} float64={} length={}",
            self.int32, self.int64, self.float64, self.lengths
        )
    }
}
