mod primitive;

use crate::kind::PrimitiveKind;
use crate::reader::Cursors;
use crate::store::ColumnStore;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Accessor methods binding a leaf type to its column.
///
/// This provides the single mapping from a Rust type to the column and read
/// cursor it owns within a [ColumnStore]. It is sealed, the set of columns is
/// closed.
pub trait ColumnAccess: Copy + bytemuck::Pod + sealed::Sealed {
    /// The kind of column values of this type are stored in.
    const KIND: PrimitiveKind;

    /// Returns a slice reference to the values in the column.
    fn values(store: &ColumnStore) -> &[Self];

    /// Returns the growable column for appending values.
    fn values_mut(store: &mut ColumnStore) -> &mut Vec<Self>;

    /// Returns the read position of the column within a decode pass.
    fn cursor(cursors: &mut Cursors) -> &mut usize;
}

/// A column type that may be used as a data field.
///
/// Implemented for `i32`, `i64` and `f64`. The length column's type (`usize`)
/// deliberately does not implement this trait, so it cannot be pushed or
/// pulled as data:
///
/// ```compile_fail
/// let mut store = flatcol_core::ColumnStore::new();
/// store.push(12usize);
/// ```
pub trait Primitive: ColumnAccess {}
