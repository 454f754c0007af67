//! Column access for the primitive leaf types.
//!
//! These are the only types which are written to a store directly, everything
//! else reduces to them.

use super::{sealed, ColumnAccess, Primitive};
use crate::kind::PrimitiveKind;
use crate::reader::Cursors;
use crate::store::ColumnStore;

macro_rules! column_access {
    ($t:ty, $kind:ident, $field:ident) => {
        impl sealed::Sealed for $t {}

        impl ColumnAccess for $t {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline]
            fn values(store: &ColumnStore) -> &[Self] {
                store.$field.as_ref()
            }

            #[inline]
            fn values_mut(store: &mut ColumnStore) -> &mut Vec<Self> {
                &mut store.$field
            }

            #[inline]
            fn cursor(cursors: &mut Cursors) -> &mut usize {
                &mut cursors.$field
            }
        }
    };
}

column_access!(i32, Int32, int32);
column_access!(i64, Int64, int64);
column_access!(f64, Float64, float64);
column_access!(usize, Length, lengths);

impl Primitive for i32 {}
impl Primitive for i64 {}
impl Primitive for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_type_binds_its_own_column() {
        let mut store = ColumnStore::new();
        i32::values_mut(&mut store).push(1);
        i64::values_mut(&mut store).push(2);
        f64::values_mut(&mut store).push(3.5);
        usize::values_mut(&mut store).push(4);

        assert_eq!(i32::values(&store), &[1]);
        assert_eq!(i64::values(&store), &[2]);
        assert_eq!(f64::values(&store), &[3.5]);
        assert_eq!(usize::values(&store), &[4]);
    }

    #[test]
    fn test_each_type_binds_its_own_cursor() {
        let mut cursors = Cursors::default();
        *i64::cursor(&mut cursors) += 3;
        *usize::cursor(&mut cursors) += 1;
        assert_eq!(cursors.position(PrimitiveKind::Int32), 0);
        assert_eq!(cursors.position(PrimitiveKind::Int64), 3);
        assert_eq!(cursors.position(PrimitiveKind::Length), 1);
    }
}
