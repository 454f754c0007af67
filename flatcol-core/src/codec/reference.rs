//! Single-value references.
//!
//! The wrapper contributes nothing to the columns, only the referenced value
//! is written. Decoding always allocates a new value, a reference can never
//! decode to "absent".

use std::rc::Rc;
use std::sync::Arc;

use super::{Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, store: &mut ColumnStore) {
        (**self).encode(store);
    }
}

macro_rules! reference_codec {
    ($($ptr:ident),+) => {
        $(
            impl<T: Encode + ?Sized> Encode for $ptr<T> {
                #[inline]
                fn encode(&self, store: &mut ColumnStore) {
                    (**self).encode(store);
                }
            }

            impl<T: Decode> Decode for $ptr<T> {
                #[inline]
                fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
                    T::decode(reader).map($ptr::new)
                }
            }
        )+
    };
}

reference_codec!(Box, Rc, Arc);

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_box_writes_only_the_pointee() {
        let value = Box::new(9i32);
        let store = ColumnStore::from_value(&value);
        assert_eq!(store.int32(), &[9]);
        assert!(store.lengths().is_empty());

        let decoded: Box<i32> = store.reader().decode().expect("Decode box");
        assert_eq!(*decoded, 9);
    }

    #[test]
    fn test_shared_pointer_decodes_to_fresh_allocation() {
        let set: BTreeSet<i32> = [213, 890].into_iter().collect();
        let value = Rc::new(set);
        let store = ColumnStore::from_value(&value);

        let decoded: Rc<BTreeSet<i32>> = store.reader().decode().expect("Decode rc");
        assert_eq!(decoded, value);
        assert!(!Rc::ptr_eq(&decoded, &value));
        assert_eq!(Rc::strong_count(&decoded), 1);
    }

    #[test]
    fn test_arc_of_sequence() {
        let value = Arc::new(vec![1i64, 2, 3]);
        let store = ColumnStore::from_value(&value);
        assert_eq!(store.lengths(), &[3]);
        let decoded: Arc<Vec<i64>> = store.reader().decode().expect("Decode arc");
        assert_eq!(*decoded, vec![1, 2, 3]);
    }
}
