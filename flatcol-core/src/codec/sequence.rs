//! Variable-length, position-exact sequences.
//!
//! The element count is pushed to the length column before the elements.

use std::collections::{LinkedList, VecDeque};

use super::{encode_counted, preallocation, Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

impl<T: Encode> Encode for [T] {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self);
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, store: &mut ColumnStore) {
        self.as_slice().encode(store);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        let len = reader.pull_length()?;
        let mut items = Vec::with_capacity(preallocation(len));
        for _ in 0..len {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self);
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        let len = reader.pull_length()?;
        let mut items = VecDeque::with_capacity(preallocation(len));
        for _ in 0..len {
            items.push_back(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self);
    }
}

impl<T: Decode> Decode for LinkedList<T> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        let len = reader.pull_length()?;
        let mut items = LinkedList::new();
        for _ in 0..len {
            items.push_back(T::decode(reader)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::PrimitiveKind;

    #[test]
    fn test_sequence_pushes_length_first() {
        let store = ColumnStore::from_value(&vec![-3i32; 18]);
        assert_eq!(store.lengths(), &[18]);
        assert_eq!(store.int32().len(), 18);

        let decoded: Vec<i32> = store.reader().decode().expect("Decode vec");
        assert_eq!(decoded, vec![-3; 18]);
    }

    #[test]
    fn test_nested_sequences() {
        let value = vec![vec![2i32; 5]; 10];
        let store = ColumnStore::from_value(&value);
        assert_eq!(store.lengths().len(), 11);
        assert_eq!(store.lengths()[0], 10);
        assert!(store.lengths()[1..].iter().all(|len| *len == 5));
        assert_eq!(store.int32().len(), 50);

        let mut reader = store.reader();
        let decoded: Vec<Vec<i32>> = reader.decode().expect("Decode nested vec");
        assert_eq!(decoded, value);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_empty_sequence_pulls_no_elements() {
        let store = ColumnStore::from_value(&Vec::<f64>::new());
        assert_eq!(store.lengths(), &[0]);
        assert!(store.float64().is_empty());

        let mut reader = store.reader();
        let decoded: Vec<f64> = reader.decode().expect("Decode empty vec");
        assert!(decoded.is_empty());
        assert_eq!(reader.cursors().position(PrimitiveKind::Float64), 0);
    }

    #[test]
    fn test_deque_and_list() {
        let deque: VecDeque<i64> = (0..800).map(|_| 123456789101112).collect();
        let list: LinkedList<i32> = std::iter::repeat(-9).take(42).collect();

        let mut store = ColumnStore::new();
        store.encode(&deque);
        store.encode(&list);
        assert_eq!(store.lengths(), &[800, 42]);

        let mut reader = store.reader();
        assert_eq!(reader.decode::<VecDeque<i64>>(), Ok(deque));
        assert_eq!(reader.decode::<LinkedList<i32>>(), Ok(list));
    }

    #[test]
    fn test_slice_decodes_as_vec() {
        let store = ColumnStore::from_value(&[1.5f64, 2.5][..]);
        assert_eq!(store.lengths(), &[2]);
        let decoded: Vec<f64> = store.reader().decode().expect("Decode vec");
        assert_eq!(decoded, vec![1.5, 2.5]);
    }

    #[test]
    fn test_truncated_sequence_underflows() {
        let mut store = ColumnStore::new();
        store.push_length(3);
        store.push(1i32);

        let err = store.reader().decode::<Vec<i32>>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::BufferUnderflow {
                kind: PrimitiveKind::Int32,
                position: 1,
            }
        );
    }
}
