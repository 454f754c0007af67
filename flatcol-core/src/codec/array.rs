use super::{Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

// Fixed width, the count is known to both sides so no length is recorded.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, store: &mut ColumnStore) {
        for item in self {
            item.encode(store);
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(reader)?);
        }

        match items.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("exactly N items were decoded"),
        }
    }
}
