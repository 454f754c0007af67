use super::{Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

macro_rules! primitive_codec {
    ($($t:ty),+) => {
        $(
            impl Encode for $t {
                #[inline]
                fn encode(&self, store: &mut ColumnStore) {
                    store.push(*self);
                }
            }

            impl Decode for $t {
                #[inline]
                fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
                    reader.pull::<$t>()
                }
            }
        )+
    };
}

primitive_codec!(i32, i64, f64);
