//! Tuples of up to twelve elements, including the pair.
//!
//! Elements are visited in index order and no length is recorded, the arity
//! is static.

use super::{Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

impl Encode for () {
    #[inline]
    fn encode(&self, _store: &mut ColumnStore) {}
}

impl Decode for () {
    #[inline]
    fn decode(_reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        Ok(())
    }
}

macro_rules! tuple_codec {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[inline]
            fn encode(&self, store: &mut ColumnStore) {
                $( self.$idx.encode(store); )+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            #[inline]
            fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
                Ok(( $( $name::decode(reader)?, )+ ))
            }
        }
    };
}

tuple_codec!(A: 0);
tuple_codec!(A: 0, B: 1);
tuple_codec!(A: 0, B: 1, C: 2);
tuple_codec!(A: 0, B: 1, C: 2, D: 3);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
tuple_codec!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);
