//! The extension point for user-defined aggregate types.

use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

/// A user-defined type made of an ordered sequence of encodable fields.
///
/// Both methods must visit the same fields in the same order, the store has
/// no way of checking this. Types implementing this trait are wired into
/// [Encode](crate::Encode) and [Decode](crate::Decode) with
/// [impl_aggregate!](crate::impl_aggregate), or the [aggregate!](crate::aggregate)
/// macro can generate both methods from a single field list.
///
/// ```
/// use flatcol_core::{Aggregate, ColumnReader, ColumnStore, Decode, DecodeError, Encode};
///
/// #[derive(Debug, PartialEq)]
/// struct Sample {
///     id: i64,
///     readings: Vec<f64>,
/// }
///
/// impl Aggregate for Sample {
///     fn encode_fields(&self, store: &mut ColumnStore) {
///         self.id.encode(store);
///         self.readings.encode(store);
///     }
///
///     fn decode_fields(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
///         let id = reader.decode()?;
///         let readings = reader.decode()?;
///         Ok(Self { id, readings })
///     }
/// }
///
/// flatcol_core::impl_aggregate!(Sample);
///
/// let sample = Sample { id: 4, readings: vec![0.5, 1.5] };
/// let store = ColumnStore::from_value(&sample);
/// assert_eq!(store.lengths(), &[2]);
/// assert_eq!(store.reader().decode::<Sample>().unwrap(), sample);
/// ```
pub trait Aggregate: Sized {
    /// Encodes each field in declaration order.
    fn encode_fields(&self, store: &mut ColumnStore);

    /// Decodes each field in the same order [Aggregate::encode_fields] wrote them.
    fn decode_fields(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError>;
}

#[macro_export]
/// Implements [Encode](crate::Encode) and [Decode](crate::Decode) for one or
/// more types by forwarding to their [Aggregate](crate::Aggregate) implementation.
macro_rules! impl_aggregate {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                #[inline]
                fn encode(&self, store: &mut $crate::ColumnStore) {
                    $crate::Aggregate::encode_fields(self, store)
                }
            }

            impl $crate::Decode for $ty {
                #[inline]
                fn decode(
                    reader: &mut $crate::ColumnReader<'_>,
                ) -> ::std::result::Result<Self, $crate::DecodeError> {
                    <$ty as $crate::Aggregate>::decode_fields(reader)
                }
            }
        )+
    };
}

#[macro_export]
/// Implements [Aggregate](crate::Aggregate), [Encode](crate::Encode) and
/// [Decode](crate::Decode) for a struct from its ordered field list.
///
/// Encoding and decoding both follow the order the fields are listed in.
/// Every field of the struct must be listed.
///
/// ```
/// use flatcol_core::ColumnStore;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: f64,
///     y: f64,
///     tag: i32,
/// }
///
/// flatcol_core::aggregate!(Point { x, y, tag });
///
/// let point = Point { x: 1.0, y: -2.0, tag: 7 };
/// let store = ColumnStore::from_value(&point);
/// assert_eq!(store.float64(), &[1.0, -2.0]);
/// assert_eq!(store.reader().decode::<Point>().unwrap(), point);
/// ```
macro_rules! aggregate {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Aggregate for $ty {
            fn encode_fields(&self, store: &mut $crate::ColumnStore) {
                $( $crate::Encode::encode(&self.$field, store); )+
            }

            fn decode_fields(
                reader: &mut $crate::ColumnReader<'_>,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                // Struct expression fields evaluate in the order written.
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::Decode::decode(reader)?, )+
                })
            }
        }

        $crate::impl_aggregate!($ty);
    };
}
