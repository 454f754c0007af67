//! A totally ordered `f64` for use as a set element or map key.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::codec::{Decode, Encode};
use crate::error::DecodeError;
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

#[derive(Debug, Default, Copy, Clone)]
/// An `f64` ordered by [f64::total_cmp].
///
/// Equality and hashing compare the bit pattern, so `-0.0` and `0.0` are
/// distinct values and a NaN is equal to itself. The value is stored in the
/// Float64 column exactly as a plain `f64` would be, so a sequence of
/// `OrderedF64` and a sequence of `f64` have the same layout.
pub struct OrderedF64(pub f64);

impl OrderedF64 {
    #[inline]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for OrderedF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for OrderedF64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<OrderedF64> for f64 {
    fn from(value: OrderedF64) -> Self {
        value.0
    }
}

impl Encode for OrderedF64 {
    #[inline]
    fn encode(&self, store: &mut ColumnStore) {
        store.push(self.0);
    }
}

impl Decode for OrderedF64 {
    #[inline]
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        reader.pull::<f64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;
    use crate::multi::MultiSet;

    #[test]
    fn test_total_order_handles_signed_zero_and_nan() {
        let mut values = [
            OrderedF64(f64::NAN),
            OrderedF64(1.5),
            OrderedF64(0.0),
            OrderedF64(-0.0),
            OrderedF64(f64::NEG_INFINITY),
        ];
        values.sort();
        assert_eq!(values[0], OrderedF64(f64::NEG_INFINITY));
        assert_eq!(values[1].get().to_bits(), (-0.0f64).to_bits());
        assert_eq!(values[2].get().to_bits(), 0.0f64.to_bits());
        assert_eq!(values[3], OrderedF64(1.5));
        assert!(values[4].get().is_nan());
        assert_eq!(OrderedF64(f64::NAN), OrderedF64(f64::NAN));
    }

    #[test]
    fn test_float_set_lands_in_float_column() {
        let set: BTreeSet<OrderedF64> = [3.0, 1.5, 2.5].into_iter().map(OrderedF64).collect();
        let store = ColumnStore::from_value(&set);
        assert_eq!(store.lengths(), &[3]);
        assert_eq!(store.float64(), &[1.5, 2.5, 3.0]);

        let decoded: BTreeSet<OrderedF64> = store.reader().decode().expect("Decode set");
        assert_eq!(decoded, set);

        // The same columns read back as plain floats.
        let plain: Vec<f64> = store.reader().decode().expect("Decode sequence");
        assert_eq!(plain, [1.5, 2.5, 3.0]);
    }

    #[test]
    fn test_float_pairs_in_multiset_and_hash_set() {
        let pairs = [(84, OrderedF64(2.01)), (21, OrderedF64(4.02)), (84, OrderedF64(2.01))];

        let multiset: MultiSet<(i32, OrderedF64)> = pairs.into_iter().collect();
        let store = ColumnStore::from_value(&multiset);
        assert_eq!(store.int32(), &[21, 84, 84]);
        assert_eq!(store.float64(), &[4.02, 2.01, 2.01]);
        let decoded: MultiSet<(i32, OrderedF64)> =
            store.reader().decode().expect("Decode multiset");
        assert_eq!(decoded.count(&(84, OrderedF64(2.01))), 2);

        let hashed: HashSet<(i32, OrderedF64)> = pairs.into_iter().collect();
        let store = ColumnStore::from_value(&hashed);
        let decoded: HashSet<(i32, OrderedF64)> = store.reader().decode().expect("Decode set");
        assert_eq!(decoded, hashed);
    }
}
