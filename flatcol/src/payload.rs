//! Synthetic payloads exercising every kind of nesting the codec supports.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result};
use flatcol_core::{aggregate, MultiMap, MultiSet};

#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    id: i64,
    rows: Vec<Vec<i32>>,
    weights: BTreeMap<i32, Vec<f64>>,
    tags: MultiSet<i64>,
    groups: MultiMap<i32, HashSet<i64>>,
    origin: Box<(f64, f64)>,
    checksum: [i64; 2],
}

aggregate!(Payload {
    id,
    rows,
    weights,
    tags,
    groups,
    origin,
    checksum,
});

impl Payload {
    /// Builds a deterministic payload of `outer` rows of `inner` values each.
    ///
    /// Every generated value must fit in an `i32`, larger dimensions are
    /// rejected rather than wrapped.
    pub fn generate(seed: i64, outer: usize, inner: usize) -> Result<Self> {
        outer
            .checked_mul(inner)
            .and_then(|cells| i32::try_from(cells).ok())
            .with_context(|| format!("A payload of {outer}x{inner} values is too large"))?;
        let row_len = inner;
        let outer = i32::try_from(outer).context("Too many payload rows")?;
        let inner = i32::try_from(inner).context("Too many values per row")?;

        let rows: Vec<Vec<i32>> = (0..outer)
            .map(|row| (0..inner).map(|col| row * inner + col).collect())
            .collect();

        let weights: BTreeMap<i32, Vec<f64>> = (0..outer)
            .map(|key| (key, vec![f64::from(key) * 0.25; row_len]))
            .collect();

        // Every tag is inserted twice so duplicates are always present.
        let tags: MultiSet<i64> = (0..i64::from(outer))
            .map(|tag| seed.wrapping_add(tag))
            .flat_map(|tag| [tag, tag])
            .collect();

        let groups: MultiMap<i32, HashSet<i64>> = (0..outer)
            .map(|group| {
                let start = i64::from(group);
                (group % 3, (start..start + i64::from(inner)).collect())
            })
            .collect();

        let checksum = rows
            .iter()
            .flatten()
            .map(|value| i64::from(*value))
            .fold([seed, 0], |[sum, xor], value| [sum.wrapping_add(value), xor ^ value]);

        Ok(Self {
            id: seed,
            rows,
            weights,
            tags,
            groups,
            origin: Box::new((seed as f64, -(seed as f64))),
            checksum,
        })
    }
}
