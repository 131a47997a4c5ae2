#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;

/// Ticks of one measure that play the accented click.
///
/// Values are immutable: [`AccentSet::toggled`] returns a new set, so a
/// reader holding a clone never sees a half-applied change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "AccentSetRepr"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentSet {
    indices: BTreeSet<usize>,
    /// Number of ticks in the measure the indices refer to
    len: usize,
}

impl AccentSet {
    /// The default set for a measure of `len` ticks: the downbeat only.
    pub fn downbeat(len: usize) -> Self {
        Self {
            indices: (len > 0).then_some(0).into_iter().collect(),
            len,
        }
    }

    /// Build a set from explicit indices. Indices outside the measure are dropped.
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().filter(|&i| i < len).collect(),
            len,
        }
    }

    /// Whether the tick at `tick` is accented.
    pub fn is_accented(&self, tick: usize) -> bool {
        self.indices.contains(&tick)
    }

    /// A copy with `index` flipped. Out-of-range indices return an unchanged copy.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < self.len && !next.indices.remove(&index) {
            next.indices.insert(index);
        }
        next
    }

    /// Accented ticks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Unchecked wire form; out-of-range indices are dropped on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AccentSetRepr {
    indices: BTreeSet<usize>,
    len: usize,
}

#[cfg(feature = "serde")]
impl From<AccentSetRepr> for AccentSet {
    fn from(repr: AccentSetRepr) -> Self {
        Self::from_indices(repr.len, repr.indices)
    }
}
