// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Adapts an ordering to [`Ord`]

use crate::ord::TotalOrdering;
use std::cmp::Ordering;

/// A value paired with a [`TotalOrdering`], implementing [`Ord`] with it
///
/// This lets standard containers that require [`Ord`], such as
/// [`BinaryHeap`](std::collections::BinaryHeap) and
/// [`BTreeSet`](std::collections::BTreeSet), use any ordering. Equality is
/// equivalence under the ordering, so it agrees with [`Ord::cmp`]. Only `compare` of
/// the ordering is used, hence a float ordering places NaN last.
///
/// Comparing two `Keyed` uses the ordering of the left operand, so all values in one
/// container should share an ordering.
///
/// ```
/// # use std::collections::BinaryHeap;
/// # use ordkit::keyed::Keyed;
/// # use ordkit::primitive::I32_REVERSE;
/// let mut heap: BinaryHeap<_> = [3, 1, 2]
///     .into_iter()
///     .map(|v| Keyed::new(v, I32_REVERSE))
///     .collect();
/// // a max-heap under the reversed ordering pops the smallest value first
/// assert_eq!(heap.pop().map(Keyed::into_inner), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyed<T, O> {
    value: T,
    ordering: O,
}

impl<T, O> Keyed<T, O> {
    /// Create a new [`Keyed`]
    pub const fn new(value: T, ordering: O) -> Self {
        Self { value, ordering }
    }

    /// Returns a reference to the value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the ordering
    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    /// Returns the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, O: TotalOrdering<T>> PartialEq for Keyed<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.ordering.compare(&self.value, &other.value).is_eq()
    }
}

impl<T, O: TotalOrdering<T>> Eq for Keyed<T, O> {}

impl<T, O: TotalOrdering<T>> PartialOrd for Keyed<T, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, O: TotalOrdering<T>> Ord for Keyed<T, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering.compare(&self.value, &other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{F64Ordering, StrOrdering};
    use crate::projection::by;
    use std::collections::{BTreeSet, BinaryHeap};

    #[test]
    fn test_btree_set_dedups_equivalent() {
        let ordering = by(|s: &&str| s.len());
        let mut set = BTreeSet::new();
        for s in ["bb", "a", "cc", "ddd", "e"] {
            set.insert(Keyed::new(s, &ordering));
        }
        let values: Vec<_> = set.into_iter().map(Keyed::into_inner).collect();
        // first inserted of each length survives
        assert_eq!(values, vec!["a", "bb", "ddd"]);
    }

    #[test]
    fn test_heap_with_floats() {
        let mut heap: BinaryHeap<_> = [1.5, f64::NAN, -2.0, 8.0]
            .into_iter()
            .map(|v| Keyed::new(v, F64Ordering))
            .collect();
        assert!(heap.pop().map(Keyed::into_inner).unwrap().is_nan());
        assert_eq!(heap.pop().map(Keyed::into_inner), Some(8.0));
        assert_eq!(heap.pop().map(Keyed::into_inner), Some(1.5));
    }

    #[test]
    fn test_std_sort() {
        let mut v: Vec<_> = ["b", "c", "a"]
            .into_iter()
            .map(|s| Keyed::new(s, StrOrdering.reverse()))
            .collect();
        v.sort();
        let v: Vec<_> = v.iter().map(|k| *k.value()).collect();
        assert_eq!(v, vec!["c", "b", "a"]);
        assert_eq!(Keyed::new("a", StrOrdering), Keyed::new("a", StrOrdering));
    }
}
