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

//! Ordering of optional values

use crate::options::SortOptions;
use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use crate::registry::HasOrdering;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const OPTION_SEED: u64 = 0x6f70_7469_6f6e_616c;

/// Orders `Option<T>` with `O` ordering the present values
///
/// With the default [`SortOptions`]:
///
/// * `None` is equivalent to `None`
/// * `None` precedes any `Some`
/// * `Some(a)` and `Some(b)` compare as `a` and `b` do under `O`
///
/// [`SortOptions::nulls_first`] moves `None` after every present value, and
/// [`SortOptions::descending`] reverses the order of present values only, leaving the
/// placement of `None` unchanged.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::option::option;
/// # use ordkit::options::SortOptions;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::I32Ordering;
/// let ordering = option(I32Ordering);
/// assert_eq!(ordering.compare(&None, &Some(5)), Ordering::Less);
/// assert_eq!(ordering.compare(&Some(5), &Some(5)), Ordering::Equal);
/// assert_eq!(ordering.compare(&Some(5), &None), Ordering::Greater);
///
/// let ordering = ordering.with_options(SortOptions::default().desc().nulls_last());
/// assert_eq!(ordering.compare(&Some(1), &Some(5)), Ordering::Greater);
/// assert_eq!(ordering.compare(&None, &Some(5)), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionOrdering<O> {
    base: O,
    options: SortOptions,
}

/// Returns an [`OptionOrdering`] that places `None` first and orders present values
/// with `base`
pub const fn option<O>(base: O) -> OptionOrdering<O> {
    OptionOrdering::new(base)
}

impl<O> OptionOrdering<O> {
    /// Create a new [`OptionOrdering`] with the default [`SortOptions`]
    pub const fn new(base: O) -> Self {
        Self {
            base,
            options: SortOptions::new(false, true),
        }
    }

    /// Returns a copy of this ordering configured with `options`
    pub fn with_options(self, options: SortOptions) -> Self {
        Self {
            base: self.base,
            options,
        }
    }

    /// Returns the ordering of present values
    pub fn base(&self) -> &O {
        &self.base
    }

    /// Returns the [`SortOptions`] of this ordering
    pub fn options(&self) -> SortOptions {
        self.options
    }
}

impl<O: Default> Default for OptionOrdering<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: Hash> Hash for OptionOrdering<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(OPTION_SEED);
        self.base.hash(state);
        self.options.hash(state);
    }
}

impl<T, O: PartialOrdering<T>> PartialOrdering<Option<T>> for OptionOrdering<O> {
    fn try_compare(&self, x: &Option<T>, y: &Option<T>) -> Option<Ordering> {
        match (x, y) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(self.options.none_vs_some()),
            (Some(_), None) => Some(self.options.none_vs_some().reverse()),
            (Some(x), Some(y)) => self
                .base
                .try_compare(x, y)
                .map(|o| self.options.direct(o)),
        }
    }
}

impl<T, O: TotalOrdering<T>> TotalOrdering<Option<T>> for OptionOrdering<O> {
    fn compare(&self, x: &Option<T>, y: &Option<T>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => self.options.none_vs_some(),
            (Some(_), None) => self.options.none_vs_some().reverse(),
            (Some(x), Some(y)) => self.options.direct(self.base.compare(x, y)),
        }
    }
}

impl<T: HasOrdering> HasOrdering for Option<T> {
    type Ordering = OptionOrdering<T::Ordering>;
    const ORDERING: Self::Ordering = OptionOrdering::new(T::ORDERING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partial::NaturalPartialOrdering;
    use crate::primitive::{I32Ordering, StrOrdering};
    use crate::registry::ordering;
    use crate::reverse::Reverse;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(h: &H) -> u64 {
        let mut s = DefaultHasher::new();
        h.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_none_first() {
        let ordering = option(I32Ordering);
        assert_eq!(ordering.compare(&None, &Some(5)), Ordering::Less);
        assert_eq!(ordering.compare(&Some(5), &Some(5)), Ordering::Equal);
        assert_eq!(ordering.compare(&Some(5), &None), Ordering::Greater);
        assert_eq!(ordering.compare(&None, &None), Ordering::Equal);
        assert_eq!(ordering.compare(&None, &Some(i32::MIN)), Ordering::Less);
        assert_eq!(ordering.compare(&Some(1), &Some(2)), Ordering::Less);
    }

    #[test]
    fn test_options() {
        let values = vec![Some(2), None, Some(1), Some(3), None];
        let cases = [
            (
                SortOptions::new(false, true),
                vec![None, None, Some(1), Some(2), Some(3)],
            ),
            (
                SortOptions::new(false, false),
                vec![Some(1), Some(2), Some(3), None, None],
            ),
            (
                SortOptions::new(true, true),
                vec![None, None, Some(3), Some(2), Some(1)],
            ),
            (
                SortOptions::new(true, false),
                vec![Some(3), Some(2), Some(1), None, None],
            ),
        ];

        for (options, expected) in cases {
            let ordering = option(I32Ordering).with_options(options);
            let mut v = values.clone();
            v.sort_by(|a, b| ordering.compare(a, b));
            assert_eq!(v, expected, "{options}");
        }
    }

    #[test]
    fn test_reverse_moves_none_last() {
        let ordering = Reverse::new(option(StrOrdering));
        assert_eq!(ordering.compare(&None, &Some("a")), Ordering::Greater);
        assert_eq!(ordering.compare(&Some("a"), &Some("b")), Ordering::Greater);
    }

    #[test]
    fn test_partial_values() {
        let ordering = option(NaturalPartialOrdering::<f64>::new());
        assert_eq!(ordering.try_compare(&None, &Some(f64::NAN)), Some(Ordering::Less));
        assert_eq!(ordering.try_compare(&Some(1.0), &Some(f64::NAN)), None);

        let ordering = ordering.with_options(SortOptions::default().desc().nulls_last());
        assert_eq!(ordering.try_compare(&Some(1.0), &Some(2.0)), Some(Ordering::Greater));
        assert_eq!(ordering.try_compare(&None, &Some(f64::NAN)), Some(Ordering::Greater));
        assert_eq!(ordering.try_compare(&Some(2.0), &Some(f64::NAN)), None);
    }

    #[test]
    fn test_equality() {
        assert_eq!(ordering::<Option<i32>>(), option(I32Ordering));
        assert_eq!(
            hash_of(&option(I32Ordering)),
            hash_of(&ordering::<Option<i32>>())
        );
        let last = option(I32Ordering).with_options(SortOptions::default().nulls_last());
        assert_ne!(last, option(I32Ordering));
        assert_ne!(hash_of(&last), hash_of(&option(I32Ordering)));
    }
}
