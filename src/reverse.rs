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

//! Defines [`Reverse`], the ordering that swaps the arguments of its base

use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const REVERSE_SEED: u64 = 0x7265_7665_7273_6564;

/// The reverse of the ordering `O`
///
/// `compare(x, y)` is `base.compare(y, x)`. The predicates forward to the base with
/// swapped arguments, and `max`/`min` forward to the base's `min`/`max`, so ties
/// still resolve to the left argument.
///
/// Calling [`Reverse::reverse`] returns the base ordering rather than wrapping it
/// a second time.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::I64Ordering;
/// let descending = I64Ordering.reverse();
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// assert_eq!(descending.reverse(), I64Ordering);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<O> {
    base: O,
}

impl<O> Reverse<O> {
    /// Create a new [`Reverse`] of `base`
    pub const fn new(base: O) -> Self {
        Self { base }
    }

    /// Returns the ordering this reverses
    pub fn base(&self) -> &O {
        &self.base
    }

    /// Returns the ordering this reverses
    pub fn reverse(self) -> O {
        self.base
    }

    /// Returns true if this is the reverse of `other`
    pub fn is_reverse_of(&self, other: &O) -> bool
    where
        O: PartialEq,
    {
        self.base == *other
    }
}

impl<O: Hash> Hash for Reverse<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(REVERSE_SEED);
        self.base.hash(state);
    }
}

impl<T: ?Sized, O: PartialOrdering<T>> PartialOrdering<T> for Reverse<O> {
    #[inline]
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        self.base.try_compare(y, x)
    }

    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        self.base.lt(y, x)
    }

    #[inline]
    fn gt(&self, x: &T, y: &T) -> bool {
        self.base.gt(y, x)
    }

    #[inline]
    fn lteq(&self, x: &T, y: &T) -> bool {
        self.base.lteq(y, x)
    }

    #[inline]
    fn gteq(&self, x: &T, y: &T) -> bool {
        self.base.gteq(y, x)
    }

    #[inline]
    fn equiv(&self, x: &T, y: &T) -> bool {
        self.base.equiv(y, x)
    }
}

impl<T: ?Sized, O: TotalOrdering<T>> TotalOrdering<T> for Reverse<O> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self.base.compare(y, x)
    }

    #[inline]
    fn max<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
        self.base.min(x, y)
    }

    #[inline]
    fn min<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
        self.base.max(x, y)
    }
}
