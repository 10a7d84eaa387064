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

//! Partial orderings, where some pairs of values may be incomparable

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// A strategy that compares two values of `T` where the comparison may be undefined
///
/// [`PartialOrdering::try_compare`] returns `None` when `x` and `y` are incomparable.
/// This is a normal answer and not an error.
///
/// The predicates are derived from `try_compare`, and are all `false` for an
/// incomparable pair. Implementations may override them with a faster path, provided
/// the answers agree with the derived formula, see
/// [`F64Ordering`](crate::primitive::F64Ordering) for the one documented exception.
///
/// Every [`TotalOrdering`](crate::ord::TotalOrdering) is a partial ordering that
/// always answers `Some(compare(x, y))`.
pub trait PartialOrdering<T: ?Sized> {
    /// Returns the ordering of `x` relative to `y`, or `None` if they are incomparable
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering>;

    /// Returns true if `x` strictly precedes `y`
    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        matches!(self.try_compare(x, y), Some(Ordering::Less))
    }

    /// Returns true if `x` strictly follows `y`
    #[inline]
    fn gt(&self, x: &T, y: &T) -> bool {
        matches!(self.try_compare(x, y), Some(Ordering::Greater))
    }

    /// Returns true if `x` precedes or is equivalent to `y`
    #[inline]
    fn lteq(&self, x: &T, y: &T) -> bool {
        matches!(
            self.try_compare(x, y),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns true if `x` follows or is equivalent to `y`
    #[inline]
    fn gteq(&self, x: &T, y: &T) -> bool {
        matches!(
            self.try_compare(x, y),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Returns true if `x` and `y` are equivalent under this ordering
    #[inline]
    fn equiv(&self, x: &T, y: &T) -> bool {
        matches!(self.try_compare(x, y), Some(Ordering::Equal))
    }
}

macro_rules! forward_partial {
    ($($ptr:ty),*) => {
        $(
            impl<T: ?Sized, O: PartialOrdering<T> + ?Sized> PartialOrdering<T> for $ptr {
                #[inline]
                fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
                    (**self).try_compare(x, y)
                }

                #[inline]
                fn lt(&self, x: &T, y: &T) -> bool {
                    (**self).lt(x, y)
                }

                #[inline]
                fn gt(&self, x: &T, y: &T) -> bool {
                    (**self).gt(x, y)
                }

                #[inline]
                fn lteq(&self, x: &T, y: &T) -> bool {
                    (**self).lteq(x, y)
                }

                #[inline]
                fn gteq(&self, x: &T, y: &T) -> bool {
                    (**self).gteq(x, y)
                }

                #[inline]
                fn equiv(&self, x: &T, y: &T) -> bool {
                    (**self).equiv(x, y)
                }
            }
        )*
    };
}

forward_partial!(&O, Box<O>, Arc<O>);

/// A [`PartialOrdering`] backed by the [`PartialOrd`] implementation of `T`
///
/// For floating point types this is the IEEE 754 comparison: any pair containing a
/// NaN is incomparable, and `-0.0` is equivalent to `0.0`.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::partial::{NaturalPartialOrdering, PartialOrdering};
/// let ieee = NaturalPartialOrdering::<f64>::new();
/// assert_eq!(ieee.try_compare(&1.0, &2.0), Some(Ordering::Less));
/// assert_eq!(ieee.try_compare(&1.0, &f64::NAN), None);
/// ```
pub struct NaturalPartialOrdering<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> NaturalPartialOrdering<T> {
    /// Create a new [`NaturalPartialOrdering`]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for NaturalPartialOrdering<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalPartialOrdering<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalPartialOrdering<T> {}

impl<T: ?Sized> PartialEq for NaturalPartialOrdering<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for NaturalPartialOrdering<T> {}

impl<T: ?Sized> Hash for NaturalPartialOrdering<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(0x6e61_7470_6172_7469);
    }
}

impl<T: ?Sized> Debug for NaturalPartialOrdering<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NaturalPartialOrdering<{}>", std::any::type_name::<T>())
    }
}

impl<T: PartialOrd + ?Sized> PartialOrdering<T> for NaturalPartialOrdering<T> {
    #[inline]
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        x.partial_cmp(y)
    }

    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        x < y
    }

    #[inline]
    fn gt(&self, x: &T, y: &T) -> bool {
        x > y
    }

    #[inline]
    fn lteq(&self, x: &T, y: &T) -> bool {
        x <= y
    }

    #[inline]
    fn gteq(&self, x: &T, y: &T) -> bool {
        x >= y
    }
}

/// Orders sets by inclusion
///
/// `x` precedes `y` if `x` is a proper subset of `y`, the sets are equivalent if they
/// contain the same elements, and are otherwise incomparable.
///
/// ```
/// # use std::cmp::Ordering;
/// # use std::collections::BTreeSet;
/// # use ordkit::partial::{PartialOrdering, SubsetOrdering};
/// let a = BTreeSet::from([1, 2]);
/// let b = BTreeSet::from([1, 2, 3]);
/// let c = BTreeSet::from([4]);
/// assert_eq!(SubsetOrdering.try_compare(&a, &b), Some(Ordering::Less));
/// assert_eq!(SubsetOrdering.try_compare(&a, &c), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetOrdering;

fn subset_order(x_in_y: bool, y_in_x: bool) -> Option<Ordering> {
    match (x_in_y, y_in_x) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

impl<E: Ord> PartialOrdering<BTreeSet<E>> for SubsetOrdering {
    fn try_compare(&self, x: &BTreeSet<E>, y: &BTreeSet<E>) -> Option<Ordering> {
        let x_in_y = x.len() <= y.len() && x.is_subset(y);
        let y_in_x = y.len() <= x.len() && y.is_subset(x);
        subset_order(x_in_y, y_in_x)
    }
}

impl<E: Eq + Hash, S: BuildHasher> PartialOrdering<HashSet<E, S>> for SubsetOrdering {
    fn try_compare(&self, x: &HashSet<E, S>, y: &HashSet<E, S>) -> Option<Ordering> {
        let x_in_y = x.len() <= y.len() && x.is_subset(y);
        let y_in_x = y.len() <= x.len() && y.is_subset(x);
        subset_order(x_in_y, y_in_x)
    }
}
