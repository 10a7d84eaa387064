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

//! Contains the [`TotalOrdering`] trait and orderings built from functions

use crate::partial::PartialOrdering;
use crate::projection::{By, On};
use crate::registry::HasOrdering;
use crate::reverse::Reverse;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// A shareable, type-erased [`TotalOrdering`]
pub type DynOrdering<T> = Arc<dyn TotalOrdering<T> + Send + Sync>;

/// A strategy that defines a total order over values of `T`
///
/// [`TotalOrdering::compare`] returns [`Ordering::Less`] if `x` precedes `y`,
/// [`Ordering::Greater`] if `x` follows `y` and [`Ordering::Equal`] if they are
/// equivalent. It must be consistent, antisymmetric and transitive, this is not
/// checked.
///
/// The [`PartialOrdering`] supertrait must answer `Some(self.compare(x, y))`, its
/// predicates then follow from `compare`:
///
/// * `lt(x, y)` is `compare(x, y) < 0`
/// * `gt(x, y)` is `compare(x, y) > 0`
/// * `lteq(x, y)` is `compare(x, y) <= 0`
/// * `gteq(x, y)` is `compare(x, y) >= 0`
/// * `equiv(x, y)` is `compare(x, y) == 0`
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::partial::PartialOrdering;
/// # use ordkit::primitive::I32Ordering;
/// let ordering = I32Ordering.reverse();
/// assert_eq!(ordering.compare(&1, &2), Ordering::Greater);
/// assert!(ordering.lt(&2, &1));
/// assert_eq!(*ordering.max(&1, &2), 1);
/// ```
pub trait TotalOrdering<T: ?Sized>: PartialOrdering<T> {
    /// Returns the ordering of `x` relative to `y`
    fn compare(&self, x: &T, y: &T) -> Ordering;

    /// Returns the greater of `x` and `y`, or `x` if they are equivalent
    #[inline]
    fn max<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
        match self.gteq(x, y) {
            true => x,
            false => y,
        }
    }

    /// Returns the lesser of `x` and `y`, or `x` if they are equivalent
    #[inline]
    fn min<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
        match self.lteq(x, y) {
            true => x,
            false => y,
        }
    }

    /// Returns the reverse of this ordering
    ///
    /// Reversing a [`Reverse`] returns the original ordering
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Returns an ordering of `U` that compares the values `f` projects them to
    ///
    /// `f` is evaluated for both arguments on every comparison
    fn on<U, F>(self, f: F) -> On<T, Self, F>
    where
        Self: Sized,
        T: Sized,
        U: ?Sized,
        F: Fn(&U) -> T,
    {
        On::new(self, f)
    }

    /// Returns an ordering that falls back to `other` for values this ordering
    /// considers equivalent
    fn then<O>(self, other: O) -> ThenOrdering<Self, O>
    where
        Self: Sized,
        O: TotalOrdering<T>,
    {
        ThenOrdering::new(self, other)
    }

    /// Returns an ordering that falls back to the canonical ordering of `f(x)` for
    /// values this ordering considers equivalent
    fn then_by<K, F>(self, f: F) -> ThenOrdering<Self, By<K, K::Ordering, F>>
    where
        Self: Sized,
        K: HasOrdering,
        F: Fn(&T) -> K,
    {
        ThenOrdering::new(self, By::new(f, K::ORDERING))
    }
}

macro_rules! forward_total {
    ($($ptr:ty),*) => {
        $(
            impl<T: ?Sized, O: TotalOrdering<T> + ?Sized> TotalOrdering<T> for $ptr {
                #[inline]
                fn compare(&self, x: &T, y: &T) -> Ordering {
                    (**self).compare(x, y)
                }

                #[inline]
                fn max<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
                    (**self).max(x, y)
                }

                #[inline]
                fn min<'a>(&self, x: &'a T, y: &'a T) -> &'a T {
                    (**self).min(x, y)
                }
            }
        )*
    };
}

forward_total!(&O, Box<O>, Arc<O>);

/// A [`TotalOrdering`] backed by the [`Ord`] implementation of `T`
pub struct NaturalOrdering<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> NaturalOrdering<T> {
    /// Create a new [`NaturalOrdering`]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for NaturalOrdering<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalOrdering<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrdering<T> {}

impl<T: ?Sized> PartialEq for NaturalOrdering<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for NaturalOrdering<T> {}

impl<T: ?Sized> Hash for NaturalOrdering<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(0x6e61_7475_7261_6c00);
    }
}

impl<T: ?Sized> Debug for NaturalOrdering<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NaturalOrdering<{}>", std::any::type_name::<T>())
    }
}

impl<T: Ord + ?Sized> PartialOrdering<T> for NaturalOrdering<T> {
    #[inline]
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        Some(x.cmp(y))
    }
}

impl<T: Ord + ?Sized> TotalOrdering<T> for NaturalOrdering<T> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        x.cmp(y)
    }
}

/// A [`TotalOrdering`] that calls a comparison function, see [`from_fn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FnOrdering<F>(F);

/// Returns a [`TotalOrdering`] that calls `f` to compare values
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::{from_fn, TotalOrdering};
/// let by_len = from_fn(|a: &String, b: &String| a.len().cmp(&b.len()));
/// assert_eq!(by_len.compare(&"ab".to_string(), &"c".to_string()), Ordering::Greater);
/// ```
pub fn from_fn<T, F>(f: F) -> FnOrdering<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FnOrdering(f)
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> PartialOrdering<T> for FnOrdering<F> {
    #[inline]
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        Some((self.0)(x, y))
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> TotalOrdering<T> for FnOrdering<F> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (self.0)(x, y)
    }
}

/// A [`TotalOrdering`] defined by a strict "less than" function, see [`from_less_than`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FromLessThan<F>(F);

/// Returns a [`TotalOrdering`] from a strict "less than" function
///
/// `compare(x, y)` is `Less` if `lt(x, y)`, else `Greater` if `lt(y, x)`, else
/// `Equal`. The `lt`, `gt`, `lteq` and `gteq` predicates call `lt` exactly once.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::{from_less_than, TotalOrdering};
/// # use ordkit::partial::PartialOrdering;
/// let descending = from_less_than(|a: &i32, b: &i32| a > b);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// assert!(descending.lt(&2, &1));
/// ```
pub fn from_less_than<T, F>(lt: F) -> FromLessThan<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    FromLessThan(lt)
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> PartialOrdering<T> for FromLessThan<F> {
    #[inline]
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        Some(self.compare(x, y))
    }

    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        (self.0)(x, y)
    }

    #[inline]
    fn gt(&self, x: &T, y: &T) -> bool {
        (self.0)(y, x)
    }

    #[inline]
    fn lteq(&self, x: &T, y: &T) -> bool {
        !(self.0)(y, x)
    }

    #[inline]
    fn gteq(&self, x: &T, y: &T) -> bool {
        !(self.0)(x, y)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> TotalOrdering<T> for FromLessThan<F> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        if (self.0)(x, y) {
            Ordering::Less
        } else if (self.0)(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

const THEN_SEED: u64 = 0x7468_656e_6f72_6472;

/// Orders by `first`, falling back to `second` for values `first` considers equivalent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThenOrdering<A, B> {
    first: A,
    second: B,
}

impl<A, B> ThenOrdering<A, B> {
    /// Create a new [`ThenOrdering`]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the primary ordering
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns the ordering used to break ties
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Hash, B: Hash> Hash for ThenOrdering<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(THEN_SEED);
        self.first.hash(state);
        self.second.hash(state);
    }
}

impl<T, A, B> PartialOrdering<T> for ThenOrdering<A, B>
where
    T: ?Sized,
    A: PartialOrdering<T>,
    B: PartialOrdering<T>,
{
    fn try_compare(&self, x: &T, y: &T) -> Option<Ordering> {
        match self.first.try_compare(x, y)? {
            Ordering::Equal => self.second.try_compare(x, y),
            o => Some(o),
        }
    }
}

impl<T, A, B> TotalOrdering<T> for ThenOrdering<A, B>
where
    T: ?Sized,
    A: TotalOrdering<T>,
    B: TotalOrdering<T>,
{
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self.first
            .compare(x, y)
            .then_with(|| self.second.compare(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{I32Ordering, StrOrdering};
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(h: &H) -> u64 {
        let mut s = DefaultHasher::new();
        h.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_derived_predicates() {
        let ordering = from_fn(|a: &i32, b: &i32| a.cmp(b));
        for (a, b) in [(1, 2), (2, 1), (3, 3)] {
            let c = ordering.compare(&a, &b);
            assert_eq!(ordering.lt(&a, &b), c.is_lt());
            assert_eq!(ordering.gt(&a, &b), c.is_gt());
            assert_eq!(ordering.lteq(&a, &b), c.is_le());
            assert_eq!(ordering.gteq(&a, &b), c.is_ge());
            assert_eq!(ordering.equiv(&a, &b), c.is_eq());
            assert_eq!(ordering.try_compare(&a, &b), Some(c));
        }
    }

    #[test]
    fn test_max_min_left_wins() {
        // equivalent under case-insensitive comparison but distinguishable
        let ordering = from_fn(|a: &&str, b: &&str| {
            a.to_lowercase().cmp(&b.to_lowercase())
        });
        let (x, y) = ("ABC", "abc");
        assert_eq!(*ordering.max(&x, &y), "ABC");
        assert_eq!(*ordering.min(&x, &y), "ABC");
        assert_eq!(*ordering.max(&y, &x), "abc");
        assert_eq!(*ordering.min(&y, &x), "abc");
        assert_eq!(*ordering.max(&"b", &"A"), "b");
        assert_eq!(*ordering.min(&"b", &"A"), "A");
    }

    #[test]
    fn test_from_less_than_single_invocation() {
        let calls = Cell::new(0);
        let ordering = from_less_than(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a < b
        });

        assert!(ordering.lt(&1, &2));
        assert!(!ordering.gt(&1, &2));
        assert!(ordering.lteq(&2, &2));
        assert!(ordering.gteq(&2, &2));
        assert_eq!(calls.get(), 4);

        assert_eq!(ordering.compare(&1, &2), Ordering::Less);
        assert_eq!(ordering.compare(&2, &1), Ordering::Greater);
        assert_eq!(ordering.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_natural() {
        let ordering = NaturalOrdering::<str>::new();
        assert_eq!(ordering.compare("a", "b"), Ordering::Less);
        assert!(ordering.gteq("b", "b"));
        assert_eq!(ordering, NaturalOrdering::default());
        assert_eq!(hash_of(&ordering), hash_of(&NaturalOrdering::<str>::new()));
    }

    #[test]
    fn test_then() {
        let by_len = from_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let ordering = by_len.then(from_fn(|a: &&str, b: &&str| a.cmp(b)));
        let mut v = vec!["bb", "a", "ab", "c"];
        v.sort_by(|a, b| ordering.compare(a, b));
        assert_eq!(v, vec!["a", "c", "ab", "bb"]);

        let ordering = I32Ordering.then_by(|_: &i32| "ignored".to_string());
        assert_eq!(ordering.compare(&1, &1), Ordering::Equal);
        assert_eq!(ordering.compare(&1, &2), Ordering::Less);

        let a = ThenOrdering::new(I32Ordering, I32Ordering.reverse());
        let b = ThenOrdering::new(I32Ordering, I32Ordering.reverse());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_dyn() {
        let orderings: Vec<DynOrdering<str>> = vec![
            Arc::new(StrOrdering),
            Arc::new(NaturalOrdering::<str>::new()),
            Arc::new(from_fn(|a: &str, b: &str| b.cmp(a))),
        ];
        let results: Vec<_> = orderings.iter().map(|o| o.compare("a", "b")).collect();
        assert_eq!(
            results,
            vec![Ordering::Less, Ordering::Less, Ordering::Greater]
        );
        assert_eq!(orderings[2].max("a", "b"), "a");
    }
}
