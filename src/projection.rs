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

//! Orderings that compare values by a projection of them
//!
//! Both [`On`] and [`By`] map each argument through `f` and compare the results with a
//! base ordering. They differ in how the base is supplied and in which methods reach it:
//!
//! * [`On`] is built from an explicit base with [`TotalOrdering::on`] and only calls the
//!   base's `compare` (or `try_compare`), the predicates are derived from it
//! * [`By`] resolves the base from [`HasOrdering`] (see [`by`]), or takes it with
//!   [`By::new`], and forwards every predicate to the base so its fast paths are kept
//!
//! Neither caches `f(x)`, a comparison evaluates `f` once per argument.

use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use crate::registry::HasOrdering;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

const ON_SEED: u64 = 0x6f6e_5f70_726f_6a00;
const BY_SEED: u64 = 0x6279_5f70_726f_6a00;

/// Compares values of `U` by comparing `f(u)` with a base ordering of `K`
///
/// Two `On` are equal if their base orderings and their functions are equal, which
/// requires `F: PartialEq` as function pointers are and closures are not.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::UsizeOrdering;
/// let by_len = UsizeOrdering.on(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"xyz"), Ordering::Less);
/// ```
pub struct On<K, O, F> {
    base: O,
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<K, O, F> On<K, O, F> {
    /// Create a new [`On`] comparing `f(x)` with `base`
    pub const fn new(base: O, f: F) -> Self {
        Self {
            base,
            f,
            _key: PhantomData,
        }
    }

    /// Returns the base ordering
    pub fn base(&self) -> &O {
        &self.base
    }
}

impl<K, O: Clone, F: Clone> Clone for On<K, O, F> {
    fn clone(&self) -> Self {
        Self::new(self.base.clone(), self.f.clone())
    }
}

impl<K, O: Copy, F: Copy> Copy for On<K, O, F> {}

impl<K, O: PartialEq, F: PartialEq> PartialEq for On<K, O, F> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.f == other.f
    }
}

impl<K, O: Eq, F: Eq> Eq for On<K, O, F> {}

impl<K, O: Hash, F: Hash> Hash for On<K, O, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(ON_SEED);
        self.base.hash(state);
        self.f.hash(state);
    }
}

impl<K, O: Debug, F> Debug for On<K, O, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("On")
            .field("base", &self.base)
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

impl<U, K, O, F> PartialOrdering<U> for On<K, O, F>
where
    U: ?Sized,
    O: PartialOrdering<K>,
    F: Fn(&U) -> K,
{
    #[inline]
    fn try_compare(&self, x: &U, y: &U) -> Option<Ordering> {
        self.base.try_compare(&(self.f)(x), &(self.f)(y))
    }
}

impl<U, K, O, F> TotalOrdering<U> for On<K, O, F>
where
    U: ?Sized,
    O: TotalOrdering<K>,
    F: Fn(&U) -> K,
{
    #[inline]
    fn compare(&self, x: &U, y: &U) -> Ordering {
        self.base.compare(&(self.f)(x), &(self.f)(y))
    }
}

/// Compares values of `U` by comparing `f(u)` with a base ordering of `K`, forwarding
/// every predicate to the base
///
/// See [`by`] to resolve the base ordering from the key type.
pub struct By<K, O, F> {
    base: O,
    f: F,
    _key: PhantomData<fn() -> K>,
}

/// Returns an ordering of `U` that compares `f(u)` with the canonical ordering of `K`
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::projection::by;
/// let by_len = by(|s: &String| s.len());
/// assert_eq!(by_len.compare(&"ab".to_string(), &"c".to_string()), Ordering::Greater);
///
/// // or with an explicit base ordering
/// # use ordkit::projection::By;
/// # use ordkit::primitive::UsizeOrdering;
/// let by_len_desc = By::<usize, _, _>::new(|s: &String| s.len(), UsizeOrdering.reverse());
/// assert_eq!(by_len_desc.compare(&"ab".to_string(), &"c".to_string()), Ordering::Less);
/// ```
///
/// The key type `K` is fixed for the ordering, so `f` cannot return a key that borrows
/// from its argument, for example `by(|s: &String| s.as_str())`. This holds for
/// [`By::new`] and [`On`] as well. Return an owned key, or compare the borrowed keys in
/// a [`from_fn`](crate::ord::from_fn) closure:
///
/// ```compile_fail
/// # use ordkit::projection::by;
/// let by_name = by(|p: &(String, u32)| p.0.as_str());
/// ```
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::{from_fn, TotalOrdering};
/// # use ordkit::primitive::StrOrdering;
/// let by_name = from_fn(|a: &(String, u32), b: &(String, u32)| {
///     StrOrdering.compare(a.0.as_str(), b.0.as_str())
/// });
/// let a = ("a".to_string(), 2);
/// let b = ("b".to_string(), 1);
/// assert_eq!(by_name.compare(&a, &b), Ordering::Less);
/// ```
pub fn by<U, K, F>(f: F) -> By<K, K::Ordering, F>
where
    U: ?Sized,
    K: HasOrdering,
    F: Fn(&U) -> K,
{
    By::new(f, K::ORDERING)
}

impl<K, O, F> By<K, O, F> {
    /// Create a new [`By`] comparing `f(x)` with an explicit `base`
    pub const fn new(f: F, base: O) -> Self {
        Self {
            base,
            f,
            _key: PhantomData,
        }
    }

    /// Returns the base ordering
    pub fn base(&self) -> &O {
        &self.base
    }
}

impl<K, O: Clone, F: Clone> Clone for By<K, O, F> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone(), self.base.clone())
    }
}

impl<K, O: Copy, F: Copy> Copy for By<K, O, F> {}

impl<K, O: PartialEq, F: PartialEq> PartialEq for By<K, O, F> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.f == other.f
    }
}

impl<K, O: Eq, F: Eq> Eq for By<K, O, F> {}

impl<K, O: Hash, F: Hash> Hash for By<K, O, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(BY_SEED);
        self.base.hash(state);
        self.f.hash(state);
    }
}

impl<K, O: Debug, F> Debug for By<K, O, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("By")
            .field("base", &self.base)
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

impl<U, K, O, F> PartialOrdering<U> for By<K, O, F>
where
    U: ?Sized,
    O: PartialOrdering<K>,
    F: Fn(&U) -> K,
{
    #[inline]
    fn try_compare(&self, x: &U, y: &U) -> Option<Ordering> {
        self.base.try_compare(&(self.f)(x), &(self.f)(y))
    }

    #[inline]
    fn lt(&self, x: &U, y: &U) -> bool {
        self.base.lt(&(self.f)(x), &(self.f)(y))
    }

    #[inline]
    fn gt(&self, x: &U, y: &U) -> bool {
        self.base.gt(&(self.f)(x), &(self.f)(y))
    }

    #[inline]
    fn lteq(&self, x: &U, y: &U) -> bool {
        self.base.lteq(&(self.f)(x), &(self.f)(y))
    }

    #[inline]
    fn gteq(&self, x: &U, y: &U) -> bool {
        self.base.gteq(&(self.f)(x), &(self.f)(y))
    }

    #[inline]
    fn equiv(&self, x: &U, y: &U) -> bool {
        self.base.equiv(&(self.f)(x), &(self.f)(y))
    }
}

impl<U, K, O, F> TotalOrdering<U> for By<K, O, F>
where
    U: ?Sized,
    O: TotalOrdering<K>,
    F: Fn(&U) -> K,
{
    #[inline]
    fn compare(&self, x: &U, y: &U) -> Ordering {
        self.base.compare(&(self.f)(x), &(self.f)(y))
    }
}
