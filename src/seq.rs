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

//! Lexicographic orderings of sequences

use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use crate::registry::HasOrdering;
use std::cmp::Ordering;
use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::hash::{Hash, Hasher};

const SEQ_SEED: u64 = 0x7365_715f_6f72_6465;

/// Compares two sequences element by element with `ordering`
///
/// Both sequences are walked in lock-step, the first pair of elements that are not
/// equivalent decides. If one sequence is a prefix of the other the shorter sorts
/// first, and sequences of equivalent elements with the same length are `Equal`.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::primitive::I32Ordering;
/// # use ordkit::seq::lexicographic;
/// assert_eq!(lexicographic(&I32Ordering, &[1, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(lexicographic(&I32Ordering, &[1, 3], &[1, 2, 9]), Ordering::Greater);
/// ```
pub fn lexicographic<'a, T, O, L, R>(ordering: &O, left: L, right: R) -> Ordering
where
    T: ?Sized + 'a,
    O: TotalOrdering<T> + ?Sized,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    let mut l = left.into_iter();
    let mut r = right.into_iter();
    loop {
        match (l.next(), r.next()) {
            (Some(x), Some(y)) => match ordering.compare(x, y) {
                Ordering::Equal => continue,
                o => return o,
            },
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}

/// As [`lexicographic`] for a [`PartialOrdering`] of the elements
///
/// Returns `None` as soon as a pair of elements is incomparable.
pub fn try_lexicographic<'a, T, O, L, R>(ordering: &O, left: L, right: R) -> Option<Ordering>
where
    T: ?Sized + 'a,
    O: PartialOrdering<T> + ?Sized,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    let mut l = left.into_iter();
    let mut r = right.into_iter();
    loop {
        match (l.next(), r.next()) {
            (Some(x), Some(y)) => match ordering.try_compare(x, y)? {
                Ordering::Equal => continue,
                o => return Some(o),
            },
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
        }
    }
}

/// Lexicographic ordering of sequences whose elements are ordered by `O`
///
/// Implemented for slices, arrays, [`Vec`], [`VecDeque`], [`LinkedList`] and
/// [`BTreeSet`]; any other sequence can be compared with [`lexicographic`].
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::StrOrdering;
/// # use ordkit::seq::SeqOrdering;
/// let ordering = SeqOrdering::new(StrOrdering);
/// let a = vec!["a", "b"];
/// let b = vec!["a", "c"];
/// assert_eq!(ordering.compare(&a, &b), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeqOrdering<O> {
    element: O,
}

impl<O> SeqOrdering<O> {
    /// Create a new [`SeqOrdering`] comparing elements with `element`
    pub const fn new(element: O) -> Self {
        Self { element }
    }

    /// Returns the ordering of the elements
    pub fn element(&self) -> &O {
        &self.element
    }
}

/// Returns a [`SeqOrdering`] comparing elements with `element`
pub const fn seq<O>(element: O) -> SeqOrdering<O> {
    SeqOrdering::new(element)
}

impl<O: Hash> Hash for SeqOrdering<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(SEQ_SEED);
        self.element.hash(state);
    }
}

macro_rules! seq_ordering {
    ($($seq:ty),*) => {
        $(
            impl<T, O: PartialOrdering<T>> PartialOrdering<$seq> for SeqOrdering<O> {
                #[inline]
                fn try_compare(&self, x: &$seq, y: &$seq) -> Option<Ordering> {
                    try_lexicographic(&self.element, x, y)
                }
            }

            impl<T, O: TotalOrdering<T>> TotalOrdering<$seq> for SeqOrdering<O> {
                #[inline]
                fn compare(&self, x: &$seq, y: &$seq) -> Ordering {
                    lexicographic(&self.element, x, y)
                }
            }

            impl<T: HasOrdering> HasOrdering for $seq {
                type Ordering = SeqOrdering<T::Ordering>;
                const ORDERING: Self::Ordering = SeqOrdering::new(T::ORDERING);
            }
        )*
    };
}

seq_ordering!([T], Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>);

impl<T, O: PartialOrdering<T>, const N: usize> PartialOrdering<[T; N]> for SeqOrdering<O> {
    #[inline]
    fn try_compare(&self, x: &[T; N], y: &[T; N]) -> Option<Ordering> {
        try_lexicographic(&self.element, x, y)
    }
}

impl<T, O: TotalOrdering<T>, const N: usize> TotalOrdering<[T; N]> for SeqOrdering<O> {
    #[inline]
    fn compare(&self, x: &[T; N], y: &[T; N]) -> Ordering {
        lexicographic(&self.element, x, y)
    }
}

impl<T: HasOrdering, const N: usize> HasOrdering for [T; N] {
    type Ordering = SeqOrdering<T::Ordering>;
    const ORDERING: Self::Ordering = SeqOrdering::new(T::ORDERING);
}
