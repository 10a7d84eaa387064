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

//! Defines sort kernels driven by an ordering

use crate::error::OrdError;
use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Sorts `values` in place with `ordering`, keeping equivalent values in their
/// original order
///
/// ```
/// # use ordkit::primitive::F64Ordering;
/// # use ordkit::sort::sort_by_ordering;
/// let mut v = vec![2.0, f64::NAN, -0.0, 0.0, -1.0];
/// sort_by_ordering(&mut v, &F64Ordering);
/// assert_eq!(&v[..4], &[-1.0, -0.0, 0.0, 2.0]);
/// assert!(v[4].is_nan());
/// ```
pub fn sort_by_ordering<T, O>(values: &mut [T], ordering: &O)
where
    O: TotalOrdering<T> + ?Sized,
{
    values.sort_by(|a, b| ordering.compare(a, b))
}

/// Sorts `values` in place with `ordering`, equivalent values may be reordered
pub fn sort_unstable_by_ordering<T, O>(values: &mut [T], ordering: &O)
where
    O: TotalOrdering<T> + ?Sized,
{
    values.sort_unstable_by(|a, b| ordering.compare(a, b))
}

/// Collects `values` into a [`Vec`] sorted stably with `ordering`
pub fn sorted<T, O, I>(values: I, ordering: &O) -> Vec<T>
where
    O: TotalOrdering<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut out: Vec<T> = values.into_iter().collect();
    sort_by_ordering(&mut out, ordering);
    out
}

/// Returns `true` if no value of `values` follows its successor under `ordering`
pub fn is_sorted_by_ordering<T, O>(values: &[T], ordering: &O) -> bool
where
    O: TotalOrdering<T> + ?Sized,
{
    values
        .windows(2)
        .all(|w| ordering.compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Returns the greatest of `values`, or `None` if it is empty
///
/// Folds with [`TotalOrdering::max`], so the first of several equivalent maxima is
/// returned.
pub fn max_of<'a, T, O, I>(values: I, ordering: &O) -> Option<&'a T>
where
    T: ?Sized + 'a,
    O: TotalOrdering<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().reduce(|a, b| ordering.max(a, b))
}

/// Returns the least of `values`, or `None` if it is empty
///
/// Folds with [`TotalOrdering::min`], so the first of several equivalent minima is
/// returned.
pub fn min_of<'a, T, O, I>(values: I, ordering: &O) -> Option<&'a T>
where
    T: ?Sized + 'a,
    O: TotalOrdering<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().reduce(|a, b| ordering.min(a, b))
}

/// Returns the indices that would stably sort `values` under a [`PartialOrdering`]
///
/// If `limit` is specified only the first `limit` indices in the sort order are
/// returned.
///
/// Returns [`OrdError::Incomparable`] as soon as two values that must be ordered
/// relative to each other are incomparable, and [`OrdError::Compute`] if `values`
/// has more than `u32::MAX` elements.
///
/// ```
/// # use ordkit::error::OrdError;
/// # use ordkit::partial::NaturalPartialOrdering;
/// # use ordkit::sort::sort_to_indices;
/// let ordering = NaturalPartialOrdering::<f64>::new();
/// let indices = sort_to_indices(&[3.0, 1.0, 2.0, 1.0], &ordering, None).unwrap();
/// assert_eq!(indices, vec![1, 3, 2, 0]);
///
/// let indices = sort_to_indices(&[3.0, 1.0, 2.0], &ordering, Some(2)).unwrap();
/// assert_eq!(indices, vec![1, 2]);
///
/// let err = sort_to_indices(&[1.0, f64::NAN], &ordering, None).unwrap_err();
/// assert!(matches!(err, OrdError::Incomparable { .. }));
/// ```
pub fn sort_to_indices<T, O>(
    values: &[T],
    ordering: &O,
    limit: Option<usize>,
) -> Result<Vec<u32>, OrdError>
where
    O: PartialOrdering<T> + ?Sized,
{
    let len = index_len(values.len())?;
    trace!(len, ?limit, "sort_to_indices");

    let mut indices = merge_sort((0..len).collect(), |a, b| {
        ordering
            .try_compare(&values[a as usize], &values[b as usize])
            .ok_or_else(|| {
                debug!(left = a, right = b, "incomparable values");
                OrdError::Incomparable {
                    left: a as usize,
                    right: b as usize,
                }
            })
    })?;

    if let Some(limit) = limit {
        indices.truncate(limit);
    }
    Ok(indices)
}

/// Returns `len` as a `u32`, or an error if the values cannot be indexed by `u32`
pub(crate) fn index_len(len: usize) -> Result<u32, OrdError> {
    len.try_into().map_err(|_| {
        debug!(len, "too many values to index");
        OrdError::Compute(format!("cannot index {len} values with u32"))
    })
}

/// Bottom-up merge sort of `indices` that stops at the first comparison error
///
/// Each merge takes from the right run only when it is strictly less, so equivalent
/// values keep their relative order.
fn merge_sort<F>(indices: Vec<u32>, mut cmp: F) -> Result<Vec<u32>, OrdError>
where
    F: FnMut(u32, u32) -> Result<Ordering, OrdError>,
{
    let len = indices.len();
    let mut src = indices;
    let mut dst = vec![0_u32; len];

    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);

            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                match cmp(src[j], src[i])? {
                    Ordering::Less => {
                        dst[k] = src[j];
                        j += 1;
                    }
                    _ => {
                        dst[k] = src[i];
                        i += 1;
                    }
                }
                k += 1;
            }
            let rem = mid - i;
            dst[k..k + rem].copy_from_slice(&src[i..mid]);
            dst[k + rem..end].copy_from_slice(&src[j..end]);
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    Ok(src)
}
