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

//! Defines partition kernel for sorted slices

use crate::ord::TotalOrdering;
use std::ops::Range;

/// Given a slice of already sorted values, find the ranges of adjacent values that
/// are equivalent under `ordering`
///
/// The ranges are consecutive and cover `values`: `(a, b)` is followed by `(b, c)`,
/// the first range starts at 0 and the last ends at `values.len()`. Partitioning by
/// several keys is partitioning by a tuple ordering of them.
///
/// ```
/// # use ordkit::partition::partition_ranges;
/// # use ordkit::primitive::I64Ordering;
/// let values = [1_i64, 2, 2, 2, 9];
/// let ranges: Vec<_> = partition_ranges(&values, &I64Ordering).collect();
/// assert_eq!(ranges, vec![0..1, 1..4, 4..5]);
/// ```
pub fn partition_ranges<'a, T, O>(
    values: &'a [T],
    ordering: &'a O,
) -> impl Iterator<Item = Range<usize>> + 'a
where
    O: TotalOrdering<T> + ?Sized,
{
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= values.len() {
            return None;
        }
        let mut end = start + 1;
        while end < values.len() && ordering.compare(&values[end - 1], &values[end]).is_eq() {
            end += 1;
        }
        let range = start..end;
        start = end;
        Some(range)
    })
}
