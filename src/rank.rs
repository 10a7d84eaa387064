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

//! Provides `rank` function to assign a rank to each value of a slice

use crate::error::OrdError;
use crate::ord::TotalOrdering;
use crate::sort::index_len;
use tracing::trace;

/// Assigns a rank to each value in `values` based on its position in the order
/// defined by `ordering`
///
/// Ranks start at 1. Where values are equivalent, they will be assigned the highest of
/// their ranks, leaving gaps in the overall rank assignment
///
/// ```
/// # use ordkit::option::option;
/// # use ordkit::primitive::StrOrdering;
/// # use ordkit::rank::rank;
/// let values = vec![Some("foo"), None, Some("foo"), None, Some("bar")];
/// let ranks = rank(&values, &option(StrOrdering)).unwrap();
/// assert_eq!(ranks, &[5, 2, 5, 2, 3]);
/// ```
pub fn rank<T, O>(values: &[T], ordering: &O) -> Result<Vec<u32>, OrdError>
where
    O: TotalOrdering<T> + ?Sized,
{
    let len = index_len(values.len())?;
    trace!(len, "rank");

    let cmp = |a: u32, b: u32| ordering.compare(&values[a as usize], &values[b as usize]);

    // We can use an unstable sort as we combine equivalent values later
    let mut sorted: Vec<u32> = (0..len).collect();
    sorted.sort_unstable_by(|a, b| cmp(*a, *b));

    let mut out = vec![0_u32; values.len()];
    let mut rank = len;
    if let Some(last) = sorted.last() {
        out[*last as usize] = rank;
    }

    let mut count = 1; // Number of values in rank
    for w in sorted.windows(2).rev() {
        match cmp(w[0], w[1]).is_eq() {
            true => count += 1,
            false => {
                rank -= count;
                count = 1;
            }
        }
        out[w[0] as usize] = rank;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::option;
    use crate::options::SortOptions;
    use crate::primitive::{F64Ordering, I32Ordering, StrOrdering, U8Ordering};
    use crate::seq::seq;

    #[test]
    fn test_options() {
        let descending = SortOptions {
            descending: true,
            nulls_first: true,
        };

        let nulls_last = SortOptions {
            descending: false,
            nulls_first: false,
        };

        let nulls_last_descending = SortOptions {
            descending: true,
            nulls_first: false,
        };

        let a = vec![Some(1), Some(1), None, Some(3), Some(3), Some(4)];
        let res = rank(&a, &option(I32Ordering)).unwrap();
        assert_eq!(res, &[3, 3, 1, 5, 5, 6]);

        let res = rank(&a, &option(I32Ordering).with_options(descending)).unwrap();
        assert_eq!(res, &[6, 6, 1, 4, 4, 2]);

        let res = rank(&a, &option(I32Ordering).with_options(nulls_last)).unwrap();
        assert_eq!(res, &[2, 2, 6, 4, 4, 5]);

        let ordering = option(I32Ordering).with_options(nulls_last_descending);
        let res = rank(&a, &ordering).unwrap();
        assert_eq!(res, &[5, 5, 6, 3, 3, 1]);

        let a = vec![Some(1), Some(4), None, Some(4), None, None];
        let res = rank(&a, &option(I32Ordering)).unwrap();
        assert_eq!(res, &[4, 6, 3, 6, 3, 3]);
    }

    #[test]
    fn test_bytes() {
        let v = vec!["foo", "fo", "bar", "bar"];
        let res = rank(&v, &StrOrdering).unwrap();
        assert_eq!(res, &[4, 3, 2, 2]);

        let v: Vec<String> = v.into_iter().map(String::from).collect();
        let res = rank(&v, &StrOrdering).unwrap();
        assert_eq!(res, &[4, 3, 2, 2]);

        let v: Vec<Vec<u8>> = vec![vec![1, 2], vec![0], vec![1, 2, 3], vec![1, 2]];
        let res = rank(&v, &seq(U8Ordering)).unwrap();
        assert_eq!(res, &[3, 1, 4, 3]);
    }

    #[test]
    fn test_floats() {
        let v = [f64::NAN, 1.0, -0.0, 0.0, f64::NAN];
        let res = rank(&v, &F64Ordering).unwrap();
        assert_eq!(res, &[5, 3, 1, 2, 5]);
    }

    #[test]
    fn test_empty_and_reverse() {
        let empty: [i32; 0] = [];
        assert!(rank(&empty, &I32Ordering).unwrap().is_empty());

        let res = rank(&[3, 1, 2], &I32Ordering.reverse()).unwrap();
        assert_eq!(res, &[1, 3, 2]);
    }
}
