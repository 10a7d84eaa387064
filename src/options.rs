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

//! Defines [`SortOptions`]

use std::cmp::Ordering;
use std::fmt::Display;

/// Configures where an [`OptionOrdering`](crate::option::OptionOrdering) places
/// `None` and in which direction it orders present values
///
/// The two settings are independent: `descending` never moves `None`.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::option::option;
/// # use ordkit::options::SortOptions;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::I32Ordering;
/// // `None` first, present values ascending
/// let ordering = option(I32Ordering);
/// assert_eq!(ordering.options(), SortOptions::default());
/// assert_eq!(ordering.compare(&None, &Some(1)), Ordering::Less);
/// assert_eq!(ordering.compare(&Some(1), &Some(2)), Ordering::Less);
///
/// // present values descending, `None` still first
/// let ordering = ordering.with_options(SortOptions::default().desc());
/// assert_eq!(ordering.compare(&None, &Some(1)), Ordering::Less);
/// assert_eq!(ordering.compare(&Some(1), &Some(2)), Ordering::Greater);
///
/// // `None` last
/// let ordering = ordering.with_options(SortOptions::default().nulls_last());
/// assert_eq!(ordering.compare(&None, &Some(1)), Ordering::Greater);
/// ```
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub struct SortOptions {
    /// Whether present values are ordered in reverse
    pub descending: bool,
    /// Whether `None` precedes every present value
    pub nulls_first: bool,
}

impl SortOptions {
    /// Create a new `SortOptions`
    pub const fn new(descending: bool, nulls_first: bool) -> Self {
        Self {
            descending,
            nulls_first,
        }
    }

    /// Returns these options with present values in reverse order
    pub const fn desc(self) -> Self {
        Self::new(true, self.nulls_first)
    }

    /// Returns these options with `None` after every present value
    pub const fn nulls_last(self) -> Self {
        Self::new(self.descending, false)
    }

    /// Returns the result of comparing `None` with any present value
    #[inline]
    pub const fn none_vs_some(&self) -> Ordering {
        match self.nulls_first {
            true => Ordering::Less,
            false => Ordering::Greater,
        }
    }

    /// Applies the direction to the result of comparing two present values
    #[inline]
    pub const fn direct(&self, ordering: Ordering) -> Ordering {
        match self.descending {
            true => ordering.reverse(),
            false => ordering,
        }
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl Display for SortOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let direction = match self.descending {
            true => "descending",
            false => "ascending",
        };
        let none = match self.nulls_first {
            true => "first",
            false => "last",
        };
        write!(f, "{direction}, None {none}")
    }
}
