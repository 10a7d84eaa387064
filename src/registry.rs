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

//! Canonical orderings resolved from a type
//!
//! Every primitive type, and every tuple, sequence and `Option` of types that have
//! one, has a canonical [`TotalOrdering`] available through [`ordering`]. Resolution
//! happens at compile time:
//!
//! ```
//! # use std::cmp::Ordering;
//! # use ordkit::ord::TotalOrdering;
//! # use ordkit::registry::ordering;
//! let o = ordering::<(i32, Option<String>)>();
//! let a = (1, None);
//! let b = (1, Some("a".to_string()));
//! assert_eq!(o.compare(&a, &b), Ordering::Less);
//! ```
//!
//! Types without a canonical ordering do not compile:
//!
//! ```compile_fail
//! # use ordkit::registry::ordering;
//! struct Opaque;
//! let o = ordering::<Opaque>();
//! ```

use crate::ord::TotalOrdering;

/// A type with a canonical [`TotalOrdering`]
///
/// Implement this for a domain type to make it usable with [`ordering`],
/// [`by`](crate::projection::by) and [`TotalOrdering::then_by`], and as a component of
/// the tuple, sequence and `Option` orderings.
///
/// ```
/// # use std::cmp::Ordering;
/// # use ordkit::ord::TotalOrdering;
/// # use ordkit::primitive::U32Ordering;
/// # use ordkit::projection::On;
/// # use ordkit::registry::{ordering, HasOrdering};
/// struct Version(u32);
///
/// impl HasOrdering for Version {
///     type Ordering = On<u32, U32Ordering, fn(&Version) -> u32>;
///     const ORDERING: Self::Ordering = On::new(U32Ordering, |v: &Version| v.0);
/// }
///
/// let o = ordering::<Vec<Version>>();
/// assert_eq!(o.compare(&vec![Version(1)], &vec![Version(2)]), Ordering::Less);
/// ```
pub trait HasOrdering {
    /// The type of the canonical ordering
    type Ordering: TotalOrdering<Self>;

    /// The canonical ordering
    const ORDERING: Self::Ordering;
}

/// Returns the canonical [`TotalOrdering`] of `T`
#[inline]
pub fn ordering<T: HasOrdering + ?Sized>() -> T::Ordering {
    T::ORDERING
}
