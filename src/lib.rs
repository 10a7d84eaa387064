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

//! Composable orderings
//!
//! An ordering is a value that compares two values of a type. Unlike [`Ord`], a type
//! can have any number of orderings, and orderings compose: they can be
//! [reversed](ord::TotalOrdering::reverse), [projected](projection) through a key
//! function, [chained](ord::TotalOrdering::then), and lifted to
//! [tuples](tuple), [sequences](seq) and [`Option`](option).
//!
//! Every primitive type has a canonical ordering resolved by [`registry::ordering`],
//! and the kernels of [`sort`], [`rank`] and [`partition`] consume any ordering.
//!
//! # Sort records by several keys
//!
//! ```
//! # use ordkit::ord::TotalOrdering;
//! # use ordkit::option::option;
//! # use ordkit::options::SortOptions;
//! # use ordkit::primitive::{F64Ordering, StrOrdering};
//! # use ordkit::projection::By;
//! # use ordkit::sort::sort_by_ordering;
//! #
//! struct Row {
//!     name: &'static str,
//!     score: Option<f64>,
//! }
//!
//! let mut rows = vec![
//!     Row { name: "b", score: Some(1.5) },
//!     Row { name: "a", score: None },
//!     Row { name: "c", score: Some(1.5) },
//!     Row { name: "d", score: Some(9.0) },
//! ];
//!
//! // Highest score first, missing scores last, then by name
//! let score = option(F64Ordering).with_options(SortOptions::default().desc().nulls_last());
//! let ordering = By::<Option<f64>, _, _>::new(|r: &Row| r.score, score)
//!     .then(By::<&str, _, _>::new(|r: &Row| r.name, StrOrdering));
//!
//! sort_by_ordering(&mut rows, &ordering);
//! let names: Vec<_> = rows.iter().map(|r| r.name).collect();
//! assert_eq!(names, vec!["d", "b", "c", "a"]);
//! ```
//!

#![warn(missing_docs)]
pub mod error;
pub mod keyed;
pub mod option;
pub mod options;
pub mod ord;
pub mod partial;
pub mod partition;
pub mod primitive;
pub mod projection;
pub mod rank;
pub mod registry;
pub mod reverse;
pub mod seq;
pub mod sort;
pub mod tuple;

pub use error::OrdError;
pub use ord::{DynOrdering, TotalOrdering};
pub use partial::PartialOrdering;
pub use registry::{ordering, HasOrdering};
