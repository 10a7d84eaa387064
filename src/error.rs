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

//! Defines `OrdError` for representing failures of the sort kernels

use std::error::Error;

/// Errors returned by [`sort_to_indices`](crate::sort::sort_to_indices) and
/// [`rank`](crate::rank::rank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdError {
    /// The values at indices `left` and `right` are incomparable
    Incomparable {
        /// Index of the left operand
        left: usize,
        /// Index of the right operand
        right: usize,
    },
    /// The result cannot be computed
    Compute(String),
}

impl std::fmt::Display for OrdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrdError::Incomparable { left, right } => {
                write!(f, "Values at index {left} and {right} are incomparable")
            }
            OrdError::Compute(message) => write!(f, "Compute error: {message}"),
        }
    }
}

impl Error for OrdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = OrdError::Incomparable { left: 3, right: 7 };
        assert_eq!(err.to_string(), "Values at index 3 and 7 are incomparable");
        let err = OrdError::Compute("too many values".to_string());
        assert_eq!(err.to_string(), "Compute error: too many values");
    }
}
