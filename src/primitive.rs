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

//! Canonical orderings of primitive types
//!
//! Each ordering is a unit struct, so every value of it is the same singleton, and a
//! `const` of it is exported alongside. The predicates and `max`/`min` of every
//! primitive ordering are answered with the native comparison operators.
//!
//! Integers, `bool`, `char` and `()` compare by value, strings compare bytewise, that
//! is by UTF-8 code unit, and the arbitrary precision types of [`num`] compare with
//! their own [`Ord`] implementation. Those are [`BigInt`], [`BigUint`] and
//! [`BigRational`] only: no ordering is provided for decimal types, and none is
//! registered for them in [`HasOrdering`].
//!
//! # Floating point
//!
//! The floating point orderings ([`F32Ordering`], [`F64Ordering`], [`F16Ordering`],
//! [`Bf16Ordering`]) define `compare` as a total order:
//!
//! * every NaN is equivalent to every other NaN, and follows every other value,
//!   including positive infinity
//! * `-0.0` precedes `0.0`
//! * all other values compare numerically
//!
//! Their predicates however use the IEEE 754 operators, so any predicate with a NaN
//! operand is `false` and `equiv(-0.0, 0.0)` is `true`. This disagrees with `compare`
//! for exactly those inputs, and is intentional: `compare` is what sorting needs while
//! the predicates keep the semantics of `<` and `==`. Use
//! [`NaturalPartialOrdering`](crate::partial::NaturalPartialOrdering) for an ordering
//! where NaN is consistently incomparable.
//!
//! ```
//! # use std::cmp::Ordering;
//! # use ordkit::ord::TotalOrdering;
//! # use ordkit::partial::PartialOrdering;
//! # use ordkit::primitive::F64Ordering;
//! assert_eq!(F64Ordering.compare(&f64::NAN, &1.0), Ordering::Greater);
//! assert!(!F64Ordering.gt(&f64::NAN, &1.0));
//! ```
//!
//! `max` and `min` are answered with `>=` and `<=` as well, returning `x` when the
//! comparison holds and `y` otherwise. With a NaN or with zeros of both signs the
//! result therefore depends on the argument order:
//!
//! * `max(NaN, 1.0)` is `1.0` but `max(1.0, NaN)` is NaN, and `min` behaves the same
//! * `max(-0.0, 0.0)` is `-0.0` and `max(0.0, -0.0)` is `0.0`
//!
//! [`max_of`](crate::sort::max_of) and [`min_of`](crate::sort::min_of) fold with these,
//! so a NaN in the input is dropped or returned depending on where it appears:
//!
//! ```
//! # use ordkit::ord::TotalOrdering;
//! # use ordkit::primitive::F64Ordering;
//! # use ordkit::sort::max_of;
//! assert_eq!(max_of(&[f64::NAN, 1.0], &F64Ordering), Some(&1.0));
//! assert!(max_of(&[1.0, f64::NAN], &F64Ordering).unwrap().is_nan());
//! assert!(F64Ordering.max(&-0.0, &0.0).is_sign_negative());
//! ```

use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use crate::registry::HasOrdering;
use crate::reverse::Reverse;
use half::{bf16, f16};
use num::{BigInt, BigRational, BigUint};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Implements the native predicates shared by every primitive ordering
macro_rules! native_predicates {
    ($t:ty) => {
        #[inline]
        fn lt(&self, x: &$t, y: &$t) -> bool {
            x < y
        }

        #[inline]
        fn gt(&self, x: &$t, y: &$t) -> bool {
            x > y
        }

        #[inline]
        fn lteq(&self, x: &$t, y: &$t) -> bool {
            x <= y
        }

        #[inline]
        fn gteq(&self, x: &$t, y: &$t) -> bool {
            x >= y
        }

        #[inline]
        fn equiv(&self, x: &$t, y: &$t) -> bool {
            x == y
        }
    };
}

macro_rules! native_max_min {
    ($t:ty) => {
        #[inline]
        fn max<'a>(&self, x: &'a $t, y: &'a $t) -> &'a $t {
            if x >= y {
                x
            } else {
                y
            }
        }

        #[inline]
        fn min<'a>(&self, x: &'a $t, y: &'a $t) -> &'a $t {
            if x <= y {
                x
            } else {
                y
            }
        }
    };
}

macro_rules! ord_leaf {
    ($(#[$meta:meta])* $name:ident, $konst:ident, $t:ty) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        #[doc = concat!("The [`", stringify!($name), "`] singleton")]
        pub const $konst: $name = $name;

        impl PartialOrdering<$t> for $name {
            #[inline]
            fn try_compare(&self, x: &$t, y: &$t) -> Option<Ordering> {
                Some(x.cmp(y))
            }

            native_predicates!($t);
        }

        impl TotalOrdering<$t> for $name {
            #[inline]
            fn compare(&self, x: &$t, y: &$t) -> Ordering {
                x.cmp(y)
            }

            native_max_min!($t);
        }

        impl HasOrdering for $t {
            type Ordering = $name;
            const ORDERING: $name = $name;
        }
    };
}

ord_leaf!(
    /// Ordering of `()`, all values are equivalent
    UnitOrdering,
    UNIT,
    ()
);
ord_leaf!(
    /// Ordering of `bool`, `false` precedes `true`
    BoolOrdering,
    BOOL,
    bool
);
ord_leaf!(
    /// Ordering of `char` by Unicode scalar value
    CharOrdering,
    CHAR,
    char
);
ord_leaf!(
    /// Ordering of `i8`
    I8Ordering,
    I8,
    i8
);
ord_leaf!(
    /// Ordering of `i16`
    I16Ordering,
    I16,
    i16
);
ord_leaf!(
    /// Ordering of `i32`
    I32Ordering,
    I32,
    i32
);
ord_leaf!(
    /// Ordering of `i64`
    I64Ordering,
    I64,
    i64
);
ord_leaf!(
    /// Ordering of `i128`
    I128Ordering,
    I128,
    i128
);
ord_leaf!(
    /// Ordering of `isize`
    IsizeOrdering,
    ISIZE,
    isize
);
ord_leaf!(
    /// Ordering of `u8`
    U8Ordering,
    U8,
    u8
);
ord_leaf!(
    /// Ordering of `u16`
    U16Ordering,
    U16,
    u16
);
ord_leaf!(
    /// Ordering of `u32`
    U32Ordering,
    U32,
    u32
);
ord_leaf!(
    /// Ordering of `u64`
    U64Ordering,
    U64,
    u64
);
ord_leaf!(
    /// Ordering of `u128`
    U128Ordering,
    U128,
    u128
);
ord_leaf!(
    /// Ordering of `usize`
    UsizeOrdering,
    USIZE,
    usize
);
ord_leaf!(
    /// Ordering of arbitrary precision signed integers
    BigIntOrdering,
    BIG_INT,
    BigInt
);
ord_leaf!(
    /// Ordering of arbitrary precision unsigned integers
    BigUintOrdering,
    BIG_UINT,
    BigUint
);
ord_leaf!(
    /// Ordering of arbitrary precision rationals by value
    BigRationalOrdering,
    BIG_RATIONAL,
    BigRational
);

/// [`I32Ordering`] reversed
pub const I32_REVERSE: Reverse<I32Ordering> = Reverse::new(I32Ordering);

/// [`I64Ordering`] reversed
pub const I64_REVERSE: Reverse<I64Ordering> = Reverse::new(I64Ordering);

macro_rules! total_cmp_float {
    ($name:ident, $t:ty) => {
        #[inline]
        fn $name(x: $t, y: $t) -> Ordering {
            match (x.is_nan(), y.is_nan()) {
                (false, false) => x.total_cmp(&y),
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
            }
        }
    };
}

total_cmp_float!(compare_f32, f32);
total_cmp_float!(compare_f64, f64);

macro_rules! float_leaf {
    ($(#[$meta:meta])* $name:ident, $konst:ident, $t:ty, $compare:expr) => {
        $(#[$meta])*
        ///
        /// `compare` is a total order while the predicates follow IEEE 754, see the
        /// [module documentation](self) for where the two disagree.
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        #[doc = concat!("The [`", stringify!($name), "`] singleton")]
        pub const $konst: $name = $name;

        impl PartialOrdering<$t> for $name {
            #[inline]
            fn try_compare(&self, x: &$t, y: &$t) -> Option<Ordering> {
                Some(self.compare(x, y))
            }

            native_predicates!($t);
        }

        impl TotalOrdering<$t> for $name {
            #[inline]
            fn compare(&self, x: &$t, y: &$t) -> Ordering {
                $compare(*x, *y)
            }

            native_max_min!($t);
        }

        impl HasOrdering for $t {
            type Ordering = $name;
            const ORDERING: $name = $name;
        }
    };
}

float_leaf!(
    /// Ordering of `f32`
    F32Ordering,
    F32,
    f32,
    compare_f32
);
float_leaf!(
    /// Ordering of `f64`
    F64Ordering,
    F64,
    f64,
    compare_f64
);
float_leaf!(
    /// Ordering of half precision `f16`
    F16Ordering,
    F16,
    f16,
    |x: f16, y: f16| compare_f32(x.to_f32(), y.to_f32())
);
float_leaf!(
    /// Ordering of brain floating point `bf16`
    Bf16Ordering,
    BF16,
    bf16,
    |x: bf16, y: bf16| compare_f32(x.to_f32(), y.to_f32())
);

/// Ordering of strings, bytewise by UTF-8 code unit
///
/// Compares any `S: AsRef<str>`, such as `str`, `&str`, `String` and `Cow<str>`.
/// As it orders more than one type, generic methods that cannot infer the compared
/// type, such as [`TotalOrdering::reverse`] on an ordering derived from it, need the
/// type spelled out. [`StrOrdering::reverse`] is provided for the common case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrOrdering;

/// The [`StrOrdering`] singleton
pub const STR: StrOrdering = StrOrdering;

/// [`StrOrdering`] reversed
pub const STR_REVERSE: Reverse<StrOrdering> = Reverse::new(StrOrdering);

impl StrOrdering {
    /// Returns the reverse of this ordering
    pub const fn reverse(self) -> Reverse<StrOrdering> {
        Reverse::new(self)
    }
}

impl<S: AsRef<str> + ?Sized> PartialOrdering<S> for StrOrdering {
    #[inline]
    fn try_compare(&self, x: &S, y: &S) -> Option<Ordering> {
        Some(x.as_ref().cmp(y.as_ref()))
    }

    #[inline]
    fn lt(&self, x: &S, y: &S) -> bool {
        x.as_ref() < y.as_ref()
    }

    #[inline]
    fn gt(&self, x: &S, y: &S) -> bool {
        x.as_ref() > y.as_ref()
    }

    #[inline]
    fn lteq(&self, x: &S, y: &S) -> bool {
        x.as_ref() <= y.as_ref()
    }

    #[inline]
    fn gteq(&self, x: &S, y: &S) -> bool {
        x.as_ref() >= y.as_ref()
    }

    #[inline]
    fn equiv(&self, x: &S, y: &S) -> bool {
        x.as_ref() == y.as_ref()
    }
}

impl<S: AsRef<str> + ?Sized> TotalOrdering<S> for StrOrdering {
    #[inline]
    fn compare(&self, x: &S, y: &S) -> Ordering {
        x.as_ref().cmp(y.as_ref())
    }

    #[inline]
    fn max<'a>(&self, x: &'a S, y: &'a S) -> &'a S {
        if x.as_ref() >= y.as_ref() {
            x
        } else {
            y
        }
    }

    #[inline]
    fn min<'a>(&self, x: &'a S, y: &'a S) -> &'a S {
        if x.as_ref() <= y.as_ref() {
            x
        } else {
            y
        }
    }
}

impl HasOrdering for str {
    type Ordering = StrOrdering;
    const ORDERING: StrOrdering = StrOrdering;
}

impl HasOrdering for String {
    type Ordering = StrOrdering;
    const ORDERING: StrOrdering = StrOrdering;
}

impl HasOrdering for &str {
    type Ordering = StrOrdering;
    const ORDERING: StrOrdering = StrOrdering;
}

impl HasOrdering for Cow<'_, str> {
    type Ordering = StrOrdering;
    const ORDERING: StrOrdering = StrOrdering;
}
