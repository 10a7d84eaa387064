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

//! Lexicographic orderings of tuples with 2 to 9 fields
//!
//! A tuple ordering holds one ordering per field, and compares fields from left to
//! right, returning the first result that is not [`Ordering::Equal`].
//!
//! ```
//! # use std::cmp::Ordering;
//! # use ordkit::ord::TotalOrdering;
//! # use ordkit::primitive::{I32Ordering, StrOrdering};
//! # use ordkit::tuple::tuple2;
//! let ordering = tuple2(I32Ordering, StrOrdering);
//! assert_eq!(ordering.compare(&(1, "b"), &(1, "a")), Ordering::Greater);
//! assert_eq!(ordering.compare(&(1, "a"), &(2, "a")), Ordering::Less);
//! ```

use crate::ord::TotalOrdering;
use crate::partial::PartialOrdering;
use crate::registry::HasOrdering;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

macro_rules! tuple_ordering {
    ($name:ident, $ctor:ident, $seed:expr, $(($idx:tt, $O:ident, $T:ident, $o:ident)),+) => {
        #[doc = concat!("Lexicographic ordering of ", stringify!($($T),+), " tuples, see [`", stringify!($ctor), "`]")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name<$($O),+>($(pub $O),+);

        #[doc = concat!("Returns a [`", stringify!($name), "`] comparing each field with the given ordering")]
        pub const fn $ctor<$($O),+>($($o: $O),+) -> $name<$($O),+> {
            $name($($o),+)
        }

        impl<$($O: Hash),+> Hash for $name<$($O),+> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64($seed);
                $(self.$idx.hash(state);)+
            }
        }

        impl<$($T,)+ $($O: PartialOrdering<$T>),+> PartialOrdering<($($T,)+)> for $name<$($O),+> {
            fn try_compare(&self, x: &($($T,)+), y: &($($T,)+)) -> Option<Ordering> {
                $(
                    match self.$idx.try_compare(&x.$idx, &y.$idx)? {
                        Ordering::Equal => {}
                        o => return Some(o),
                    }
                )+
                Some(Ordering::Equal)
            }
        }

        impl<$($T,)+ $($O: TotalOrdering<$T>),+> TotalOrdering<($($T,)+)> for $name<$($O),+> {
            fn compare(&self, x: &($($T,)+), y: &($($T,)+)) -> Ordering {
                $(
                    match self.$idx.compare(&x.$idx, &y.$idx) {
                        Ordering::Equal => {}
                        o => return o,
                    }
                )+
                Ordering::Equal
            }
        }

        impl<$($T: HasOrdering),+> HasOrdering for ($($T,)+) {
            type Ordering = $name<$($T::Ordering),+>;
            const ORDERING: Self::Ordering = $name($($T::ORDERING),+);
        }
    };
}

tuple_ordering!(Tuple2Ordering, tuple2, 0x7475_706c_6532_0000, (0, O1, T1, o1), (1, O2, T2, o2));
tuple_ordering!(
    Tuple3Ordering,
    tuple3,
    0x7475_706c_6533_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3)
);
tuple_ordering!(
    Tuple4Ordering,
    tuple4,
    0x7475_706c_6534_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4)
);
tuple_ordering!(
    Tuple5Ordering,
    tuple5,
    0x7475_706c_6535_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4),
    (4, O5, T5, o5)
);
tuple_ordering!(
    Tuple6Ordering,
    tuple6,
    0x7475_706c_6536_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4),
    (4, O5, T5, o5),
    (5, O6, T6, o6)
);
tuple_ordering!(
    Tuple7Ordering,
    tuple7,
    0x7475_706c_6537_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4),
    (4, O5, T5, o5),
    (5, O6, T6, o6),
    (6, O7, T7, o7)
);
tuple_ordering!(
    Tuple8Ordering,
    tuple8,
    0x7475_706c_6538_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4),
    (4, O5, T5, o5),
    (5, O6, T6, o6),
    (6, O7, T7, o7),
    (7, O8, T8, o8)
);
tuple_ordering!(
    Tuple9Ordering,
    tuple9,
    0x7475_706c_6539_0000,
    (0, O1, T1, o1),
    (1, O2, T2, o2),
    (2, O3, T3, o3),
    (3, O4, T4, o4),
    (4, O5, T5, o5),
    (5, O6, T6, o6),
    (6, O7, T7, o7),
    (7, O8, T8, o8),
    (8, O9, T9, o9)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ord::from_fn;
    use crate::partial::NaturalPartialOrdering;
    use crate::primitive::{BoolOrdering, CharOrdering, F64Ordering, I32Ordering, StrOrdering};
    use crate::registry::ordering;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<H: Hash>(h: &H) -> u64 {
        let mut s = DefaultHasher::new();
        h.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_tuple2() {
        let ordering = tuple2(I32Ordering, StrOrdering);
        assert_eq!(ordering.compare(&(1, "b"), &(1, "a")), Ordering::Greater);
        assert_eq!(ordering.compare(&(1, "a"), &(2, "a")), Ordering::Less);
        assert_eq!(ordering.compare(&(2, "a"), &(1, "z")), Ordering::Greater);
        assert_eq!(ordering.compare(&(1, "a"), &(1, "a")), Ordering::Equal);
    }

    #[test]
    fn test_short_circuit() {
        let calls = Cell::new(0);
        let counting = from_fn(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        let ordering = tuple3(I32Ordering, &counting, &counting);

        assert_eq!(ordering.compare(&(1, 0, 0), &(2, 0, 0)), Ordering::Less);
        assert_eq!(calls.get(), 0);

        assert_eq!(ordering.compare(&(1, 1, 0), &(1, 2, 0)), Ordering::Less);
        assert_eq!(calls.get(), 1);

        assert_eq!(ordering.compare(&(1, 1, 5), &(1, 1, 5)), Ordering::Equal);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_tuple9() {
        let ordering = ordering::<(i32, i32, i32, i32, i32, i32, i32, i32, bool)>();
        let a = (0, 0, 0, 0, 0, 0, 0, 0, false);
        let b = (0, 0, 0, 0, 0, 0, 0, 0, true);
        assert_eq!(ordering.compare(&a, &b), Ordering::Less);
        assert_eq!(ordering.compare(&b, &a), Ordering::Greater);
        assert_eq!(ordering.compare(&a, &a), Ordering::Equal);

        let c = (0, 0, 0, 0, 1, 0, 0, 0, false);
        assert_eq!(ordering.compare(&c, &b), Ordering::Greater);
    }

    #[test]
    fn test_mixed_arity() {
        let ordering = tuple4(CharOrdering, BoolOrdering, F64Ordering, I32Ordering.reverse());
        let mut v = vec![
            ('b', false, 1.0, 1),
            ('a', true, 0.5, 1),
            ('a', true, 0.5, 3),
            ('a', false, 9.0, 0),
        ];
        v.sort_by(|a, b| ordering.compare(a, b));
        assert_eq!(
            v,
            vec![
                ('a', false, 9.0, 0),
                ('a', true, 0.5, 3),
                ('a', true, 0.5, 1),
                ('b', false, 1.0, 1),
            ]
        );
    }

    #[test]
    fn test_partial_tuple() {
        let ordering = tuple2(I32Ordering, NaturalPartialOrdering::<f64>::new());
        assert_eq!(ordering.try_compare(&(1, f64::NAN), &(2, 0.0)), Some(Ordering::Less));
        assert_eq!(ordering.try_compare(&(1, f64::NAN), &(1, 0.0)), None);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = tuple3(I32Ordering, StrOrdering, I32Ordering.reverse());
        let b = tuple3(I32Ordering, StrOrdering, I32Ordering.reverse());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
        assert_eq!(ordering::<(i32, String)>(), tuple2(I32Ordering, StrOrdering));
    }
}
