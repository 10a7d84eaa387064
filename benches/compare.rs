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

#[macro_use]
extern crate criterion;
use criterion::{black_box, Criterion};

use ordkit::option::option;
use ordkit::ord::{from_fn, DynOrdering, TotalOrdering};
use ordkit::partial::NaturalPartialOrdering;
use ordkit::primitive::{F64Ordering, I32Ordering};
use ordkit::rank::rank;
use ordkit::registry::ordering;
use ordkit::sort::{sort_by_ordering, sort_to_indices, sort_unstable_by_ordering};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn create_i32_values(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.random()).collect()
}

fn create_f64_values(size: usize, nan_density: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| match rng.random_bool(nan_density) {
            true => f64::NAN,
            false => rng.random(),
        })
        .collect()
}

fn create_optional_rows(size: usize) -> Vec<(Option<i32>, String)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| {
            let key = rng.random_bool(0.9).then(|| rng.random_range(0..100));
            (key, format!("{:x}", rng.random_range(0..4096)))
        })
        .collect()
}

fn add_benchmark(c: &mut Criterion) {
    let values = create_i32_values(2usize.pow(12));
    c.bench_function("sort i32 2^12", |b| {
        b.iter(|| {
            let mut v = values.clone();
            sort_by_ordering(&mut v, &I32Ordering);
            black_box(v)
        })
    });
    c.bench_function("sort i32 std 2^12", |b| {
        b.iter(|| {
            let mut v = values.clone();
            v.sort();
            black_box(v)
        })
    });
    c.bench_function("sort unstable i32 reverse 2^12", |b| {
        b.iter(|| {
            let mut v = values.clone();
            sort_unstable_by_ordering(&mut v, &I32Ordering.reverse());
            black_box(v)
        })
    });

    let dyn_ordering: DynOrdering<i32> = Arc::new(from_fn(|a: &i32, b: &i32| a.cmp(b)));
    c.bench_function("sort i32 dyn 2^12", |b| {
        b.iter(|| {
            let mut v = values.clone();
            sort_by_ordering(&mut v, &dyn_ordering);
            black_box(v)
        })
    });

    let values = create_f64_values(2usize.pow(12), 0.1);
    c.bench_function("sort f64 nan 2^12", |b| {
        b.iter(|| {
            let mut v = values.clone();
            sort_by_ordering(&mut v, &F64Ordering);
            black_box(v)
        })
    });

    let values = create_f64_values(2usize.pow(12), 0.0);
    c.bench_function("sort f64 partial to indices 2^12", |b| {
        b.iter(|| {
            black_box(sort_to_indices(&values, &NaturalPartialOrdering::new(), None).unwrap())
        })
    });
    c.bench_function("sort f64 partial to indices limit 2^12", |b| {
        b.iter(|| {
            black_box(sort_to_indices(&values, &NaturalPartialOrdering::new(), Some(10)).unwrap())
        })
    });

    let rows = create_optional_rows(2usize.pow(12));
    let row_ordering = ordering::<(Option<i32>, String)>();
    c.bench_function("sort tuple(option i32, string) 2^12", |b| {
        b.iter(|| {
            let mut v = rows.clone();
            sort_by_ordering(&mut v, &row_ordering);
            black_box(v)
        })
    });

    let keys: Vec<Option<i32>> = rows.iter().map(|r| r.0).collect();
    c.bench_function("rank option i32 2^12", |b| {
        b.iter(|| black_box(rank(&keys, &option(I32Ordering)).unwrap()))
    });
}

criterion_group!(benches, add_benchmark);
criterion_main!(benches);
