//! Route encoding benchmarks for travel-lib
//!
//! Run with: cargo bench --package travel-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use travel_lib::{Catalog, Navigator, Route, RouteTransport};

fn bench_route_codec(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    let mut group = c.benchmark_group("route_codec");

    for (index, attraction) in catalog.iter().enumerate().step_by(3) {
        let route = Route::details(attraction);
        let path = route.to_path();
        group.throughput(Throughput::Bytes(path.len() as u64));

        group.bench_with_input(BenchmarkId::new("to_path", index), &route, |b, route| {
            b.iter(|| black_box(route.to_path()))
        });
        group.bench_with_input(BenchmarkId::new("parse", index), &path, |b, path| {
            b.iter(|| black_box(Route::parse(path).expect("path was produced by to_path")))
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    let mut group = c.benchmark_group("navigator_select");

    for transport in [RouteTransport::Typed, RouteTransport::Encoded] {
        group.bench_function(format!("{transport:?}"), |b| {
            b.iter(|| {
                let mut navigator = Navigator::new();
                navigator
                    .select(&catalog, black_box(3), transport)
                    .expect("index in range")
                    .name
                    .len()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route_codec, bench_select);
criterion_main!(benches);
