// Criterion benchmarks for Parcel Track

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parcel_track::core::{validate_query, CarrierList, TrackingFailure};
use parcel_track::models::TrackQuery;
use parcel_track::services::UpstreamError;
use serde_json::json;

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_query");

    for number in ["ENE083992448MY", "not-a-tracking-number", ""] {
        let query = TrackQuery {
            number: Some(number.to_string()),
            carrier: Some("poslaju".to_string()),
        };
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", number)), &query, |b, q| {
            b.iter(|| validate_query(black_box(q), true))
        });
    }

    group.finish();
}

fn bench_attempt_order(c: &mut Criterion) {
    let carriers = CarrierList::new(["pos-malaysia", "poslaju", "my-post", "malaysia-post"]);

    c.bench_function("attempt_order_preferred", |b| {
        b.iter(|| carriers.attempt_order(black_box(Some("my-post"))))
    });
}

fn bench_failure_response(c: &mut Criterion) {
    let failure = TrackingFailure::Upstream {
        carrier: "malaysia-post".to_string(),
        error: UpstreamError::Status {
            status: 404,
            body: json!({ "message": "Shipment not found", "code": "NOT_FOUND" }),
        },
    };

    c.bench_function("failure_to_response", |b| {
        b.iter(|| {
            let body = black_box(&failure).to_response(Utc::now());
            serde_json::to_vec(&body).unwrap()
        })
    });
}

criterion_group!(benches, bench_validation, bench_attempt_order, bench_failure_response);
criterion_main!(benches);
