//! Benchmarks for auth token construction

use cord_auth::{
    ClientAuthTokenData, FixedClock, GroupDetails, Metadata, MetadataValue, Status, TokenIssuer,
    UserDetails,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark the three token kinds under a pinned clock
fn benchmark_token_kinds(c: &mut Criterion) {
    let issuer = TokenIssuer::new(b"0987654321")
        .with_clock(FixedClock::from_unix_seconds(1_655_383_113).expect("timestamp in range"));
    let mut group = c.benchmark_group("token_kinds");

    group.bench_function("server", |b| {
        b.iter(|| {
            let token = issuer.server_token("1234567890").expect("server token");
            std::hint::black_box(token);
        });
    });

    group.bench_function("management", |b| {
        b.iter(|| {
            let token = issuer.management_token("345456567").expect("management token");
            std::hint::black_box(token);
        });
    });

    let data = ClientAuthTokenData::new("112233")
        .with_group_id("445566")
        .with_user_details(UserDetails {
            email: "flooey@example.com".to_string(),
            name: "Adam Vartanian".to_string(),
            status: Status::Active,
            ..UserDetails::default()
        })
        .with_group_details(GroupDetails::named("Cord"));

    group.bench_function("client", |b| {
        b.iter(|| {
            let token = issuer.client_token("1234567890", &data).expect("client token");
            std::hint::black_box(token);
        });
    });

    group.finish();
}

/// Benchmark client tokens as user metadata grows
fn benchmark_metadata_size(c: &mut Criterion) {
    let issuer = TokenIssuer::new(b"0987654321")
        .with_clock(FixedClock::from_unix_seconds(1_655_383_113).expect("timestamp in range"));
    let mut group = c.benchmark_group("client_metadata");

    for entries in [0usize, 8, 64] {
        let metadata: Metadata = (0..entries)
            .map(|i| (format!("key_{i}"), MetadataValue::from(format!("value_{i}"))))
            .collect();
        let data = ClientAuthTokenData::new("112233").with_user_details(UserDetails {
            metadata,
            ..UserDetails::default()
        });

        group.bench_with_input(BenchmarkId::from_parameter(entries), &data, |b, data| {
            b.iter(|| {
                let token = issuer.client_token("1234567890", data).expect("client token");
                std::hint::black_box(token);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_token_kinds, benchmark_metadata_size);
criterion_main!(benches);
