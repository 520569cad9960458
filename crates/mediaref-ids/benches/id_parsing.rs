//! Benchmarks for mediaref-ids.
//!
//! Run with: cargo bench -p mediaref-ids

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mediaref_core::{MediaType, ParseOptions, ProviderKind};
use mediaref_ids::{
    coerce_provider_ref, format_id_for_id_prefixes, parse_episode_id_suffix, parse_media_id_input,
    parse_provider_ref_strict,
};

const STRICT_SAMPLES: &[&str] = &[
    "tmdb:movie:550",
    "imdb:show:tt0944947",
    "trakt:episode:73640",
    "tvdb:show:121361",
    "simkl:movie:17",
];

const MIXED_SAMPLES: &[&str] = &[
    "tt0137523",
    "tt0944947:1:2",
    "tmdb:1399:1:2",
    "imdb:show:tt0944947:8:6",
    "trakt:1390",
    "550",
    "kitsu:1234",
    "  TT0137523  ",
];

fn bench_grammar(c: &mut Criterion) {
    let mut group = c.benchmark_group("grammar");

    group.bench_function("strict_ref", |b| {
        b.iter(|| parse_provider_ref_strict(black_box("tmdb:movie:550")))
    });

    group.bench_function("episode_suffix", |b| {
        b.iter(|| parse_episode_id_suffix(black_box("imdb:show:tt0944947:8:6")))
    });

    group.finish();
}

fn bench_unified_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_media_id_input");
    let strict = ParseOptions::strict();
    let loose = ParseOptions::builder().loose_imdb(true).build();

    for (name, options) in [("strict", strict), ("loose_imdb", loose)] {
        group.throughput(Throughput::Elements(MIXED_SAMPLES.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", name), &options, |b, options| {
            b.iter(|| {
                for input in MIXED_SAMPLES {
                    black_box(parse_media_id_input(black_box(*input), options));
                }
            })
        });
    }

    group.throughput(Throughput::Elements(STRICT_SAMPLES.len() as u64));
    group.bench_function("typed", |b| {
        b.iter(|| {
            for input in STRICT_SAMPLES {
                black_box(parse_media_id_input(black_box(*input), &strict));
            }
        })
    });

    group.finish();
}

fn bench_coerce_and_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("coerce_and_format");

    group.bench_function("coerce_mixed", |b| {
        b.iter(|| {
            for input in MIXED_SAMPLES {
                black_box(coerce_provider_ref(
                    black_box(*input),
                    ProviderKind::Show,
                    Default::default(),
                ));
            }
        })
    });

    group.bench_function("format_for_prefixes", |b| {
        let prefixes = ["tmdb:", "tt"];
        b.iter(|| {
            format_id_for_id_prefixes(
                black_box("imdb:show:tt0944947:1:2"),
                MediaType::Series,
                &prefixes,
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_grammar,
    bench_unified_parse,
    bench_coerce_and_format
);
criterion_main!(benches);
