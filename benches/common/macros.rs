// Benchmark macros to reduce boilerplate code

// Creates a benchmark group measuring one precompile over a list of sizes.
//
// # Usage
// ```no_run
// benchmark_precompile!(
//     precompile_sha256,
//     PrecompileKind::Sha256,
//     HASH_INPUT_SIZES,
//     |rng, size| hash_input(rng, size),
//     |size| Some(criterion::Throughput::Bytes(size as u64))
// );
// ```
#[macro_export]
macro_rules! benchmark_precompile {
    ($func_name:ident, $kind:expr, $sizes:expr, $input:expr, $throughput:expr) => {
        fn $func_name(c: &mut Criterion) {
            let kind: PrecompileKind = $kind;
            let precompiles = EvmPrecompiles::istanbul();
            let precompile = precompiles.get(kind).expect("precompile missing from istanbul");
            let mut rng = ChaCha20Rng::seed_from_u64($crate::common::config::INPUT_SEED);

            let mut group = c.benchmark_group(format!("precompile-{}", kind.name()));
            group.sample_size($crate::common::config::DEFAULT_SAMPLE_SIZE);
            group.measurement_time($crate::common::config::DEFAULT_MEASUREMENT_TIME);

            for size_ref in $sizes {
                let size_val = *size_ref;
                let input = Bytes::from($input(&mut rng, size_val));
                if let Some(throughput) = $throughput(size_val) {
                    group.throughput(throughput);
                }
                group.bench_with_input(
                    BenchmarkId::new(kind.name(), size_val),
                    &input,
                    |b: &mut criterion::Bencher, input: &Bytes| {
                        b.iter(|| precompile.run(black_box(input)).expect("precompile failed"))
                    },
                );
            }

            group.finish();
        }
    };
}
