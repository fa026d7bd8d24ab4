// In benches/linecode_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use eightbtenb::kernels::symbols::encoded_len;
use eightbtenb::CodingContext;

// --- Mock data: a repeating 0..=255 counting pattern ---

fn generate_counting_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

// --- Benchmark Suite ---

const MAX_SIZE: usize = 4096;
const SIZES: [usize; 5] = [1, 16, 256, 1024, MAX_SIZE - 1];

fn bench_linecode(c: &mut Criterion) {
    let src = generate_counting_bytes(MAX_SIZE);

    let mut group = c.benchmark_group("8b10b");

    for size in SIZES {
        let input = &src[..size];
        group.throughput(Throughput::Bytes(size as u64));

        // Encode into a fresh, zeroed buffer every iteration: the packer ORs bits in.
        group.bench_with_input(BenchmarkId::new("encode", size), input, |b, input| {
            b.iter_batched_ref(
                || vec![0u8; encoded_len(input.len())],
                |dest| {
                    let mut ctx = CodingContext::new();
                    ctx.set_output(&mut dest[..]);
                    ctx.encode(black_box(input));
                },
                criterion::BatchSize::SmallInput,
            )
        });

        // Decode back into a reused buffer; decoding overwrites whole bytes.
        let mut encoded = vec![0u8; encoded_len(size)];
        {
            let mut ctx = CodingContext::new();
            ctx.set_output(&mut encoded[..]);
            ctx.encode(input);
        }
        let mut decoded = vec![0u8; size];
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| {
                let mut ctx = CodingContext::new();
                ctx.set_output(&mut decoded[..]);
                black_box(ctx.decode(black_box(encoded), size * 10))
            })
        });
    }

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_linecode);
criterion_main!(benches);
