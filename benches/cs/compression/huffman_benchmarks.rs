use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffcode::cs::compression::huffman::HuffmanCoder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn skewed_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..len)
        .map(|_| {
            // Roughly geometric distribution so codes have varied lengths.
            let mut byte = 0u8;
            while byte < 255 && rng.gen_bool(0.5) {
                byte += 1;
            }
            byte
        })
        .collect()
}

fn bench_huffman(c: &mut Criterion) {
    let coder = HuffmanCoder::bytes();
    let mut group = c.benchmark_group("huffman");

    for size in [1_000, 10_000, 100_000] {
        let data = skewed_bytes(size);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| coder.compress_bytes(black_box(data)))
        });

        let encoded = coder.compress_bytes(&data).unwrap();
        group.bench_with_input(
            BenchmarkId::new("decompress", size),
            &encoded,
            |b, encoded| b.iter(|| coder.decompress_bytes(black_box(encoded))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
