use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffheap::{HuffmanCodec, IndexedMinHeap};

const SAMPLE: &str = "the quick brown fox jumps over the lazy dog, \
                      pack my box with five dozen liquor jugs.";

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    // Repeat the sample so throughput dominates call overhead
    let input = SAMPLE.repeat(64);

    group.bench_function("build", |b| {
        b.iter(|| HuffmanCodec::from_sample(black_box(SAMPLE)).unwrap())
    });

    let mut codec = HuffmanCodec::from_sample(SAMPLE).unwrap();
    group.bench_function("compress", |b| {
        b.iter(|| codec.compress(black_box(&input)).unwrap())
    });

    let bits = codec.compress(&input).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| codec.decompress(black_box(&bits)).unwrap())
    });
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");
    let keys = (0..1000u32).map(|i| (i * 7919) % 1000).collect::<Vec<_>>();

    group.bench_function("add_extract", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(keys.len());
            for (v, &k) in keys.iter().enumerate() {
                heap.add(k, v).unwrap();
            }
            while heap.extract_min().is_ok() {}
        })
    });

    group.bench_function("decrease_key", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(keys.len());
            for (v, &k) in keys.iter().enumerate() {
                heap.add(k + 1000, v).unwrap();
            }
            for (v, &k) in keys.iter().enumerate() {
                heap.decrease_key(&v, k).unwrap();
            }
            heap
        })
    });
}

criterion_group!(benches, bench_codec, bench_heap);
criterion_main!(benches);
