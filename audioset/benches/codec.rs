use audioset::{Codec, CodecConfig, Matrix, ScaleMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Clip counts benchmarked, at one second of 16 kHz audio each
const CLIP_COUNTS: &[usize] = &[16, 128, 1024];
const SAMPLES: usize = 16_000;
const LABELS: usize = 527;

fn random_dataset(seed: u64, nclips: usize) -> (Matrix<f32>, Matrix<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = (0..nclips * SAMPLES).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
    let labels = (0..nclips * LABELS).map(|_| i32::from(rng.gen_bool(0.02))).collect();

    (
        Matrix::from_vec(nclips, SAMPLES, samples).expect("waveform shape"),
        Matrix::from_vec(nclips, LABELS, labels).expect("label shape"),
    )
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &nclips in CLIP_COUNTS {
        let (waveform, labels) = random_dataset(42, nclips);
        let codec = Codec::new(CodecConfig::default().with_scale_mode(ScaleMode::Normalized));
        let record_len = codec.encode_to_vec(&waveform, &labels).expect("encode").len();

        group.throughput(Throughput::Bytes(record_len as u64));
        group.bench_with_input(BenchmarkId::new("normalized", nclips), &nclips, |b, &_| {
            b.iter(|| codec.encode_to_vec(black_box(&waveform), black_box(&labels)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &nclips in CLIP_COUNTS {
        let (waveform, labels) = random_dataset(123, nclips);
        let codec = Codec::default();
        let record = codec.encode_to_vec(&waveform, &labels).expect("encode");

        group.throughput(Throughput::Bytes(record.len() as u64));
        group.bench_with_input(BenchmarkId::new("in_memory", nclips), &nclips, |b, &_| {
            b.iter(|| {
                let mut body = black_box(record.as_slice());
                codec.decode(&mut body)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
