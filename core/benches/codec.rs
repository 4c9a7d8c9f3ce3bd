use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tagcodec_core::compression::registry::resolve;
use tagcodec_core::prelude::*;

fn text_payload(len: usize, rng: &mut StdRng) -> Vec<u8> {
    const WORDS: [&str; 6] = ["user ", "token ", "expires ", "role ", "admin ", "guest "];
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        out.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
    }
    out.truncate(len);
    out
}

fn random_payload(len: usize, rng: &mut StdRng) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let codec = Codec::default();
    let mut group = c.benchmark_group("encode");

    for size in [256usize, 4 * 1024, 64 * 1024] {
        for (kind, payload) in [
            ("text", text_payload(size, &mut rng)),
            ("random", random_payload(size, &mut rng)),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(kind, size), &payload, |b, p| {
                b.iter(|| codec.encode(black_box(p)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEC0DE);
    let payload = text_payload(64 * 1024, &mut rng);
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for tag in Registry::standard().tags().into_iter().skip(1) {
        let Ok(alg) = resolve(tag) else { continue };
        let reg = Registry::new(vec![resolve(tag_ids::IDENTITY).unwrap(), alg]).unwrap();
        let codec = Codec::new(reg, Thresholds::new(0, 1.0).unwrap()).unwrap();
        let frame = codec.encode(&payload).unwrap();
        group.bench_with_input(BenchmarkId::new(alg.name, payload.len()), &frame, |b, f| {
            b.iter(|| codec.decode(black_box(f)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
