use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sharedkey_api::{Cipher, SharedKey256};
use sharedkey_symmetric::{AesCbcCipher, AesGcmCipher};

fn bench_aes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-256");
    let key = SharedKey256::new([0x42; 32]);
    let cbc = AesCbcCipher::new(&key);
    let gcm = AesGcmCipher::new(&key);

    for size in [16, 256, 1024, 16384].iter() {
        let data = vec![0u8; *size];

        group.bench_with_input(BenchmarkId::new("CBC", size), size, |b, _| {
            b.iter(|| cbc.encrypt(&data, &[0u8; 16]))
        });

        group.bench_with_input(BenchmarkId::new("GCM", size), size, |b, _| {
            b.iter(|| gcm.encrypt(&data, &[0u8; 12]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aes);
criterion_main!(benches);
