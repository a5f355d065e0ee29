use gmsm::cipher::sm4::{Sm4, cbc_encrypt, gcm_encrypt};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sm4(c: &mut Criterion) {
    let key = [0x13u8; 16];

    c.bench_function("sm4 block encrypt", |b| {
        let cipher = Sm4::new(&key);
        b.iter(|| cipher.encrypt_block(black_box(&[0u8; 16])))
    });

    c.bench_function("sm4 cbc 4 KiB", |b| {
        let input = vec![0u8; 4096];
        b.iter(|| cbc_encrypt(&key, &[0u8; 16], black_box(&input)))
    });

    c.bench_function("sm4 gcm 4 KiB", |b| {
        let input = vec![0u8; 4096];
        b.iter(|| gcm_encrypt(&key, &[0u8; 12], b"", black_box(&input)))
    });
}

criterion_group!(benches, bench_sm4);
criterion_main!(benches);
