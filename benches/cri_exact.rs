use criterion::{criterion_group, criterion_main, Criterion};

use tumbler::exact::compute_exact;
use tumbler::probs::SliceExt;

fn criterion_benchmark(c: &mut Criterion) {
    let chances = [
        250.0, 199.0, 156.0, 119.0, 88.0, 63.0, 43.0, 28.0, 17.0, 11.0, 8.0, 7.0, 6.0, 5.0,
    ];

    // sanity check
    let matrix = compute_exact(&chances, 3);
    assert!((matrix.row_slice(0).sum() - 1.0).abs() < 1e-9);

    fn bench(c: &mut Criterion, chances: &[f64], num_to_pick: usize) {
        c.bench_function(
            &format!("cri_exact_{}c{num_to_pick}", chances.len()),
            |b| {
                b.iter(|| {
                    compute_exact(chances, num_to_pick);
                });
            },
        );
    }
    bench(c, &chances, 2);
    bench(c, &chances, 3);
    bench(c, &chances, 4);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
