use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};

use tumbler::draw;

fn criterion_benchmark(c: &mut Criterion) {
    let weights = draw::sanitise_weights(&[
        250.0, 199.0, 156.0, 119.0, 88.0, 63.0, 43.0, 28.0, 17.0, 11.0, 8.0, 7.0, 6.0, 5.0,
    ]);
    let mut order = [usize::MAX; 14];
    let mut taken = [false; 14];

    // sanity check
    draw::run_once(&weights, 4, &mut order, &mut taken, &mut StdRand::default());
    for participant in order {
        assert_ne!(usize::MAX, participant);
    }

    c.bench_function("cri_draw_4_of_14", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| {
            draw::run_once(&weights, 4, &mut order, &mut taken, &mut rand);
        });
    });

    c.bench_function("cri_draw_14_of_14", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| {
            draw::run_once(&weights, 14, &mut order, &mut taken, &mut rand);
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
