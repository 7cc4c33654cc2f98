use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use training_stats::{read_package, render};

fn bench_render_packages(c: &mut Criterion) {
    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];
    c.bench_function("read_and_render_sample_packages", |b| {
        b.iter(|| {
            for (code, args) in packages {
                let workout = read_package(black_box(code), black_box(args)).expect("workout");
                black_box(render(&workout));
            }
        })
    });
}

criterion_group!(benches, bench_render_packages);
criterion_main!(benches);
