use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use cube_sorter::{CubeClassifier, ReferenceModel, RgbSample, SorterConfig};

fn bundled_config() -> SorterConfig {
    SorterConfig::with_sample_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn benchmark_model_build(c: &mut Criterion) {
    let config = bundled_config();
    c.bench_function("build_reference_model", |b| {
        b.iter(|| ReferenceModel::from_config(black_box(&config)).unwrap())
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let classifier = CubeClassifier::new(ReferenceModel::from_config(&bundled_config()).unwrap());

    // A realistic 1.5 s scan window yields a few dozen samples
    let batch: Vec<RgbSample> = (0..48)
        .map(|i| {
            let wobble = 1.0 + 0.01 * (i % 7) as f64;
            RgbSample::new(262.0 * wobble, 35.0 * wobble, 31.0 * wobble)
        })
        .collect();

    c.bench_function("classify_batch_48", |b| {
        b.iter(|| classifier.classify(black_box(&batch)).unwrap())
    });
}

criterion_group!(benches, benchmark_model_build, benchmark_classify);
criterion_main!(benches);
