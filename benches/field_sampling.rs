use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fieldscope::dataset::{BlobsOptions, Dataset, generate_blobs};
use fieldscope::field::{FieldSampler, GridSpec};
use fieldscope::ml::ClassifierRegistry;
use fieldscope::ml::stumps::BoostedStumpsModel;
use fieldscope::render::{CoordinateMapper, PlaygroundRenderer};

const GRID_RESOLUTION: usize = 100;
const CANVAS_SIZE: usize = 600;

fn trained_setup() -> (ClassifierRegistry, GridSpec, Dataset) {
    let base = generate_blobs(&BlobsOptions::default());
    let spec = GridSpec::from_base_points(&base, GRID_RESOLUTION, 1.0);
    let dataset = Dataset::new(base);
    let mut registry =
        ClassifierRegistry::new("boosted stumps", Box::new(BoostedStumpsModel::default()));
    let (points, labels) = dataset.combined();
    registry.train_active(&points, &labels).expect("train");
    (registry, spec, dataset)
}

fn bench_field_recompute(c: &mut Criterion) {
    let (registry, spec, _dataset) = trained_setup();
    c.bench_with_input(
        BenchmarkId::new("field_recompute", GRID_RESOLUTION),
        &registry,
        |b, registry| {
            let mut sampler = FieldSampler::new(spec.clone(), 1.0);
            b.iter(|| {
                sampler.invalidate();
                sampler.ensure_fresh(black_box(registry)).expect("sample");
            });
        },
    );
}

fn bench_canvas_render(c: &mut Criterion) {
    let (registry, spec, dataset) = trained_setup();
    let mut sampler = FieldSampler::new(spec.clone(), 1.0);
    sampler.ensure_fresh(&registry).expect("sample");
    let mapper = CoordinateMapper::new(&spec, CANVAS_SIZE);
    let renderer = PlaygroundRenderer::new(CANVAS_SIZE);
    let mut surface = egui::ColorImage::new([0, 0], Vec::new());

    c.bench_function("canvas_render", |b| {
        b.iter(|| {
            renderer.render(
                black_box(sampler.field()),
                black_box(&dataset),
                &mapper,
                &mut surface,
            );
        });
    });
}

criterion_group!(benches, bench_field_recompute, bench_canvas_render);
criterion_main!(benches);
