//! Benchmarks for one dashboard pass over a 100-row dataset

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hospital::charts::svg::{render_bar_svg, render_line_svg, render_pie_svg};
use hospital::data::{generate_sample_data, Department, Physician};
use hospital::dashboard::render_page;
use hospital::pipeline::{run_pipeline, Selection, Selector};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_sample_data", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| black_box(generate_sample_data(&mut rng, Utc::now())));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = generate_sample_data(&mut StdRng::seed_from_u64(2), Utc::now());
    let all = Selection::default();
    let narrow = Selection::new(
        Selector::Only(Department::Cardiology),
        Selector::Only(Physician::Smith),
    );

    c.bench_function("run_pipeline_all", |b| {
        b.iter(|| black_box(run_pipeline(black_box(&rows), &all)));
    });
    c.bench_function("run_pipeline_narrow", |b| {
        b.iter(|| black_box(run_pipeline(black_box(&rows), &narrow)));
    });
}

fn bench_render(c: &mut Criterion) {
    let rows = generate_sample_data(&mut StdRng::seed_from_u64(3), Utc::now());
    let view = run_pipeline(&rows, &Selection::default());

    c.bench_function("render_charts_svg", |b| {
        b.iter(|| {
            black_box(render_line_svg(&view.charts.wait_times).unwrap());
            black_box(render_bar_svg(&view.charts.occupancy).unwrap());
            black_box(render_pie_svg(&view.charts.demographics).unwrap());
        });
    });
    c.bench_function("render_page", |b| {
        b.iter(|| black_box(render_page(&view, "Hospital Dashboard")));
    });
}

criterion_group!(benches, bench_generate, bench_pipeline, bench_render);
criterion_main!(benches);
