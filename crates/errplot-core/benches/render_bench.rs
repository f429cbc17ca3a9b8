use anyhow::Result;
use criterion::{criterion_group, criterion_main, black_box, Criterion};
use errplot_core::{Dataset, GradientBarChart, PolarErrorChart, RenderOptions};

fn sample(n: usize) -> Dataset {
    let pairs: Vec<(i64, f64)> = (1..=n)
        .map(|i| (i as i64, 10f64.powf(-(i as f64) * 0.35)))
        .collect();
    Dataset::from_pairs(&pairs)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[8usize, 32usize] {
        group.bench_function(format!("polar_{n}"), |b| {
            let chart = PolarErrorChart::new(sample(n));
            let mut opts = RenderOptions::polar();
            opts.width = 980;
            opts.height = 700;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("bars_{n}"), |b| {
            let chart = GradientBarChart::new(sample(n));
            let mut opts = RenderOptions::bars();
            opts.width = 980;
            opts.height = 560;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
