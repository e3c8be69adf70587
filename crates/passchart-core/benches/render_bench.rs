use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use passchart_core::{render_chart, GlobalDefaults, Page, Pass, RenderOptions, ResultSet};

fn build_result(n: usize) -> ResultSet {
    let labels = (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
    let a = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + 20.0);
    let b = (0..n).map(|i| (i as f64 * 0.02).cos() * 8.0 + 20.0);
    ResultSet::new("Bench", "bench", labels)
        .with_pass(Pass::new("a", "#36a2eb", a))
        .with_pass(Pass::new("b", "#ff6384", b))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("passes2_{n}"), |b| {
            let r = build_result(n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let mut page = Page::with_options(GlobalDefaults::default(), opts);
                page.add_default_canvas("bench")?;
                render_chart(&mut page, &r)?;
                black_box(page.to_png_bytes("bench")?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
