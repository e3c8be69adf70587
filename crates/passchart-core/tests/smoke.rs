// File: crates/passchart-core/tests/smoke.rs
// Purpose: End-to-end render through the adapter onto a page canvas, writing a PNG.

use passchart_core::{render_chart, ChartError, GlobalDefaults, Page, Pass, ResultSet};

fn sample() -> ResultSet {
    ResultSet::new("Latency", "latency", ["0", "1", "2", "3", "4"])
        .with_pass(Pass::new("First Pass", "rgba(75,192,192,0.4)", [100.0, 200.0, 800.0, 400.0, 300.0]))
        .with_pass(Pass::new("Second Pass", "rgb(255,99,132)", [500.0, 400.0, 300.0, 350.0, 600.0]))
}

#[test]
fn render_smoke_png() {
    let mut page = Page::new(GlobalDefaults::default());
    page.add_canvas("latency", 640, 320).expect("canvas");
    render_chart(&mut page, &sample()).expect("render should succeed");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    page.write_png("latency", &out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = page.to_png_bytes("latency").expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn unknown_canvas_is_an_error() {
    let mut page = Page::new(GlobalDefaults::default());
    page.add_default_canvas("other").expect("canvas");
    let err = render_chart(&mut page, &sample()).expect_err("no such canvas");
    assert!(matches!(err, ChartError::CanvasNotFound(ref id) if id == "latency"));
    assert_eq!(page.chart_count("other"), 0);
}

#[test]
fn duplicate_canvas_ids_are_rejected() {
    let mut page = Page::new(GlobalDefaults::default());
    page.add_default_canvas("c").expect("first");
    assert!(matches!(page.add_default_canvas("c"), Err(ChartError::DuplicateCanvas(_))));
    assert_eq!(page.canvas_ids().collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn repeated_renders_create_independent_instances() {
    let mut page = Page::new(GlobalDefaults::default());
    page.add_default_canvas("latency").expect("canvas");

    let first = sample();
    let second = sample().with_axis_type("logarithmic");
    render_chart(&mut page, &first).expect("first");
    render_chart(&mut page, &second).expect("second");

    let canvas = page.canvas("latency").expect("canvas");
    assert_eq!(canvas.charts().len(), 2);
    assert_eq!(canvas.charts()[0].config().options.y_axis().axis_type, "linear");
    assert_eq!(canvas.charts()[1].config().options.y_axis().axis_type, "logarithmic");
}

#[test]
fn defaults_apply_unless_the_chart_overrides() {
    let defaults = GlobalDefaults { title_display: false, ..GlobalDefaults::default() };
    let mut page = Page::new(defaults);
    page.add_default_canvas("latency").expect("canvas");
    render_chart(&mut page, &sample()).expect("render");
    assert!(page.canvas("latency").unwrap().charts()[0].layout().title.is_none());

    let mut config = passchart_core::build_chart_config(&sample());
    config.options.title.display = Some(true);
    page.draw("latency", config).expect("draw override");
    assert!(page.canvas("latency").unwrap().charts()[1].layout().title.is_some());
}
