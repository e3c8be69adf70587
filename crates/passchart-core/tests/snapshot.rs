// File: crates/passchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use passchart_core::{render_chart, GlobalDefaults, Page, Pass, RenderOptions, ResultSet};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_to_bytes(result: &ResultSet) -> Vec<u8> {
    let opts = RenderOptions { width: 480, height: 280, draw_labels: false, ..RenderOptions::default() };
    let mut page = Page::with_options(GlobalDefaults::default(), opts);
    page.add_default_canvas(result.canvas_id.clone()).expect("canvas");
    render_chart(&mut page, result).expect("render");
    page.to_png_bytes(&result.canvas_id).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_two_passes() {
    let result = ResultSet::new("Compression", "two_passes", ["a.txt", "b.bin", "c.json", "d.log"])
        .with_pass(Pass::new("lz4", "rgba(75,192,192,1)", [120.0, 340.0, 80.0, 260.0]))
        .with_pass(Pass::new("snappy", "#ff6384", [150.0, 300.0, 95.0, 310.0]));
    let bytes = render_to_bytes(&result);
    write_or_compare(&snapshot_path("two_passes.png"), &bytes);
}

#[test]
fn golden_log_axis_with_gap() {
    let result = ResultSet::new("Latency", "log_axis", ["1", "2", "4", "8", "16"])
        .with_pass(Pass::with_gaps("p99", "steelblue", vec![Some(3.0), Some(40.0), None, Some(900.0), Some(2500.0)]))
        .with_axis_type("logarithmic")
        .with_axis_max(10_000.0);
    let bytes = render_to_bytes(&result);
    write_or_compare(&snapshot_path("log_axis.png"), &bytes);
}
