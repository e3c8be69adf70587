// File: crates/passchart-examples/src/bin/compression.rs
// Summary: Charts a compression benchmark (one chart per codec, compression/decompression passes) to PNG and HTML.

use anyhow::Result;
use passchart_core::{render_chart, GlobalDefaults, HtmlPage, Page, Pass, ResultSet};

const FILES: [&str; 5] = ["alice29.txt", "kennedy.xls", "lcet10.txt", "ptt5", "sum"];

fn codec(name: &str, compress_ns: [f64; 5], decompress_ns: [f64; 5]) -> ResultSet {
    ResultSet::new(name, name, FILES)
        .with_pass(Pass::new("compression", "rgba(75,192,192,0.4)", compress_ns))
        .with_pass(Pass::new("decompression", "rgba(255,99,132,0.6)", decompress_ns))
}

fn main() -> Result<()> {
    let results = vec![
        codec("lz4", [410.0, 1320.0, 1180.0, 290.0, 95.0], [120.0, 380.0, 350.0, 70.0, 30.0]),
        codec("lz4Fast", [300.0, 980.0, 860.0, 210.0, 70.0], [118.0, 371.0, 344.0, 69.0, 29.0]),
        codec("Snappy", [520.0, 1610.0, 1400.0, 330.0, 110.0], [210.0, 640.0, 590.0, 120.0, 45.0])
            .with_axis_type("logarithmic"),
    ];

    let defaults = GlobalDefaults::default();
    let mut page = Page::new(defaults);
    let mut html = HtmlPage::new("Test Suite", &defaults);
    for r in &results {
        page.add_default_canvas(r.canvas_id.clone())?;
        render_chart(&mut page, r)?;
        html.push(r)?;
    }

    for r in &results {
        let out = std::path::PathBuf::from(format!("target/out/example_{}.png", r.canvas_id));
        page.write_png(&r.canvas_id, &out)?;
        println!("Wrote {}", out.display());
    }
    html.write("target/out/example_compression.html")?;
    println!("Wrote target/out/example_compression.html");
    Ok(())
}
