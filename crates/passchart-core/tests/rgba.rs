// File: crates/passchart-core/tests/rgba.rs
// Purpose: Validate RGBA buffers: series pixels, empty charts, hit testing and hover restyling.

use passchart_core::{render_chart, GlobalDefaults, Page, Pass, RenderOptions, ResultSet};

fn page_without_labels(id: &str) -> Page {
    let opts = RenderOptions { width: 400, height: 240, draw_labels: false, ..RenderOptions::default() };
    let mut page = Page::with_options(GlobalDefaults::default(), opts);
    page.add_default_canvas(id).expect("canvas");
    page
}

fn is_red(px: &[u8]) -> bool {
    px[0] > 200 && px[1] < 60 && px[2] < 60
}

fn red_pixels(page: &mut Page, id: &str) -> usize {
    let (px, _, _, _) = page.to_rgba8(id).expect("rgba render");
    px.chunks_exact(4).filter(|p| is_red(p)).count()
}

#[test]
fn render_rgba8_buffer() {
    let mut page = page_without_labels("c1");
    let (px, w, h, stride) = page.to_rgba8("c1").expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background is opaque white in the light theme
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn pass_color_reaches_the_canvas() {
    let mut page = page_without_labels("c1");
    let result = ResultSet::new("Latency", "c1", ["0", "1", "2"]).with_pass(Pass::new("P1", "red", [100.0, 200.0, 800.0]));
    render_chart(&mut page, &result).expect("render");
    assert!(red_pixels(&mut page, "c1") > 50);
}

#[test]
fn no_passes_draws_no_series() {
    let mut page = page_without_labels("c1");
    render_chart(&mut page, &ResultSet::new("Empty", "c1", ["0", "1", "2"])).expect("render");
    assert_eq!(red_pixels(&mut page, "c1"), 0);
    assert_eq!(page.chart_count("c1"), 1);
}

#[test]
fn hit_test_uses_the_hit_radius() {
    let mut page = page_without_labels("c1");
    let result = ResultSet::new("Latency", "c1", ["0", "1", "2"]).with_pass(Pass::new("P1", "red", [100.0, 200.0, 800.0]));
    render_chart(&mut page, &result).expect("render");

    let (x, y) = page.canvas("c1").unwrap().charts()[0].point_position(0, 1).expect("point 1");
    let hit = page.hit_test("c1", x + 6.0, y).expect("canvas").expect("within 10px");
    assert_eq!((hit.dataset_index, hit.index), (0, 1));
    assert_eq!(hit.value, 200.0);

    assert!(page.hit_test("c1", x, y - 30.0).expect("canvas").is_none());
}

#[test]
fn hover_redraws_point_in_hover_color() {
    let mut page = page_without_labels("c1");
    let result = ResultSet::new("Latency", "c1", ["0", "1", "2"]).with_pass(Pass::new("P1", "red", [100.0, 200.0, 800.0]));
    render_chart(&mut page, &result).expect("render");

    let before = red_pixels(&mut page, "c1");
    let (x, y) = page.canvas("c1").unwrap().charts()[0].point_position(0, 1).expect("point 1");
    let hit = page.hover("c1", x, y).expect("hover").expect("hit");
    assert_eq!(hit.index, 1);

    // hover fill is the pass color out to the 5px hover radius
    let (px, _, _, stride) = page.to_rgba8("c1").expect("rgba");
    let i = y.round() as usize * stride + x.round() as usize * 4;
    assert!(is_red(&px[i..i + 4]));
    assert!(red_pixels(&mut page, "c1") > before);
    assert_eq!(page.chart_count("c1"), 1);
}

fn red_near(page: &mut Page, id: &str, x: f32, y: f32, reach: i32) -> bool {
    let (px, w, h, stride) = page.to_rgba8(id).expect("rgba");
    let (cx, cy) = (x.round() as i32, y.round() as i32);
    (-reach..=reach).any(|dy| {
        (-1..=1).any(|dx| {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 || x >= w || y >= h {
                return false;
            }
            let i = y as usize * stride + x as usize * 4;
            is_red(&px[i..i + 4])
        })
    })
}

#[test]
fn gap_breaks_the_line() {
    let labels = ["0", "1", "2", "3", "4"];
    let gapped = ResultSet::new("Gaps", "c1", labels)
        .with_pass(Pass::with_gaps("P1", "red", vec![Some(400.0), Some(400.0), None, Some(400.0), Some(400.0)]));
    let mut page = page_without_labels("c1");
    render_chart(&mut page, &gapped).expect("render");

    let chart = &page.canvas("c1").unwrap().charts()[0];
    let (x1, y1) = chart.point_position(0, 1).expect("point 1");
    let (x3, _) = chart.point_position(0, 3).expect("point 3");
    assert!(chart.point_position(0, 2).is_none());
    let mid = (x1 + x3) / 2.0;

    assert!(red_near(&mut page, "c1", x1, y1, 4));
    assert!(!red_near(&mut page, "c1", mid, y1, 4));

    // the same series without the gap crosses that spot
    let solid = ResultSet::new("Solid", "c1", labels).with_pass(Pass::new("P1", "red", [400.0; 5]));
    let mut page = page_without_labels("c1");
    render_chart(&mut page, &solid).expect("render");
    assert!(red_near(&mut page, "c1", mid, y1, 4));
}

#[test]
fn log_axis_spaces_decades_evenly() {
    let result = ResultSet::new("Log", "c1", ["0", "1", "2"])
        .with_pass(Pass::new("P1", "red", [1.0, 10.0, 100.0]))
        .with_axis_type("logarithmic");
    let mut page = page_without_labels("c1");
    render_chart(&mut page, &result).expect("render");

    let chart = &page.canvas("c1").unwrap().charts()[0];
    let (_, y0) = chart.point_position(0, 0).expect("point 0");
    let (x1, y1) = chart.point_position(0, 1).expect("point 1");
    let (_, y2) = chart.point_position(0, 2).expect("point 2");
    assert!(y0 > y1 && y1 > y2);
    assert!(((y0 + y2) / 2.0 - y1).abs() < 0.5);
    assert!(red_near(&mut page, "c1", x1, y1, 2));
}
