// File: crates/passchart-core/tests/adapter.rs
// Purpose: ResultSet -> dataset/options mapping, including the fixed styling and the Chart.js JSON shape.

use passchart_core::dataset::{CapStyle, JoinStyle};
use passchart_core::{build_chart_config, build_chart_options, Pass, ResultSet};

fn latency() -> ResultSet {
    ResultSet::new("Latency", "c1", ["0", "1", "2"]).with_pass(Pass::new("P1", "red", [100.0, 200.0, 800.0]))
}

#[test]
fn single_pass_maps_name_data_color_and_title() {
    let config = build_chart_config(&latency());

    assert_eq!(config.chart_type, "line");
    assert_eq!(config.data.labels, vec!["0", "1", "2"]);
    assert_eq!(config.data.datasets.len(), 1);

    let ds = &config.data.datasets[0];
    assert_eq!(ds.label, "P1");
    assert_eq!(ds.data, vec![Some(100.0), Some(200.0), Some(800.0)]);
    assert_eq!(ds.border_color, "red");
    assert_eq!(ds.background_color, "red");
    assert_eq!(ds.point_border_color, "red");
    assert_eq!(ds.point_hover_background_color, "red");

    assert_eq!(config.options.title.text, "Latency");
    assert_eq!(config.options.title.display, None);
    let y = config.options.y_axis();
    assert_eq!(y.axis_type, "linear");
    assert_eq!(y.max, None);
}

#[test]
fn every_dataset_carries_the_fixed_styling() {
    let result = latency().with_pass(Pass::new("P2", "rgba(75,192,192,0.4)", [1.0, 2.0, 3.0]));
    for ds in build_chart_config(&result).data.datasets {
        assert!(!ds.fill);
        assert_eq!(ds.line_tension, 0.1);
        assert!(ds.border_dash.is_empty());
        assert_eq!(ds.border_dash_offset, 0.0);
        assert_eq!(ds.border_cap_style, CapStyle::Butt);
        assert_eq!(ds.border_join_style, JoinStyle::Miter);
        assert_eq!(ds.point_background_color, "#fff");
        assert_eq!(ds.point_border_width, 1.0);
        assert_eq!(ds.point_radius, 1.0);
        assert_eq!(ds.point_hover_radius, 5.0);
        assert_eq!(ds.point_hit_radius, 10.0);
        assert_eq!(ds.point_hover_border_color, "rgba(220,220,220,1)");
        assert_eq!(ds.point_hover_border_width, 2.0);
        assert_eq!(ds.border_width, None);
        assert!(!ds.span_gaps);
    }
}

#[test]
fn passes_keep_input_order_and_their_own_styling() {
    let result = ResultSet::new("Throughput", "c2", ["a", "b", "c"])
        .with_pass(Pass::new("lz4", "rgba(75,192,192,0.4)", [5.0, 4.0, 3.0]))
        .with_pass(Pass::new("snappy", "#ff6384", [7.0, 8.0, 9.0]));
    let datasets = build_chart_config(&result).data.datasets;

    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].label, "lz4");
    assert_eq!(datasets[0].border_color, "rgba(75,192,192,0.4)");
    assert_eq!(datasets[0].data, vec![Some(5.0), Some(4.0), Some(3.0)]);
    assert_eq!(datasets[1].label, "snappy");
    assert_eq!(datasets[1].border_color, "#ff6384");
    assert_eq!(datasets[1].data, vec![Some(7.0), Some(8.0), Some(9.0)]);
}

#[test]
fn no_passes_gives_labels_only() {
    let result = ResultSet::new("Empty", "c3", ["0", "1", "2"]);
    let config = build_chart_config(&result);
    assert!(config.data.datasets.is_empty());
    assert_eq!(config.data.labels.len(), 3);
}

#[test]
fn axis_type_and_max_pass_through_verbatim() {
    let result = latency().with_axis_type("logarithmic").with_axis_max(1000.0);
    let y = build_chart_options(&result).y_axis();
    assert_eq!(y.axis_type, "logarithmic");
    assert_eq!(y.max, Some(1000.0));

    let odd = latency().with_axis_type("time");
    assert_eq!(build_chart_options(&odd).y_axis().axis_type, "time");
}

#[test]
fn mismatched_lengths_are_passed_through_unchanged() {
    let result = ResultSet::new("Short", "c4", ["0", "1", "2"])
        .with_pass(Pass::new("P1", "blue", [1.0, 2.0]))
        .with_pass(Pass::new("P2", "green", [1.0, 2.0, 3.0, 4.0]));
    let datasets = build_chart_config(&result).data.datasets;
    assert_eq!(datasets[0].data, vec![Some(1.0), Some(2.0)]);
    assert_eq!(datasets[1].data.len(), 4);

    assert_eq!(result.length_mismatches(), vec![("P1", 2), ("P2", 4)]);
}

#[test]
fn gaps_survive_as_nulls() {
    let result = ResultSet::new("Gaps", "c5", ["0", "1", "2"])
        .with_pass(Pass::with_gaps("P1", "red", vec![Some(1.0), None, Some(3.0)]));
    let json = serde_json::to_value(build_chart_config(&result)).expect("serialize");
    assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([1.0, null, 3.0]));
}

#[test]
fn serializes_to_chart_js_keys() {
    let json = serde_json::to_value(build_chart_config(&latency().with_axis_max(900.0))).expect("serialize");

    assert_eq!(json["type"], "line");
    assert_eq!(json["options"]["title"]["text"], "Latency");
    assert!(json["options"]["title"].get("display").is_none());
    assert_eq!(json["options"]["scales"]["yAxes"][0]["type"], "linear");
    assert_eq!(json["options"]["scales"]["yAxes"][0]["max"], 900.0);

    let ds = &json["data"]["datasets"][0];
    assert_eq!(ds["label"], "P1");
    assert_eq!(ds["lineTension"], 0.1);
    assert_eq!(ds["borderCapStyle"], "butt");
    assert_eq!(ds["borderJoinStyle"], "miter");
    assert_eq!(ds["pointBackgroundColor"], "#fff");
    assert_eq!(ds["pointHitRadius"], 10.0);
    assert_eq!(ds["spanGaps"], false);
    assert!(ds.get("borderWidth").is_none());
}

#[test]
fn absent_axis_max_is_omitted_from_json() {
    let json = serde_json::to_value(build_chart_config(&latency())).expect("serialize");
    assert!(json["options"]["scales"]["yAxes"][0].get("max").is_none());
}
