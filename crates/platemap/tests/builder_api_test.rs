//! Integration tests for the PlateBuilder API
//!
//! These tests exercise the public API end to end: options in, scene and
//! SVG out.

use indexmap::IndexMap;

use platemap::{
    ColorValue, MarkerOverrides, MarkerSymbol, OverlayText, PlateBuilder, PlateError,
    PlateOptions, TraceOption,
    adapter::{self, Cell, Record, TableColumns, WellRecord},
    build_scene,
    config::AppConfig,
    well::PlateShape,
};

fn values_options() -> PlateOptions {
    PlateOptions::default().with_values(vec![Some(1.0), None, Some(3.5)])
}

#[test]
fn test_builder_api_exists() {
    let _builder = PlateBuilder::default();
    let _builder = PlateBuilder::new(AppConfig::default());
}

#[test]
fn test_build_scene_matches_builder() {
    let options = values_options();
    let from_fn = build_scene(&options).expect("default config builds");
    let from_builder = PlateBuilder::default()
        .build_scene(&options)
        .expect("default config builds");
    assert_eq!(from_fn, from_builder);
}

#[test]
fn test_render_simple_plate() {
    let svg = PlateBuilder::default()
        .render_svg(&values_options())
        .expect("Failed to render plate");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r#"height="520""#));
    assert_eq!(svg.matches("<circle").count(), 96);
    assert!(svg.contains("A1\n1.0"), "hover label of A1 should be a title");
    assert!(svg.contains(r#"data-layer="frame""#));
    assert!(svg.contains(r#"data-layer="labels""#));
    assert!(!svg.contains(r#"data-layer="overlay""#));
}

#[test]
fn test_render_with_colorbar() {
    let options = values_options().with_showscale(true);
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(svg.contains("colorbar-gradient"));
    assert!(svg.contains(r#"data-layer="legend""#));
    assert!(svg.contains(">Value<") || svg.contains("\nValue\n"));
}

#[test]
fn test_literal_colors_skip_colorbar() {
    let options = PlateOptions::new(PlateShape::new(2, 2).unwrap())
        .with_colors(vec![
            Some(ColorValue::from("red")),
            None,
            Some(ColorValue::from("blue")),
        ])
        .with_showscale(true);
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(svg.contains(r#"fill="red""#));
    assert!(svg.contains(r#"fill="blue""#));
    assert_eq!(svg.matches(r#"fill="rgba(0,0,0,0)""#).count(), 2);
    assert!(!svg.contains("colorbar-gradient"));
}

#[test]
fn test_overlay_layer_ignores_pointer() {
    let options = values_options().with_overlay_text(OverlayText::Values);
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(svg.contains(r#"data-layer="overlay""#));
    assert!(svg.contains(r#"pointer-events="none""#));
}

#[test]
fn test_trace_options_reach_svg() {
    let options = PlateOptions::default()
        .with_trace_option(TraceOption::Name("assay-7".to_string()))
        .with_trace_option(TraceOption::Opacity(0.75))
        .with_trace_option(TraceOption::HoverLabels(false));
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(svg.contains(r#"data-name="assay-7""#));
    assert!(svg.contains(r#"opacity="0.75""#));
    assert!(!svg.contains("<title"));
}

#[test]
fn test_hidden_markers() {
    let options = PlateOptions::default().with_trace_option(TraceOption::Visible(false));
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(!svg.contains("<circle"));
    assert!(!svg.contains(r#"data-layer="markers""#));
    assert!(svg.contains(r#"data-layer="frame""#));
}

#[test]
fn test_marker_symbol_override() {
    let options = PlateOptions::new(PlateShape::new(2, 3).unwrap())
        .with_marker(MarkerOverrides::new().with_symbol(MarkerSymbol::Square));
    let svg = PlateBuilder::default().render_svg(&options).unwrap();

    assert!(!svg.contains("<circle"));
    // Six wells, one frame rectangle and the background
    assert_eq!(svg.matches("<rect").count(), 6 + 1 + 1);
}

#[test]
fn test_values_longer_than_plate() {
    let options = PlateOptions::new(PlateShape::new(2, 2).unwrap()).with_values(vec![None; 5]);
    let err = PlateBuilder::default().render_svg(&options).unwrap_err();

    assert!(matches!(err, PlateError::Input { .. }));
    assert_eq!(err.to_string(), "values length (5) exceeds total wells (4)");
}

#[test]
fn test_builder_with_toml_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        cell_size = 30.0

        [style]
        background_color = "ivory"
        colorscale = "viridis"
        colorbar_title = "OD600"
        "#,
    )
    .expect("valid config");

    let builder = PlateBuilder::new(config);
    let options = values_options().with_showscale(true);

    let scene = builder.build_scene(&options).unwrap();
    assert_eq!(scene.canvas().width(), 440);
    assert_eq!(
        scene.marker_style().colorbar().map(|c| c.title()),
        Some("OD600")
    );

    let svg = builder.render_svg(&options).unwrap();
    assert!(svg.contains(r#"fill="ivory""#));
    assert!(svg.contains("OD600"));
}

#[test]
fn test_invalid_config_color() {
    let config: AppConfig = toml::from_str("[style]\nframe_color = \"nope\"\n").unwrap();
    let err = PlateBuilder::new(config)
        .build_scene(&PlateOptions::default())
        .unwrap_err();
    assert!(matches!(err, PlateError::Config(_)));
}

#[test]
fn test_from_map_end_to_end() {
    let mut records = IndexMap::new();
    records.insert("A1", WellRecord::new().with_value(5.0));
    records.insert("H12", WellRecord::new().with_color("green"));

    let shape = PlateShape::default();
    let data = adapter::from_map(&records, shape).unwrap();
    assert_eq!(data.values()[0], Some(5.0));
    assert_eq!(data.colors()[95], Some(ColorValue::from("green")));

    let scene = build_scene(&data.into_options(shape)).unwrap();
    let colors = scene.marker_style().colors();
    assert_eq!(colors[95], Some(ColorValue::from("green")));
    assert_eq!(colors[0], Some(ColorValue::from("rgba(0,0,0,0)")));
    assert_eq!(scene.markers()[0].hover(), "A1<br>5.0");
}

#[test]
fn test_from_table_end_to_end() {
    let rows: Vec<Record> = ["A1", "A2", "B1"]
        .iter()
        .zip([0.1, 0.2, 0.3])
        .map(|(well, od)| {
            let mut row = Record::new();
            row.insert("Well".to_string(), Cell::from(*well));
            row.insert("OD".to_string(), Cell::from(od));
            row
        })
        .collect();

    let columns = TableColumns::new().with_well("Well").with_value("OD");
    let shape = PlateShape::new(2, 2).unwrap();
    let options = adapter::from_table(&rows, &columns, shape)
        .unwrap()
        .into_options(shape)
        .with_overlay_text(OverlayText::Values);

    let scene = build_scene(&options).unwrap();
    let hovers: Vec<&str> = scene.hover_labels().collect();
    assert_eq!(hovers, ["A1<br>0.1", "A2<br>0.2", "B1<br>0.3", "B2"]);
    assert!(scene.marker_style().colorscale().is_some());
}
