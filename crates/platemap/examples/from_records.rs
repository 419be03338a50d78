//! Example: Rendering a plate from per-well records
//!
//! This example demonstrates the basic workflow of:
//! 1. Collecting per-well data keyed by well name
//! 2. Turning it into plate options with the adapter
//! 3. Rendering the plate to SVG with a PlateBuilder

use indexmap::IndexMap;

use platemap::{
    PlateBuilder, TraceOption,
    adapter::{self, WellRecord},
    well::PlateShape,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let shape = PlateShape::default();

    // A dilution series across row A and a few controls
    let mut records = IndexMap::new();
    for column in 1..=12 {
        let value = 100.0 / f64::from(1u32 << (column - 1));
        records.insert(format!("A{column}"), WellRecord::new().with_value(value));
    }
    records.insert("H1".to_string(), WellRecord::new().with_value(0.0).with_text("blank"));
    records.insert("H12".to_string(), WellRecord::new().with_value(100.0).with_text("ctrl"));

    let data = adapter::from_map(&records, shape)?;
    let options = data
        .into_options(shape)
        .with_showscale(true)
        .with_trace_option(TraceOption::Name("dilution".to_string()));

    let builder = PlateBuilder::default();

    // Inspect the scene before rendering
    let scene = builder.build_scene(&options)?;
    println!("Plate: {}", scene.shape());
    println!(
        "Canvas: {}x{}",
        scene.canvas().width(),
        scene.canvas().height()
    );
    println!("First hover label: {:?}", scene.markers()[0].hover());

    println!("\nRendering to SVG...");
    let svg = builder.render_svg(&options)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_records_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
