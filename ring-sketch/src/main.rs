use std::env;
use std::fs;

use ring_core::{
    Certificate, ClarityGrade, ColorGrade, GemShape, MetalType, PriceTables, PricingCalculator,
    RingDesign, Selection, SettingStyle, SideStoneShape,
};
use sketch_core::{SketchRequest, compute_layout, render_sketch, render_svg};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: ring-sketch <selection.json> <output.(png|svg|json)> [price_tables.json]\n       ring-sketch --list";

fn list_options() {
    let row = |name: &str, items: Vec<&str>| println!("{name:<12} {}", items.join(", "));
    row("shape", GemShape::ALL.iter().map(|v| v.as_str()).collect());
    row("setting", SettingStyle::ALL.iter().map(|v| v.as_str()).collect());
    row(
        "side_stones",
        SideStoneShape::ALL.iter().map(|v| v.as_str()).collect(),
    );
    row("metal", MetalType::ALL.iter().map(|v| v.as_str()).collect());
    row("color", ColorGrade::ALL.iter().map(|v| v.as_str()).collect());
    row("clarity", ClarityGrade::ALL.iter().map(|v| v.as_str()).collect());
    row(
        "certificate",
        Certificate::ALL.iter().map(|v| v.as_str()).collect(),
    );
    println!(
        "{:<12} {:.1} to {:.1}, step {:.1}",
        "carat",
        ring_core::CARAT_MIN,
        ring_core::CARAT_MAX,
        ring_core::CARAT_STEP
    );
}

#[derive(Clone, Copy, Debug)]
enum OutputFormat {
    Png,
    Svg,
    Layout,
}

impl OutputFormat {
    fn from_path(path: &str) -> Option<Self> {
        let (_, ext) = path.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Layout),
            _ => None,
        }
    }
}

/// Read and validate a selection file.
fn load_design(path: &str) -> Result<RingDesign, Box<dyn std::error::Error>> {
    let selection = Selection::from_json(&fs::read_to_string(path)?)?;
    Ok(selection.resolve()?)
}

fn load_tables(path: &str) -> Result<PriceTables, Box<dyn std::error::Error>> {
    Ok(PriceTables::from_json(&fs::read_to_string(path)?)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.get(1).map(String::as_str) == Some("--list") {
        list_options();
        return Ok(());
    }
    if args.len() < 3 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let Some(format) = OutputFormat::from_path(output) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let design = match load_design(input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let (_, slot_warnings) = design.side_stone_slots();
    for w in slot_warnings {
        warn!("{w}");
    }

    let tables = match args.get(3).map(|p| load_tables(p)).transpose() {
        Ok(t) => t.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let quote = PricingCalculator::new(tables).quote(&design);
    println!("{}", serde_json::to_string_pretty(&quote)?);

    let req = SketchRequest::from_design(&design);
    match format {
        OutputFormat::Png => render_sketch(&req)?.save_png(output)?,
        OutputFormat::Svg => fs::write(output, render_svg(&req))?,
        OutputFormat::Layout => {
            fs::write(output, serde_json::to_string_pretty(&compute_layout(&req))?)?
        }
    }
    info!(output = %output, "sketch written");
    Ok(())
}
