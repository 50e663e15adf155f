mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{build_turtle, parse_color, parse_commands};
use turtle_graphics::{render_turtle_png, RenderConfig};

/// turtle-render: Render a JSON file of turtle instructions to a PNG image
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to input instruction file
    #[clap(short, long)]
    pub input_file: String,

    /// Path to output PNG file to be created
    #[clap(short, long)]
    pub output_file: String,

    /// Image height in pixels. Width follows the drawing's aspect ratio
    #[clap(long, default_value_t = 1000)]
    pub height: u32,

    /// Background color, as any CSS color string
    #[clap(long, default_value = "white")]
    pub background: String,

    /// Stroke color until the instructions set one, as any CSS color string
    #[clap(long, default_value = "black")]
    pub stroke: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Args = Args::parse();

    let config = RenderConfig::default()
        .with_height(args.height)
        .with_background(parse_color(&args.background)?)
        .with_stroke(parse_color(&args.stroke)?);

    // Read input file
    let source = std::fs::read_to_string(&args.input_file)
        .with_context(|| format!("Failed to read input file: {}", args.input_file))?;
    let commands = parse_commands(&source)?;
    let mut turtle = build_turtle(&commands)?;

    let png = render_turtle_png(&mut turtle, &config).context("Rendering failed")?;

    // Write result
    std::fs::write(&args.output_file, png)
        .with_context(|| format!("Failed to write output to {}", args.output_file))?;
    log::info!("wrote {}", args.output_file);
    Ok(())
}
