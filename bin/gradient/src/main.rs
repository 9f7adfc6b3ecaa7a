//! Render a gradient between two colors to an image and log the palettes
//! derived from the first color.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbImage;
use tincture::{Hex, Rgb};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tincture-gradient",
    version,
    about = "Render a gradient between two colors and show the palettes derived from them"
)]
struct Args {
    /// Color the gradient starts at.
    #[arg(default_value = "#3498db")]
    from: String,

    /// Color the gradient ends at.
    #[arg(default_value = "#e74c3c")]
    to: String,

    /// Number of steps between the two colors.
    #[arg(short, long, default_value_t = 5)]
    steps: usize,

    /// Number of colors in the monochromatic scheme.
    #[arg(short = 'n', long, default_value_t = 5)]
    scheme_size: usize,

    /// Where to write the rendered gradient.
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,

    /// Width of the image in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Height of the image in pixels.
    #[arg(long, default_value_t = 100)]
    height: u32,
}

fn log_palettes(args: &Args) -> Result<()> {
    let color = args.from.as_str();

    info!(rgb = %tincture::hex_to_rgb(color)?, "converted");
    info!(darkened = %tincture::darken_hex_color(color, 30.0)?, "darken 30%");
    info!(lightened = %tincture::lighten_hex_color(color, 30.0)?, "lighten 30%");
    info!(random = %tincture::random_hex_color(), "random");
    info!(blended = %tincture::blend_hex_colors(color, &args.to, 0.3)?, "blend 70/30");
    info!(inverted = %tincture::invert_hex_color(color)?, "invert");

    let hsl = tincture::hex_to_hsl(color)?;
    info!(hue = hsl.hue, saturation = hsl.saturation, lightness = hsl.lightness, "hsl");
    info!(
        hex = %tincture::hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness),
        "hsl round trip"
    );

    let scheme = tincture::generate_monochromatic_scheme(color, args.scheme_size)?;
    info!(scheme = ?scheme, "monochromatic");
    info!(
        complement = %tincture::generate_complementary_color(color)?,
        "complementary"
    );

    Ok(())
}

fn render(gradient: &[Rgb], width: u32, height: u32) -> RgbImage {
    let swatches = gradient.len().max(1);
    RgbImage::from_fn(width, height, |x, _| {
        let index = (x as usize * swatches / width.max(1) as usize).min(swatches - 1);
        image::Rgb(gradient.get(index).map_or([0, 0, 0], Rgb::to_array))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    log_palettes(&args)?;

    let from = Rgb::from(Hex::parse(&args.from)?);
    let to = Rgb::from(Hex::parse(&args.to)?);
    let gradient = from.gradient(&to, args.steps)?;
    let hexes = gradient
        .iter()
        .map(|c| c.to_hex().to_string())
        .collect::<Vec<_>>();
    info!(gradient = ?hexes, "gradient");

    render(&gradient, args.width, args.height)
        .save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;
    info!(path = %args.output.display(), "wrote gradient");

    Ok(())
}
