use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fbcolormap::models::SessionConfig;
use fbcolormap::services::{ColormapSession, InMemoryPaletteDevice};
use palette_index::{apply_default_ramp, Palette};

#[derive(Parser)]
#[command(name = "fbcolormap")]
#[command(about = "Indexed colormap management for framebuffer displays")]
struct Cli {
    /// Session config file (overrides FBCOLORMAP_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the default palette and print the entries the ramp covers
    Ramp {
        /// Bits per pixel (defaults to the config value)
        #[arg(long)]
        bpp: Option<u32>,
    },
    /// Resolve a color to a palette index
    Lookup {
        /// Bits per pixel (defaults to the config value)
        #[arg(long)]
        bpp: Option<u32>,

        /// Set a palette entry before the lookup, as CELL=R,G,B (0.0..=1.0)
        #[arg(long = "set", value_parser = parse_set)]
        sets: Vec<(i32, f32, f32, f32)>,

        red: f32,
        green: f32,
        blue: f32,
    },
    /// Print how many reverse-index cells resolve to each palette entry
    Stats {
        /// Bits per pixel (defaults to the config value)
        #[arg(long)]
        bpp: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fbcolormap=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("FBCOLORMAP_CONFIG").ok().map(PathBuf::from));
    let config = SessionConfig::load_or_default(config_path.as_deref());

    match cli.command {
        Some(Commands::Ramp { bpp }) => run_ramp_command(&config, bpp),
        Some(Commands::Lookup {
            bpp,
            sets,
            red,
            green,
            blue,
        }) => run_lookup_command(&config, bpp, &sets, (red, green, blue)),
        Some(Commands::Stats { bpp }) => run_stats_command(&config, bpp),
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

/// Parse `CELL=R,G,B`.
fn parse_set(s: &str) -> Result<(i32, f32, f32, f32), String> {
    let (cell, rgb) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CELL=R,G,B, got '{s}'"))?;
    let cell: i32 = cell
        .trim()
        .parse()
        .map_err(|e| format!("invalid cell '{cell}': {e}"))?;

    let channels = rgb
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color '{rgb}': {e}"))?;
    match channels[..] {
        [r, g, b] => Ok((cell, r, g, b)),
        _ => Err(format!("expected three channels, got '{rgb}'")),
    }
}

/// Build a session on a simulated device and load its colormap.
fn open_session(
    config: &SessionConfig,
    bpp: Option<u32>,
) -> anyhow::Result<ColormapSession<InMemoryPaletteDevice>> {
    let device = InMemoryPaletteDevice::with_palette(config.device_palette()?);
    let mut session = ColormapSession::from_config(device, config)?;
    session.load_color_map(bpp.unwrap_or(config.bits_per_pixel), config.display_mode)?;
    Ok(session)
}

fn run_ramp_command(config: &SessionConfig, bpp: Option<u32>) -> anyhow::Result<()> {
    let bits_per_pixel = bpp.unwrap_or(config.bits_per_pixel);
    let session = open_session(config, bpp)?;

    // Ramp length only depends on the bit depth
    let covered = apply_default_ramp(&mut Palette::new(), bits_per_pixel);
    if covered == 0 {
        println!("No default ramp for {bits_per_pixel} bpp; palette left as read from the device");
        return Ok(());
    }

    println!("Default ramp for {bits_per_pixel} bpp ({covered} entries):\n");
    for (i, color) in session.palette().iter().take(covered).enumerate() {
        println!("  {i:3}  {}  {color}", color.to_hex());
    }
    Ok(())
}

fn run_lookup_command(
    config: &SessionConfig,
    bpp: Option<u32>,
    sets: &[(i32, f32, f32, f32)],
    (red, green, blue): (f32, f32, f32),
) -> anyhow::Result<()> {
    let mut session = open_session(config, bpp)?;
    for &(cell, r, g, b) in sets {
        session.set_color(cell, r, g, b)?;
    }

    let Some(index) = session.lookup(red, green, blue) else {
        anyhow::bail!("reverse lookup needs indexed display mode (current: {})", session.mode());
    };
    let entry = session.palette().get(usize::from(index)).unwrap_or_default();
    println!("({red}, {green}, {blue}) -> {index}  {}  {entry}", entry.to_hex());
    Ok(())
}

fn run_stats_command(config: &SessionConfig, bpp: Option<u32>) -> anyhow::Result<()> {
    let session = open_session(config, bpp)?;
    let Some(reverse) = session.reverse_index() else {
        anyhow::bail!("reverse index needs indexed display mode (current: {})", session.mode());
    };

    let res = reverse.resolution();
    println!(
        "Reverse index: {} cells ({} per axis)\n",
        res.cell_count(),
        res.size()
    );
    for (i, &count) in reverse.histogram().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let entry = session.palette().get(i).unwrap_or_default();
        println!("  {i:3}  {}  {count}", entry.to_hex());
    }
    Ok(())
}

fn run_status_command(config: &SessionConfig, config_path: Option<&std::path::Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("fbcolormap v{VERSION}");
    println!("Indexed colormap management for framebuffer displays\n");

    println!("Configuration:");
    println!(
        "  Source            = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    );
    println!("  bits_per_pixel    = {}", config.bits_per_pixel);
    println!("  display_mode      = {}", config.display_mode);
    println!("  reverse_map_bits  = {}", config.reverse_map_bits);
    println!(
        "  hardware_palette  = {} entries",
        config.hardware_palette.len()
    );

    match config.resolution() {
        Ok(res) => println!(
            "\nReverse index: {} per axis, {} cells",
            res.size(),
            res.cell_count()
        ),
        Err(e) => println!("\nReverse index: {e}"),
    }

    println!("\nCommands:");
    println!("  fbcolormap ramp [--bpp N]");
    println!("  fbcolormap lookup [--bpp N] [--set CELL=R,G,B]... R G B");
    println!("  fbcolormap stats [--bpp N]");
}
