use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seatmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the seat map as a PNG.
    Render(RenderArgs),
    /// Print computed seat placements as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Cabin map JSON.
    #[arg(long)]
    cabin: PathBuf,

    /// Occupancy JSON (one bitset per section).
    #[arg(long)]
    occupancy: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Theme key (`default`, `dark`, `light`); unknown keys use the default palette.
    #[arg(long, default_value = "default")]
    theme: String,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Idle frames before the loop parks (overrides `SEATMAP_FRAME_BUDGET`).
    #[arg(long)]
    frame_budget: Option<u32>,

    /// Canvas width in logical pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in logical pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Cabin map JSON.
    #[arg(long)]
    cabin: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cabin = seatmap::CabinMap::from_path(&args.cabin)
        .with_context(|| format!("load cabin '{}'", args.cabin.display()))?;
    let occupancy = seatmap::OccupancyState::from_path(&args.occupancy)
        .with_context(|| format!("load occupancy '{}'", args.occupancy.display()))?;

    let mut opts = seatmap::SeatMapOpts::from_env();
    if let Some(n) = args.frame_budget {
        opts = opts.with_frame_budget(n);
    }
    if args.width.is_some() || args.height.is_some() {
        opts = opts.with_canvas(seatmap::Canvas {
            width: args.width.unwrap_or(opts.canvas.width),
            height: args.height.unwrap_or(opts.canvas.height),
        });
    }

    let theme = seatmap::Theme::from_key(&args.theme);
    let mut view = seatmap::SeatMapView::new(opts, theme, seatmap::ManualScheduler::new());
    view.mount(args.dpr)?;
    view.block_on_sprites()?;
    view.start()?;
    while let Some(id) = view.scheduler_mut().take_due() {
        view.on_frame(id, &cabin, &occupancy)?;
    }

    let stats = view.stats();
    tracing::info!(
        cycles = stats.cycles,
        draws = stats.draws,
        idle = stats.idle,
        "frame loop parked"
    );

    let frame = view.frame().context("seat map surface was not mounted")?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cabin = seatmap::CabinMap::from_path(&args.cabin)
        .with_context(|| format!("load cabin '{}'", args.cabin.display()))?;
    cabin.validate()?;
    let layout = seatmap::layout_cabin(&cabin);
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    println!("{json}");
    Ok(())
}
