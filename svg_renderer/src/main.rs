// main.rs - Command-line maze generator: carve a perfect maze and save it as SVG

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::{CharGrid, Maze, MazeError, RoomId};
use maze_svg_renderer::{render, save_document, to_document, RenderStyle, WallGeometry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Maze width in rooms (odd)
    pub width: usize,

    /// Maze height in rooms (odd)
    pub height: usize,

    /// Output SVG path; use "-" for stdout
    #[arg(short, long, default_value = "maze.svg")]
    pub output: PathBuf,

    /// Pixels per room (overrides the style file)
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Random seed; a fresh one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start column for carving (defaults to the centre room)
    #[arg(long, requires = "start_y")]
    pub start_x: Option<usize>,

    /// Start row for carving (defaults to the centre room)
    #[arg(long, requires = "start_x")]
    pub start_y: Option<usize>,

    /// Wall layout
    #[arg(long, value_enum, default_value_t = WallGeometry::AxisAligned)]
    pub geometry: WallGeometry,

    /// JSON render style (stroke, colours, scale)
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Also write the text dump of door states to this path
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Skip carving and draw every wall
    #[arg(long)]
    pub raw: bool,

    /// Print a character-grid maze to stdout instead of writing SVG
    #[arg(long)]
    pub legacy: bool,
}

/// Dimensions must be positive and odd: walls and passages alternate on the
/// character grid, and the SVG mode keeps the same convention.
pub fn validate_dimensions(width: usize, height: usize) -> maze_core::Result<()> {
    let reason = if width == 0 || height == 0 {
        "dimensions must be greater than 0"
    } else if width % 2 == 0 || height % 2 == 0 {
        "dimensions must be odd"
    } else {
        return Ok(());
    };
    Err(MazeError::InvalidDimensions { width, height, reason })
}

fn start_room(args: &Args, maze: &Maze) -> maze_core::Result<RoomId> {
    match (args.start_x, args.start_y) {
        (Some(w), Some(h)) => maze.room_at(w, h),
        _ => Ok(maze.default_start()),
    }
}

fn load_style(args: &Args) -> Result<RenderStyle> {
    let mut style = match &args.style {
        Some(path) => RenderStyle::load(path)
            .with_context(|| format!("Failed to load style {}", path.display()))?,
        None => RenderStyle::default(),
    };
    if let Some(scale) = args.scale {
        style.scale = scale;
    }
    Ok(style)
}

fn run(args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Using seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    if args.legacy {
        let grid = CharGrid::generate(args.width, args.height, &mut rng)?;
        print!("{grid}");
        return Ok(());
    }

    let style = load_style(args)?;
    let mut maze = Maze::new(args.width, args.height)?;

    if !args.raw {
        let start = start_room(args, &maze)?;
        maze.carve(start, &mut rng)?;
        maze.verify_perfect()?;
        info!(
            "Carved {}x{} maze: {} of {} doors open",
            maze.width(),
            maze.height(),
            maze.open_door_count(),
            maze.door_count()
        );
    }

    if let Some(path) = &args.dump {
        std::fs::write(path, maze.dump())
            .with_context(|| format!("Failed writing dump {}", path.display()))?;
        info!("Saved dump to {}", path.display());
    }

    let segments = render(&mut maze, args.geometry, style.scale);
    let document = to_document(&segments, maze.width(), maze.height(), &style);
    save_document(&args.output, &document)
        .with_context(|| format!("Failed writing SVG {}", args.output.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Starting with {args:?}");

    if let Err(MazeError::InvalidDimensions { reason, .. }) = validate_dimensions(args.width, args.height) {
        let program = std::env::args().next().unwrap_or_else(|| "maze-svg-renderer".to_string());
        eprintln!("{program}: {reason}!");
        std::process::exit(1);
    }

    run(&args)
}
