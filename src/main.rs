//! CLI for drawing generated mazes

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unicode_tetragon::maze_generator::MazeGenerator;
use unicode_tetragon::{render, RenderOptions, Style};

/// Generate a maze and draw it with box-drawing characters
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    length: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Chance of carving extra passages, which creates loops
    #[arg(long, default_value_t = 0.05)]
    loops: f64,

    /// Drawing style
    #[arg(short, long, value_enum, default_value_t = Style::Edge)]
    style: Style,

    /// Start the drawing with an empty line
    #[arg(long)]
    leading_newline: bool,
}

/// Generate maze, print drawing
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Starting");

    let mut gen = MazeGenerator::new(args.seed).with_loop_probability(args.loops);
    let graph = gen.generate(args.length, args.height)?;

    let options = RenderOptions {
        leading_newline: args.leading_newline,
    };
    print!("{}", render(&graph, args.style, &options));
    Ok(())
}
