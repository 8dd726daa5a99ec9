//! vmath - Command-line 2D/3D vector calculator
//!
//! One subcommand per vector operation, built on vmath-core.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "vmath")]
#[command(author, version, about = "Command-line 2D/3D vector calculator")]
#[command(long_about = "
A small calculator over 2D and 3D vectors.
Vector arguments are delimited component lists: \"3,4\" or \"1,2,3\".
Binary operations require both vectors to have the same width.

Examples:
  vmath length 3,4                      # Length and squared length
  vmath add 1,2,0 -3,5,0                # Vector sum
  vmath dot 1,0,0 0,1,0                 # Dot product
  vmath cross 1,0,0 0,1,0               # Cross product (3D) / signed area (2D)
  vmath normalize 3,4                   # Unit vector
  vmath lerp 0,0,0 10,20,30 -t 0.25     # Linear blend
  vmath distance 0,0 3,4                # Euclidean distance
  vmath angle 1,1 --degrees             # Polar angle of a 2D vector
  vmath --delimiter ';' length '3;4'    # Custom component delimiter
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Component delimiter for vector arguments
    #[arg(long, global = true, default_value = ",")]
    delimiter: char,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print length and squared length of a vector
    #[command(visible_alias = "len")]
    Length(LengthArgs),

    /// Add two vectors
    Add(AddArgs),

    /// Dot product of two vectors
    Dot(DotArgs),

    /// Cross product: 3D vector result, 2D signed area
    Cross(CrossArgs),

    /// Scale a vector to unit length
    #[command(visible_alias = "norm")]
    Normalize(NormalizeArgs),

    /// Linear blend between two vectors
    Lerp(LerpArgs),

    /// Euclidean distance between two points
    #[command(visible_alias = "dist")]
    Distance(DistanceArgs),

    /// Polar angle of a 2D vector
    Angle(AngleArgs),
}

#[derive(Args)]
struct LengthArgs {
    /// Input vector (2 or 3 components)
    #[arg(allow_hyphen_values = true)]
    vector: String,
}

#[derive(Args)]
struct AddArgs {
    /// First vector
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct DotArgs {
    /// First vector
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct CrossArgs {
    /// First vector
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Input vector (2 or 3 components)
    #[arg(allow_hyphen_values = true)]
    vector: String,
}

#[derive(Args)]
struct LerpArgs {
    /// Start vector (returned at t = 0)
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// End vector (returned at t = 1)
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Blend factor
    #[arg(short, long)]
    t: f32,
}

#[derive(Args)]
struct DistanceArgs {
    /// First point
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second point
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct AngleArgs {
    /// Input 2D vector
    #[arg(allow_hyphen_values = true)]
    vector: String,

    /// Report degrees instead of radians
    #[arg(short, long)]
    degrees: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Length(args) => commands::length::run(args, cli.delimiter),
        Commands::Add(args) => commands::add::run(args, cli.delimiter),
        Commands::Dot(args) => commands::dot::run(args, cli.delimiter),
        Commands::Cross(args) => commands::cross::run(args, cli.delimiter),
        Commands::Normalize(args) => commands::normalize::run(args, cli.delimiter),
        Commands::Lerp(args) => commands::lerp::run(args, cli.delimiter),
        Commands::Distance(args) => commands::distance::run(args, cli.delimiter),
        Commands::Angle(args) => commands::angle::run(args, cli.delimiter),
    }
}

/// Stderr logging, filtered by RUST_LOG when set, else by verbosity.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
