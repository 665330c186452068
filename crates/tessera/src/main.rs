//! TESSERA CLI: build, voxelize and inspect mesh models.
//!
//! Set `RUST_LOG=info` to see progress from the library crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(version, about = "TESSERA - regular-grid voxelizer with colored cube output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a single axis-aligned box model.
    Box {
        /// Box size along x.
        #[arg(long, default_value_t = 100.0)]
        x: f32,

        /// Box size along y.
        #[arg(long, default_value_t = 200.0)]
        y: f32,

        /// Box size along z.
        #[arg(long, default_value_t = 300.0)]
        z: f32,

        /// Output model path.
        #[arg(short, long, default_value = "cube.json")]
        output: PathBuf,

        /// Writer format name.
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Fill a source cube's bounding box with colored voxel cubes.
    Voxelize {
        /// Run configuration (TOML). Flags below override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cells per axis.
        #[arg(short, long, allow_negative_numbers = true)]
        resolution: Option<i64>,

        /// Edge length of the source cube.
        #[arg(long)]
        edge: Option<f32>,

        /// Worker threads for cube synthesis.
        #[arg(short, long)]
        threads: Option<usize>,

        /// Output model path.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Writer format name.
        #[arg(long)]
        format: Option<String>,
    },

    /// Print objects and mesh statistics of a model file.
    Inspect {
        /// Path to a model file.
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Box { x, y, z, output, format } => {
            commands::build_box([x, y, z], &output, &format)
        }
        Commands::Voxelize { config, resolution, edge, threads, output, format } => {
            commands::voxelize(&commands::VoxelizeArgs {
                config,
                resolution,
                edge,
                threads,
                output,
                format,
            })
        }
        Commands::Inspect { path } => commands::inspect(&path),
    }
}
