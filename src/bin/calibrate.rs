//! Build the reference model from sample sources and report its centroids.
//!
//! Run after collecting fresh training data to sanity-check the model the
//! rig will classify against.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use itertools::Itertools;

use cube_sorter::{ReferenceModel, Result, SorterConfig};

#[derive(Parser)]
#[command(about = "Build and report the cube color reference model")]
struct Args {
    /// Sorter configuration JSON; defaults to the physical rig setup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the built model as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SorterConfig::from_json_file(path)?,
        None => SorterConfig::default_rig(),
    };

    let model = ReferenceModel::from_config(&config)?;

    let report = model
        .iter()
        .map(|(color, [r, g, b])| {
            format!(
                "{color:<8} [{r:.4}, {g:.4}, {b:.4}]  {}",
                model.display_hex(color)
            )
        })
        .join("\n");
    println!("{report}");

    if let Some(out) = &args.out {
        let json = serde_json::to_string_pretty(&model)
            .map_err(|e| cube_sorter::SortError::data_with("cannot serialize model", e))?;
        std::fs::write(out, json).map_err(|e| {
            cube_sorter::SortError::data_with(format!("cannot write model {}", out.display()), e)
        })?;
        println!("model written to {}", out.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
