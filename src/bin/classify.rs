//! Classify a recorded measurement batch from a file or stdin.
//!
//! Input is one `(r, g, b)` record per line, the same format the logging
//! rig writes for training data. Prints the color label and the carousel
//! angle its bin sits at.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use cube_sorter::{CubeClassifier, ReferenceModel, Result, RgbSample, SortError, SorterConfig};

#[derive(Parser)]
#[command(about = "Classify a recorded RGB measurement batch")]
struct Args {
    /// Measurement records file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Sorter configuration JSON; defaults to the physical rig setup
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_batch(args: &Args) -> Result<Vec<RgbSample>> {
    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            SortError::invalid_input(format!("cannot read measurements {}: {e}", path.display()))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| SortError::invalid_input(format!("cannot read stdin: {e}")))?;
            buf
        }
    };

    let mut batch = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let sample = line.parse::<RgbSample>().map_err(|e| {
            SortError::invalid_input(format!("line {}: {e}", lineno + 1))
        })?;
        batch.push(sample);
    }

    Ok(batch)
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SorterConfig::from_json_file(path)?,
        None => SorterConfig::default_rig(),
    };

    let batch = read_batch(args)?;
    let classifier = CubeClassifier::new(ReferenceModel::from_config(&config)?);

    let color = classifier.classify(&batch)?;
    println!("{color} -> {} deg", color.drop_angle());

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
