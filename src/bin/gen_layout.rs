use anyhow::Result;
use clap::Parser;
use rectlayout::{default_layout_dir, sample_rects, save_layout};
use std::{fs, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file (default: resources/layouts/sample_layout.json)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args
        .output
        .unwrap_or_else(|| default_layout_dir().join("sample_layout.json"));

    let rects = sample_rects(&mut rand::thread_rng());
    save_layout(&path, &rects)?;

    println!("Wrote {}", fs::canonicalize(&path)?.display());
    Ok(())
}
