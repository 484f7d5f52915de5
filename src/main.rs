use anyhow::Result;
use clap::Parser;
use rectlayout::{compute_overlaps, default_layout_dir, load_layout};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout file name, resolved under resources/layouts
    file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file = args.file.as_deref().unwrap_or("sample_layout.json");
    let path = default_layout_dir().join(file);
    println!("Loading layout from {}", path.display());

    let start_time = Instant::now();
    let mut rects = load_layout(&path)?;
    let mid_time = Instant::now();

    compute_overlaps(&mut rects);
    let end_time = Instant::now();

    let overlapping: Vec<u32> = rects.iter().filter(|r| r.overlaps).map(|r| r.id).collect();

    println!("Rects: {}", rects.len());
    println!("Overlapping: {} {:?}", overlapping.len(), overlapping);
    println!(
        "Load = {} seconds",
        (mid_time - start_time).as_millis() as f32 / 1000.0
    );
    println!(
        "Detect = {} seconds",
        (end_time - mid_time).as_millis() as f32 / 1000.0
    );

    Ok(())
}
