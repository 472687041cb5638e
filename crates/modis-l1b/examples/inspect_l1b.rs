//! Print the datasets of a MODIS file and a summary of one band.
//!
//! Usage: cargo run -p modis-l1b --example inspect_l1b -- <file.hdf> [band]

use anyhow::{Context, Result};
use modis_l1b::{L1bConfig, L1bReader, LoadOptions};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: inspect_l1b <file.hdf> [band]")?;
    let band: i64 = match args.next() {
        Some(b) => b.parse().context("band must be an integer")?,
        None => 31,
    };

    let reader = L1bReader::new(L1bConfig::from_env()?);

    let names = reader.list_datasets(&path)?;
    println!("{} datasets in {}", names.len(), path);
    for name in &names {
        println!("  {}", name);
    }

    let options = LoadOptions {
        apply_scaling: true,
        apply_mask: true,
    };
    let masked = reader
        .load_band(&path, band, &options)
        .with_context(|| format!("loading band {}", band))?
        .into_masked();

    let (rows, cols) = masked.grid().shape();
    info!(band = band, rows = rows, cols = cols, valid = masked.count(), "Loaded band");
    println!("\n=== Band {} ===", band);
    println!("Grid dimensions: {} x {}", rows, cols);
    println!("Valid samples: {} of {}", masked.count(), rows * cols);
    match (masked.min(), masked.max(), masked.mean()) {
        (Some(min), Some(max), Some(mean)) => {
            println!("Range: {:.4} to {:.4}, mean {:.4}", min, max, mean)
        }
        _ => println!("No valid samples"),
    }

    Ok(())
}
