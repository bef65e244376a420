//! Copies generated icons into the iOS asset catalog.
//!
//! Run `generate_icons` first; a missing PNG aborts the sync.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use miniday_icons::{AssetPaths, Registry, logging, sync_catalog};

#[derive(Parser, Debug)]
#[command(version, about = "Sync generated event icons into Assets.xcassets", long_about = None)]
struct Cli {
    /// Project root containing `assets/icons` and `ios/`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let paths = AssetPaths::new(cli.root);
    let catalog_dir = paths.catalog_dir();

    let report = sync_catalog(
        Registry::builtin().keys(),
        &paths.icons_dir(),
        &catalog_dir,
        |key, _, target| {
            println!(
                "✔ Synced {} → {}",
                key.file_name(),
                paths.display_relative(target).display()
            );
        },
    )
    .with_context(|| format!("syncing icons into {}", catalog_dir.display()))?;

    println!("\n{} image sets updated", report.synced.len());
    Ok(())
}
