//! Renders every event icon to `assets/icons/icon_<key>.png`.
//!
//!   cargo run --bin generate_icons -- --root path/to/app

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use miniday_icons::{AssetPaths, Registry, logging, render_all};

#[derive(Parser, Debug)]
#[command(version, about = "Render the flat event icon family to PNG", long_about = None)]
struct Cli {
    /// Project root containing `assets/icons`.
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
    let out_dir = paths.icons_dir();
    let registry = Registry::builtin();

    let report = render_all(&registry, &out_dir, |key, _| {
        println!("✔ Generated {}", key.file_name());
    })
    .with_context(|| format!("rendering icons into {}", out_dir.display()))?;

    println!("\n{} icons written to {}", report.written.len(), out_dir.display());
    Ok(())
}
