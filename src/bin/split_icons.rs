//! Slices a 4 x 7 sprite sheet into individual icon PNGs.
//!
//!   split_icons <input_image_path> [output_dir]
//!
//! Exits with status 1 when the input is missing, cannot be decoded, or any
//! cell fails to write.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miniday_icons::{ICONS_DIR, SHEET_MAPPING, logging, slice_sheet};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Split an icon sprite sheet into individual PNG files",
    long_about = None
)]
struct Cli {
    /// Sprite sheet laid out as 4 columns by 7 rows.
    input: PathBuf,

    /// Directory the icons are written to.
    #[arg(default_value = ICONS_DIR)]
    output_dir: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let total = SHEET_MAPPING.len();
    let result = slice_sheet(&cli.input, &cli.output_dir, |index, key, path| {
        println!("  [{}/{total}] saved: {} ({key})", index + 1, path.display());
    });

    match result {
        Ok(report) => {
            println!("Sheet size: {}x{}", report.sheet.width, report.sheet.height);
            println!("Cell size: {}x{}", report.cell.width, report.cell.height);
            println!(
                "\nDone! Saved {} icons to {}",
                report.count(),
                cli.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "slicing failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
