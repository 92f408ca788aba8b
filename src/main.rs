use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use icon_splitter::{CliArgs, SheetLayout, split_file};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Icon splitter v{}", env!("CARGO_PKG_VERSION"));

    // Sheet and icon directory live next to the crate, not the working directory
    let project_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let input = project_dir.join("assets").join("cisco-icons.png");
    let output = project_dir.join("assets").join("icons");

    let layout = SheetLayout::builtin()?;
    let report = split_file(&input, &output, &layout)?;

    info!(
        "Done! Saved {} icons to {}",
        report.saved_count(),
        output.display()
    );

    Ok(())
}
