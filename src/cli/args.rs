use clap::Parser;

/// Paths and geometry are fixed at build time; only logging is adjustable.
#[derive(Parser, Debug)]
#[command(name = "icon-splitter")]
#[command(
    version,
    about = "Split the bundled icon sprite sheet into individual PNG files",
    long_about = None
)]
pub struct CliArgs {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
