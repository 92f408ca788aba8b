pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod splitter;
pub mod sprite;

pub use cli::CliArgs;
pub use config::{RowBounds, SheetLayout};
pub use error::SplitError;
pub use geometry::CropRect;
pub use output::{DirectorySink, IconSink, MemorySink};
pub use splitter::{SplitReport, split_file, split_sheet};
