mod format;
mod sink;

pub use format::{encode_png, save_icon_png};
pub use sink::{DirectorySink, IconSink, MemorySink};
