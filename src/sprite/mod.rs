mod loader;

pub use loader::load_sheet;
