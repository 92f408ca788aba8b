mod load;
mod types;

pub use types::{RowBounds, SheetLayout};
