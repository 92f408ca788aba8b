mod plan;
mod rect;

pub use plan::{CropJob, CropPlan, cell_rect, plan_crops};
pub use rect::CropRect;
