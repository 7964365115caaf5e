pub mod complex;
pub mod mat2;

pub use complex::{c64, C64};
pub use mat2::Mat2;
