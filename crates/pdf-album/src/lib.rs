pub mod assemble;
mod constants;
pub mod layout;
mod options;
mod types;

pub use assemble::{export, export_sync};
pub use constants::*;
pub use layout::{FitMode, Placement, Rect, place_image, usable_area};
pub use options::*;
pub use types::*;
