//! Pure palette logic: every function takes its snapshots as arguments and
//! keeps nothing between calls.

pub mod visibility;
pub mod ranking;
pub mod settings;
pub mod model;
pub mod artifact;
pub mod view_mode;


pub use model::{build_model, PaletteModel, PaletteSelection, PaletteSnapshot};
pub use view_mode::{next_mode, ViewMode};
