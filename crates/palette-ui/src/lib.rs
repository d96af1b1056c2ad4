//! egui front for the palette: rendering of a computed `PaletteModel`, the
//! artifact panel header, and the small amount of state the caller keeps
//! between frames.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
