pub mod session;
pub mod source;
pub mod skill;
pub mod workspace;
pub mod artifact;
pub mod config;
pub mod error;


pub use error::PaletteError;
pub type Result<T> = std::result::Result<T, PaletteError>;
