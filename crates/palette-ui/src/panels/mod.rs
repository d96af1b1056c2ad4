pub mod artifact_header;
pub mod palette;
