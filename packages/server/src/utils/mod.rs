pub mod filename;
pub mod media;
