pub mod feed;
pub mod upload;
