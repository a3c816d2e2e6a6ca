pub mod masks;
pub mod summary;
