pub mod sequence;
pub mod unicode;
