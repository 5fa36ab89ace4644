pub mod lz;
pub use lz::*;
