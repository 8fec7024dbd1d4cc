pub mod cards;
pub mod color;
pub mod constants;
pub mod field;

pub use cards::*;
pub use color::*;
pub use field::*;
