mod card;
mod grid;
mod options;

pub use card::*;
pub use grid::*;
pub use options::*;
