mod distances;
mod eateries;
mod feed;
mod pins;

pub use distances::*;
pub use eateries::*;
pub use feed::*;
pub use pins::*;
