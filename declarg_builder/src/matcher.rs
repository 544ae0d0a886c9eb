mod alias;
mod distance;

pub use alias::*;
pub use distance::*;
