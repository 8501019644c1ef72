mod macros;
mod outcome;
mod util;

pub use outcome::*;
pub use util::*;
