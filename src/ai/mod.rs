pub mod evaluation;
pub mod search;
pub mod strategies;

pub use evaluation::*;
pub use search::*;
pub use strategies::*;
