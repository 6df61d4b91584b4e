pub mod types;
pub mod board;
pub mod weights;
pub mod state;

pub use types::*;
pub use board::*;
pub use weights::*;
pub use state::*;
