pub mod program_state;
pub mod contribution;

pub use program_state::*;
pub use contribution::*;
