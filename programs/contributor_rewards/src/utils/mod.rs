pub mod pda;
pub mod reward;
pub mod token;

pub use pda::*;
pub use reward::*;
pub use token::*;
