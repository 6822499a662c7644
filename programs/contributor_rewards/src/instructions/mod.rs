pub mod initialize_program_state;
pub mod unlock_tokens;
pub mod create_contributor_account;
pub mod log_contributor_points;
pub mod claim_contributor_tokens;
pub mod reset_program_state;

pub use initialize_program_state::*;
pub use unlock_tokens::*;
pub use create_contributor_account::*;
pub use log_contributor_points::*;
pub use claim_contributor_tokens::*;
pub use reset_program_state::*;
