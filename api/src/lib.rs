pub mod consts;
pub mod error;
pub mod instruction;
pub mod sdk;
pub mod state;
pub mod pda;
pub mod utils;
pub mod types;
mod macros;

pub use crate::consts::*;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::instruction::*;
    pub use crate::sdk::*;
    pub use crate::state::*;
    pub use crate::pda::*;
    pub use crate::utils::*;
    pub use crate::types::*;
}

use steel::*;

declare_id!("drp68K4baotJJLXKs5gFf8xpMeMzAa8mBFERHAzYdNn");
