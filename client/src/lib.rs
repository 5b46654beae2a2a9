pub mod account;
pub mod ledger;
pub mod rpc;

pub use account::*;
pub use ledger::*;
pub use rpc::*;
