pub mod consts;
pub mod executor;
pub mod scheduler;
pub mod selector;

pub use consts::*;
pub use executor::*;
pub use scheduler::*;
pub use selector::*;
