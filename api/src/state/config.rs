use steel::*;
use super::AccountType;
use crate::consts::*;
use crate::state;

/// Global program parameters, a singleton at [`crate::consts::CONFIG_ADDRESS`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Config {
    pub claim_amount: [u8; WORD_LEN],
    pub cooldown_secs: u64,
}

state!(AccountType, Config);
