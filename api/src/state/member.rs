use steel::*;
use super::AccountType;
use crate::consts::*;
use crate::state;

/// Per-wallet ledger entry, created lazily on the first claim. Balances are
/// little-endian 256-bit words; `name` is zero-padded UTF-8, all-zero when
/// the profile is unset.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Member {
    pub authority: Pubkey,
    pub name: [u8; NAME_LEN],

    pub balance: [u8; WORD_LEN],
    pub staked_balance: [u8; WORD_LEN],

    pub last_claim_at: i64,
    pub created_at: i64,

    pub score: u64,
}

state!(AccountType, Member);
