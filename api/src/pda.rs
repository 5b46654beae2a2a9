use steel::*;
use crate::consts::*;

pub fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &crate::id())
}

pub fn member_pda(authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MEMBER, authority.as_ref()], &crate::id())
}
