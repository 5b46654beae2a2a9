use steel::*;
use num_bigint::BigUint;

use crate::{
    consts::*,
    instruction::*,
    pda::*,
    types::Action,
    utils,
};

pub fn build_initialize_ix(
    signer: Pubkey,
    claim_amount: &BigUint,
    cooldown_secs: u64,
) -> Instruction {
    let (config_address, _bump) = config_pda();

    assert_eq!(config_address, CONFIG_ADDRESS);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(config_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data: Initialize {
            claim_amount: utils::to_word(claim_amount),
            cooldown_secs: cooldown_secs.to_le_bytes(),
        }.to_bytes(),
    }
}

pub fn build_claim_ix(
    signer: Pubkey,
) -> Instruction {
    let (member_address, _bump) = member_pda(signer);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(member_address, false),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data: Claim {}.to_bytes(),
    }
}

pub fn build_set_profile_ix(
    signer: Pubkey,
    name: &str,
) -> Instruction {
    let (member_address, _bump) = member_pda(signer);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(member_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data: SetProfile {
            name: utils::to_name(name),
        }.to_bytes(),
    }
}

pub fn build_stake_ix(
    signer: Pubkey,
    amount: &BigUint,
) -> Instruction {
    let (member_address, _bump) = member_pda(signer);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(member_address, false),
        ],
        data: Stake {
            amount: utils::to_word(amount),
        }.to_bytes(),
    }
}

pub fn build_transfer_ix(
    signer: Pubkey,
    to: Pubkey,
    amount: &BigUint,
) -> Instruction {
    let (member_address, _bump) = member_pda(signer);
    let (recipient_address, _bump) = member_pda(to);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(member_address, false),
            AccountMeta::new(recipient_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data: Transfer {
            to: to.to_bytes(),
            amount: utils::to_word(amount),
        }.to_bytes(),
    }
}

pub fn build_unstake_ix(
    signer: Pubkey,
    amount: &BigUint,
) -> Instruction {
    let (member_address, _bump) = member_pda(signer);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(member_address, false),
        ],
        data: Unstake {
            amount: utils::to_word(amount),
        }.to_bytes(),
    }
}

/// Maps a chosen action to its instruction. `Idle` maps to `None`; nothing is
/// submitted for an idle turn.
pub fn build_action_ix(signer: Pubkey, action: &Action) -> Option<Instruction> {
    match action {
        Action::Claim => Some(build_claim_ix(signer)),
        Action::SetProfile { name } => Some(build_set_profile_ix(signer, name)),
        Action::Stake { amount } => Some(build_stake_ix(signer, amount)),
        Action::Transfer { to, amount } => Some(build_transfer_ix(signer, *to, amount)),
        Action::Unstake { amount } => Some(build_unstake_ix(signer, amount)),
        Action::Idle => None,
    }
}
