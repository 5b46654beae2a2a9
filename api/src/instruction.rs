use steel::*;
use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,
    Initialize,

    // Member instructions
    Claim,
    SetProfile,
    Stake,
    Transfer,
    Unstake,
}

instruction!(InstructionType, Initialize);

instruction!(InstructionType, Claim);
instruction!(InstructionType, SetProfile);
instruction!(InstructionType, Stake);
instruction!(InstructionType, Transfer);
instruction!(InstructionType, Unstake);

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    pub claim_amount: [u8; WORD_LEN],
    pub cooldown_secs: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Claim {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetProfile {
    pub name: [u8; NAME_LEN],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Stake {
    pub amount: [u8; WORD_LEN],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Transfer {
    pub to: [u8; 32],
    pub amount: [u8; WORD_LEN],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Unstake {
    pub amount: [u8; WORD_LEN],
}
