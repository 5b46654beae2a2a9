use steel::*;

#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum PointsError {
    #[error("Unknown error")]
    UnknownError = 0,

    #[error("The claim cooldown has not elapsed yet")]
    CooldownActive = 10,
    #[error("The provided username is empty or too long")]
    InvalidUsername = 11,

    #[error("The member balance is insufficient")]
    InsufficientBalance = 20,
    #[error("The member staked balance is insufficient")]
    InsufficientStake = 21,
    #[error("A transfer cannot target the sending member")]
    SelfTransfer = 22,
}

error!(PointsError);
