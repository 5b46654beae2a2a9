use num_bigint::BigUint;
use solana_program::pubkey::Pubkey;

/// One state-changing operation, chosen per wallet per round. Created by the
/// selector, consumed once by the executor, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Claim,
    SetProfile { name: String },
    Stake { amount: BigUint },
    Transfer { to: Pubkey, amount: BigUint },
    Unstake { amount: BigUint },
    Idle,
}

impl Action {
    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Claim => write!(f, "claim"),
            Action::SetProfile { name } => write!(f, "set-profile '{}'", name),
            Action::Stake { amount } => write!(f, "stake {} points", amount),
            Action::Transfer { to, amount } => write!(f, "transfer {} points to {}", amount, to),
            Action::Unstake { amount } => write!(f, "unstake {} points", amount),
            Action::Idle => write!(f, "idle"),
        }
    }
}
