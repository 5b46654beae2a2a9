use std::time::Duration;

/// Fixed roster of display names for the set-profile action.
pub const NAMES: &[&str] = &[
    "Xedrah", "DML", "Jadon", "Nitzy", "Rollins", "Teni", "Micheal", "Royal",
];

/// Exclusive upper bound of the numeric suffix appended to a display name.
pub const NAME_SUFFIX_MOD: u32            = 100;

/// Probability of unstaking when staked points are available. Kept low so
/// capital stays at work most of the time.
pub const UNSTAKE_PROBABILITY: f64        = 0.2;

/// Pause after each submitted action, to avoid saturating the RPC endpoint
/// and to roughly serialize nonce usage per wallet.
pub const ACTION_PACE: Duration           = Duration::from_secs(2);

/// Pause between rounds; longer than the per-action pace.
pub const ROUND_PAUSE: Duration           = Duration::from_secs(5);
