use num_traits::Zero;
use rand::Rng;
use solana_sdk::pubkey::Pubkey;

use drip_api::types::Action;
use drip_client::AccountState;

use crate::consts::*;

/// Narrows one wallet's freshly-read state down to exactly one action.
///
/// The rules are priority-ordered and exhaustive; the first match fires. The
/// ordering encodes a lifecycle: claim points whenever the cooldown allows,
/// establish an identity next, then put any idle balance to work, with
/// unstaking deliberately rare. Randomized branches draw from the injected
/// `rng` so many wallets don't move in lock-step.
///
/// `neighbor` is the next wallet in the fixed list (transfers form a ring);
/// a single-wallet swarm passes `None` and the transfer arm is skipped
/// entirely, so the balance branch always stakes.
pub fn select_action(
    now: i64,
    state: &AccountState,
    neighbor: Option<Pubkey>,
    rng: &mut impl Rng,
) -> Action {
    // A zero last_claim_at (wallet never seen by the program) trivially
    // satisfies the inequality; the first claim is not a special case. A
    // cooldown beyond i64 range saturates rather than wrapping negative.
    let cooldown = i64::try_from(state.cooldown_secs).unwrap_or(i64::MAX);
    if now > state.last_claim_at.saturating_add(cooldown) {
        return Action::Claim;
    }

    if state.username.is_empty() {
        return Action::SetProfile { name: pick_name(rng) };
    }

    if !state.balance.is_zero() {
        return match neighbor {
            Some(to) if rng.gen_bool(0.5) => Action::Transfer {
                to,
                amount: state.balance.clone(),
            },
            _ => Action::Stake {
                amount: state.balance.clone(),
            },
        };
    }

    if !state.staked_balance.is_zero() && rng.gen_bool(UNSTAKE_PROBABILITY) {
        return Action::Unstake {
            amount: state.staked_balance.clone(),
        };
    }

    Action::Idle
}

/// Draws a display name from the roster plus a numeric suffix. Names are not
/// deduplicated across wallets; collisions are allowed.
fn pick_name(rng: &mut impl Rng) -> String {
    let name = NAMES[rng.gen_range(0..NAMES.len())];
    let suffix = rng.gen_range(0..NAME_SUFFIX_MOD);
    format!("{}{}", name, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_000_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// A state that falls through every rule: recently claimed, named, broke.
    fn settled() -> AccountState {
        AccountState {
            last_claim_at: NOW,
            balance: BigUint::default(),
            staked_balance: BigUint::default(),
            username: "Rollins42".to_string(),
            cooldown_secs: 3600,
        }
    }

    fn neighbor() -> Option<Pubkey> {
        Some(Pubkey::new_unique())
    }

    #[test]
    fn test_claim_fires_past_cooldown() {
        // Scenario A: first-ever interaction, zero last claim time.
        let state = AccountState {
            last_claim_at: 0,
            cooldown_secs: 3600,
            ..settled()
        };
        assert_eq!(select_action(NOW, &state, neighbor(), &mut rng()), Action::Claim);
    }

    #[test]
    fn test_claim_dominates_everything() {
        // Eligible for every other rule too; claim still wins.
        let state = AccountState {
            last_claim_at: 0,
            balance: BigUint::from(500u64),
            staked_balance: BigUint::from(500u64),
            username: String::new(),
            cooldown_secs: 3600,
        };
        for _ in 0..100 {
            assert_eq!(select_action(NOW, &state, neighbor(), &mut rng()), Action::Claim);
        }
    }

    #[test]
    fn test_no_claim_within_cooldown() {
        let state = AccountState {
            last_claim_at: NOW - 100,
            cooldown_secs: 3600,
            ..settled()
        };
        let action = select_action(NOW, &state, neighbor(), &mut rng());
        assert_ne!(action, Action::Claim);

        // Boundary: now == last + cooldown does not fire (strict inequality).
        let state = AccountState {
            last_claim_at: NOW - 3600,
            cooldown_secs: 3600,
            ..settled()
        };
        assert_ne!(select_action(NOW, &state, neighbor(), &mut rng()), Action::Claim);

        // One second past the boundary does.
        let state = AccountState {
            last_claim_at: NOW - 3601,
            cooldown_secs: 3600,
            ..settled()
        };
        assert_eq!(select_action(NOW, &state, neighbor(), &mut rng()), Action::Claim);
    }

    #[test]
    fn test_huge_cooldown_never_claims() {
        // A cooldown above i64::MAX must saturate, not wrap negative.
        let state = AccountState {
            last_claim_at: 0,
            cooldown_secs: u64::MAX,
            ..settled()
        };
        assert_ne!(select_action(NOW, &state, neighbor(), &mut rng()), Action::Claim);
    }

    #[test]
    fn test_set_profile_on_empty_username() {
        // Scenario B: cooled down wallet with no profile.
        let state = AccountState {
            username: String::new(),
            ..settled()
        };
        let mut rng = rng();
        for _ in 0..100 {
            match select_action(NOW, &state, neighbor(), &mut rng) {
                Action::SetProfile { name } => {
                    let digits: String =
                        name.chars().skip_while(|c| !c.is_ascii_digit()).collect();
                    let base = &name[..name.len() - digits.len()];
                    assert!(NAMES.contains(&base), "unknown roster name: {}", base);
                    let suffix: u32 = digits.parse().unwrap();
                    assert!(suffix < NAME_SUFFIX_MOD);
                }
                other => panic!("expected set-profile, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_balance_goes_to_stake_or_transfer() {
        // Scenario C: named, cooled down, holding 500 points.
        let to = Pubkey::new_unique();
        let state = AccountState {
            balance: BigUint::from(500u64),
            ..settled()
        };
        let mut rng = rng();
        for _ in 0..100 {
            match select_action(NOW, &state, Some(to), &mut rng) {
                Action::Stake { amount } => assert_eq!(amount, BigUint::from(500u64)),
                Action::Transfer { to: t, amount } => {
                    assert_eq!(t, to);
                    assert_eq!(amount, BigUint::from(500u64));
                }
                other => panic!("expected stake or transfer, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_single_wallet_always_stakes() {
        let state = AccountState {
            balance: BigUint::from(500u64),
            ..settled()
        };
        let mut rng = rng();
        for _ in 0..100 {
            match select_action(NOW, &state, None, &mut rng) {
                Action::Stake { amount } => assert_eq!(amount, BigUint::from(500u64)),
                other => panic!("expected stake, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_stake_never_unstakes() {
        // Scenario D: nothing to do at all.
        let state = settled();
        let mut rng = rng();
        for _ in 0..100 {
            assert_eq!(select_action(NOW, &state, neighbor(), &mut rng), Action::Idle);
        }
    }

    #[test]
    fn test_unstake_returns_full_stake() {
        let state = AccountState {
            staked_balance: BigUint::from(300u64),
            ..settled()
        };
        let mut rng = rng();
        for _ in 0..100 {
            match select_action(NOW, &state, neighbor(), &mut rng) {
                Action::Unstake { amount } => assert_eq!(amount, BigUint::from(300u64)),
                Action::Idle => {}
                other => panic!("expected unstake or idle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_same_seed_same_actions() {
        let state = AccountState {
            balance: BigUint::from(500u64),
            ..settled()
        };
        let to = Pubkey::new_unique();

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(
                select_action(NOW, &state, Some(to), &mut a),
                select_action(NOW, &state, Some(to), &mut b),
            );
        }
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let state = AccountState {
            balance: BigUint::from(1u64),
            ..settled()
        };
        let mut rng = rng();
        let mut stakes = 0u32;
        for _ in 0..10_000 {
            if let Action::Stake { .. } = select_action(NOW, &state, neighbor(), &mut rng) {
                stakes += 1;
            }
        }
        // p = 0.5; bounds are ~16 sigma wide
        assert!((4_000..6_000).contains(&stakes), "stakes = {}", stakes);
    }

    #[test]
    fn test_unstake_is_roughly_one_in_five() {
        let state = AccountState {
            staked_balance: BigUint::from(1u64),
            ..settled()
        };
        let mut rng = rng();
        let mut unstakes = 0u32;
        for _ in 0..10_000 {
            if let Action::Unstake { .. } = select_action(NOW, &state, neighbor(), &mut rng) {
                unstakes += 1;
            }
        }
        // p = 0.2; bounds are ~12 sigma wide
        assert!((1_500..2_500).contains(&unstakes), "unstakes = {}", unstakes);
    }
}
