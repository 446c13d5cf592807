//! Property tests for the bounded-resonance and balance invariants.

use echosystem_core::{AuthState, ThemeStore, GOLD_TO_COIN_RATE};
use proptest::prelude::*;

proptest! {
    /// The resonance scalar never leaves [0.1, 1.0], no matter what delta
    /// sequence is applied.
    #[test]
    fn resonance_stays_bounded(deltas in prop::collection::vec(-10.0f64..10.0, 0..200)) {
        let mut theme = ThemeStore::default();
        for delta in deltas {
            theme.gently_shift_resonance(delta);
            prop_assert!(theme.resonance >= 0.1);
            prop_assert!(theme.resonance <= 1.0);
        }
    }

    /// Coins never go negative under arbitrary interleavings of credits
    /// and spends, and every intermediate balance is 2-decimal aligned.
    #[test]
    fn coins_never_negative(ops in prop::collection::vec((any::<bool>(), 0.0f64..500.0), 0..100)) {
        let mut auth = AuthState::signed_out();
        for (credit, amount) in ops {
            if credit {
                auth.add_coins(amount);
            } else {
                auth.spend_coins(amount);
            }
            prop_assert!(auth.coins >= 0.0);
            let cents = auth.coins * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    /// Conversion either fails leaving both balances untouched, or moves
    /// exactly floor(g) gold into floor(g)/10 coins.
    #[test]
    fn conversion_conserves_value(initial_gold in 0u64..1000, request in 0.0f64..2000.0) {
        let mut auth = AuthState::signed_out();
        auth.add_gold(initial_gold as f64);
        let gold_before = auth.gold;
        let coins_before = auth.coins;

        let converted = auth.convert_gold_to_coins(request);
        let floored = request.floor();

        if converted {
            prop_assert!(floored >= 1.0);
            let floored = floored as u64;
            prop_assert_eq!(auth.gold, gold_before - floored);
            let expected = ((floored as f64 / GOLD_TO_COIN_RATE as f64) * 100.0).round() / 100.0;
            prop_assert!((auth.coins - (coins_before + expected)).abs() < 1e-9);
        } else {
            prop_assert!(floored < 1.0 || floored as u64 > gold_before);
            prop_assert_eq!(auth.gold, gold_before);
            prop_assert_eq!(auth.coins, coins_before);
        }
    }

    /// Spending more than the balance always fails and never mutates.
    #[test]
    fn overspend_never_mutates(balance in 0.0f64..100.0, overshoot in 0.01f64..100.0) {
        let mut auth = AuthState::signed_out();
        auth.add_coins(balance);
        let before = auth.coins;

        prop_assert!(!auth.spend_coins(before + overshoot));
        prop_assert_eq!(auth.coins, before);
    }
}
