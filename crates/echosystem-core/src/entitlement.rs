//! Entitlement and currency engine.
//!
//! Four pass tiers gate cloud sync, AI features, and visualizations. Two
//! currencies hang off the auth snapshot: fractional coins (spendable on AI
//! actions and pass purchases) and integer gold (earned by daily login,
//! convertible to coins at a fixed rate).
//!
//! Pass tier transitions:
//!
//!   GUEST ──sign-in──> ACCOUNT ──purchase──> GAMER
//!     ^                   │      ──purchase──> FLOW
//!     │                   │
//!     +── logout / continue-as-guest ── (from any tier)
//!
//! Every economic operation is a boolean-returning guard: it either applies
//! completely or leaves the snapshot untouched. Coin balances are rounded
//! to two decimal places after every mutation to keep drift out of repeated
//! spend/earn cycles.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Gold granted by one daily redemption.
pub const GOLD_DAILY_REWARD: u64 = 5;
/// Fixed conversion rate: 10 gold buys 1 coin.
pub const GOLD_TO_COIN_RATE: u64 = 10;
/// Gamer pass price in coins.
pub const GAMER_PASS_PRICE: f64 = 120.0;
/// Flow pass price in coins.
pub const FLOW_PASS_PRICE: f64 = 220.0;
/// Purchased passes run for 30 days.
pub const PASS_DURATION_DAYS: i64 = 30;

/// Entitlement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassType {
    /// No account; zero balances, local-only.
    Guest,
    /// Signed-in baseline tier.
    Account,
    /// Paid tier: manual AI triggers, sun visualization.
    Gamer,
    /// Paid tier: automatic AI, narration mic, half-price AI actions.
    Flow,
}

impl PassType {
    /// Check whether a transition is reachable through the defined
    /// operations (sign-in, logout/guest-entry, purchase).
    pub fn can_transition_to(&self, to: &PassType) -> bool {
        match self {
            PassType::Guest => matches!(to, PassType::Account | PassType::Guest),
            PassType::Account => matches!(
                to,
                PassType::Gamer | PassType::Flow | PassType::Guest | PassType::Account
            ),
            // Paid tiers only exit via logout.
            PassType::Gamer | PassType::Flow => matches!(to, PassType::Guest),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PassType::Guest => "guest",
            PassType::Account => "account",
            PassType::Gamer => "gamer",
            PassType::Flow => "flow",
        }
    }
}

impl Default for PassType {
    fn default() -> Self {
        PassType::Guest
    }
}

impl std::fmt::Display for PassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(PassType::Guest),
            "account" => Ok(PassType::Account),
            "gamer" => Ok(PassType::Gamer),
            "flow" => Ok(PassType::Flow),
            other => Err(format!("unknown pass type: {other}")),
        }
    }
}

/// Round a coin balance to two decimal places.
fn round_coins(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The current user's entitlement snapshot.
///
/// Invariants: `coins` and `gold` are never negative; the guest tier always
/// has both balances at zero; the tier only changes through the operations
/// on [`crate::Echosystem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_guest: bool,
    pub pass_type: PassType,
    /// Fractional spendable currency, rounded to 2 decimals.
    pub coins: f64,
    /// Integer currency earned via daily login.
    pub gold: u64,
    /// Timestamp of the most recent sign-in or daily redemption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Consecutive-day redemption streak.
    pub streak_count: u32,
    /// Set on pass purchase; recorded but never auto-enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthState {
    /// The fully signed-out snapshot stores initialize with.
    pub fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            is_guest: false,
            pass_type: PassType::Guest,
            coins: 0.0,
            gold: 0,
            last_login: None,
            streak_count: 0,
            pass_expires_at: None,
            email: None,
        }
    }

    /// Credit coins. Non-positive amounts are ignored.
    pub fn add_coins(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.coins = round_coins(self.coins + amount);
    }

    /// Credit gold, rounding the amount to the nearest integer.
    /// Non-positive amounts are ignored.
    pub fn add_gold(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.gold += amount.round() as u64;
    }

    /// Convert gold into coins at the fixed 10:1 rate.
    ///
    /// The requested amount is floored; the conversion fails without any
    /// mutation when the floored amount is zero or exceeds the current gold
    /// balance.
    pub fn convert_gold_to_coins(&mut self, gold_amount: f64) -> bool {
        let amount = gold_amount.floor();
        if amount <= 0.0 {
            return false;
        }
        let amount = amount as u64;
        if self.gold < amount {
            return false;
        }
        let earned = round_coins(amount as f64 / GOLD_TO_COIN_RATE as f64);
        self.gold -= amount;
        self.coins = round_coins(self.coins + earned);
        true
    }

    /// Grant the daily gold reward, at most once per UTC calendar day.
    ///
    /// The caller supplies the current instant so the calendar comparison
    /// stays testable. The streak increments when the previous redemption
    /// was exactly yesterday and resets to 1 on any gap.
    pub fn redeem_daily_gold(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();
        if let Some(last) = self.last_login {
            if last.date_naive() == today {
                return;
            }
        }
        let yesterday = today - Duration::days(1);
        let streak = match self.last_login {
            Some(last) if last.date_naive() == yesterday => self.streak_count + 1,
            _ => 1,
        };
        self.gold += GOLD_DAILY_REWARD;
        self.last_login = Some(now);
        self.streak_count = streak;
    }

    /// Deduct `price` coins and move to the paid `tier`.
    ///
    /// Fails without mutation when the balance is insufficient. On success
    /// the guest flag clears and a 30-day expiry is stamped.
    pub fn purchase_pass(&mut self, tier: PassType, price: f64, now: DateTime<Utc>) -> bool {
        if self.coins < price {
            return false;
        }
        self.coins = round_coins(self.coins - price);
        self.pass_type = tier;
        self.is_guest = false;
        self.pass_expires_at = Some(now + Duration::days(PASS_DURATION_DAYS));
        true
    }

    /// Spend coins. Non-positive amounts count as already satisfied.
    pub fn spend_coins(&mut self, amount: f64) -> bool {
        let cost = amount.max(0.0);
        if cost == 0.0 {
            return true;
        }
        if self.coins < cost {
            return false;
        }
        self.coins = round_coins(self.coins - cost);
        true
    }

    /// Whether the recorded pass expiry lies in the past. Informational
    /// only: no code path downgrades the tier based on this.
    pub fn is_pass_expired(&self, now: DateTime<Utc>) -> bool {
        self.pass_expires_at.map(|at| at < now).unwrap_or(false)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::signed_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        assert!(PassType::Guest.can_transition_to(&PassType::Account));
        assert!(!PassType::Guest.can_transition_to(&PassType::Gamer));
        assert!(PassType::Account.can_transition_to(&PassType::Gamer));
        assert!(PassType::Account.can_transition_to(&PassType::Flow));
        assert!(PassType::Gamer.can_transition_to(&PassType::Guest));
        assert!(!PassType::Gamer.can_transition_to(&PassType::Flow));
        assert!(!PassType::Flow.can_transition_to(&PassType::Account));
    }

    #[test]
    fn add_coins_ignores_non_positive() {
        let mut auth = AuthState::signed_out();
        auth.add_coins(0.0);
        auth.add_coins(-3.0);
        assert_eq!(auth.coins, 0.0);
        auth.add_coins(1.005);
        assert_eq!(auth.coins, 1.0);
        auth.add_coins(2.5);
        assert_eq!(auth.coins, 3.5);
    }

    #[test]
    fn add_gold_rounds_amount() {
        let mut auth = AuthState::signed_out();
        auth.add_gold(2.6);
        assert_eq!(auth.gold, 3);
        auth.add_gold(-1.0);
        assert_eq!(auth.gold, 3);
    }

    #[test]
    fn conversion_deducts_floored_gold() {
        let mut auth = AuthState::signed_out();
        auth.add_gold(25.0);
        assert!(auth.convert_gold_to_coins(15.9));
        assert_eq!(auth.gold, 10);
        assert_eq!(auth.coins, 1.5);
    }

    #[test]
    fn conversion_fails_without_mutation() {
        let mut auth = AuthState::signed_out();
        auth.add_gold(5.0);
        assert!(!auth.convert_gold_to_coins(6.0));
        assert!(!auth.convert_gold_to_coins(0.4));
        assert!(!auth.convert_gold_to_coins(-10.0));
        assert_eq!(auth.gold, 5);
        assert_eq!(auth.coins, 0.0);
    }

    #[test]
    fn daily_gold_is_idempotent_within_a_day() {
        let mut auth = AuthState::signed_out();
        let now = Utc::now();
        auth.redeem_daily_gold(now);
        assert_eq!(auth.gold, GOLD_DAILY_REWARD);
        assert_eq!(auth.streak_count, 1);

        auth.redeem_daily_gold(now + Duration::hours(2));
        assert_eq!(auth.gold, GOLD_DAILY_REWARD);
        assert_eq!(auth.streak_count, 1);
    }

    #[test]
    fn consecutive_day_redemption_increments_streak() {
        let mut auth = AuthState::signed_out();
        let day_one = Utc::now();
        auth.redeem_daily_gold(day_one);
        auth.redeem_daily_gold(day_one + Duration::days(1));
        assert_eq!(auth.streak_count, 2);
        assert_eq!(auth.gold, 2 * GOLD_DAILY_REWARD);
    }

    #[test]
    fn redemption_gap_resets_streak() {
        let mut auth = AuthState::signed_out();
        let day_one = Utc::now();
        auth.redeem_daily_gold(day_one);
        auth.redeem_daily_gold(day_one + Duration::days(1));
        assert_eq!(auth.streak_count, 2);
        auth.redeem_daily_gold(day_one + Duration::days(4));
        assert_eq!(auth.streak_count, 1);
    }

    #[test]
    fn spend_coins_never_goes_negative() {
        let mut auth = AuthState::signed_out();
        auth.add_coins(20.0);
        assert!(auth.spend_coins(5.0));
        assert_eq!(auth.coins, 15.0);
        assert!(!auth.spend_coins(100.0));
        assert_eq!(auth.coins, 15.0);
        assert!(auth.spend_coins(0.0));
        assert!(auth.spend_coins(-2.0));
        assert_eq!(auth.coins, 15.0);
    }

    #[test]
    fn purchase_is_atomic() {
        let now = Utc::now();
        let mut auth = AuthState::signed_out();
        auth.pass_type = PassType::Account;
        auth.add_coins(100.0);

        assert!(!auth.purchase_pass(PassType::Gamer, GAMER_PASS_PRICE, now));
        assert_eq!(auth.coins, 100.0);
        assert_eq!(auth.pass_type, PassType::Account);
        assert!(auth.pass_expires_at.is_none());

        auth.add_coins(20.0);
        assert!(auth.purchase_pass(PassType::Gamer, GAMER_PASS_PRICE, now));
        assert_eq!(auth.coins, 0.0);
        assert_eq!(auth.pass_type, PassType::Gamer);
        assert_eq!(
            auth.pass_expires_at,
            Some(now + Duration::days(PASS_DURATION_DAYS))
        );
    }

    #[test]
    fn pass_expiry_is_informational() {
        let now = Utc::now();
        let mut auth = AuthState::signed_out();
        auth.pass_type = PassType::Account;
        auth.add_coins(FLOW_PASS_PRICE);
        assert!(auth.purchase_pass(PassType::Flow, FLOW_PASS_PRICE, now));

        assert!(!auth.is_pass_expired(now + Duration::days(29)));
        assert!(auth.is_pass_expired(now + Duration::days(31)));
        // Tier unchanged regardless of expiry.
        assert_eq!(auth.pass_type, PassType::Flow);
    }
}
