//! Coin and gold balance commands.

use clap::Subcommand;

use super::auth::PassTypeArg;
use super::open_app;
use echosystem_core::PassType;

#[derive(Subcommand)]
pub enum WalletAction {
    /// Show balances and streak
    Balance,
    /// Credit coins (fractional)
    AddCoins {
        /// Amount to credit
        amount: f64,
    },
    /// Credit gold (rounded to the nearest integer)
    AddGold {
        /// Amount to credit
        amount: f64,
    },
    /// Convert gold into coins at 10:1
    Convert {
        /// Gold amount (floored)
        gold: f64,
    },
    /// Redeem the daily gold reward
    Redeem,
    /// Spend coins
    Spend {
        /// Amount to spend
        amount: f64,
    },
    /// Purchase a pass with coins
    BuyPass {
        /// Tier to purchase: gamer or flow
        tier: PassTypeArg,
    },
}

pub fn run(action: WalletAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        WalletAction::Balance => {
            let auth = app.auth();
            println!(
                "coins: {:.2}  gold: {}  streak: {}  pass: {}",
                auth.coins, auth.gold, auth.streak_count, auth.pass_type
            );
        }
        WalletAction::AddCoins { amount } => {
            app.add_coins(amount);
            println!("coins: {:.2}", app.auth().coins);
        }
        WalletAction::AddGold { amount } => {
            app.add_gold(amount);
            println!("gold: {}", app.auth().gold);
        }
        WalletAction::Convert { gold } => {
            if !app.convert_gold_to_coins(gold) {
                return Err("conversion failed: amount must floor to >= 1 and not exceed the gold balance".into());
            }
            let auth = app.auth();
            println!("coins: {:.2}  gold: {}", auth.coins, auth.gold);
        }
        WalletAction::Redeem => {
            let before = app.auth().gold;
            app.redeem_daily_gold();
            let auth = app.auth();
            if auth.gold == before {
                println!("already redeemed today (gold: {})", auth.gold);
            } else {
                println!("gold: {}  streak: {}", auth.gold, auth.streak_count);
            }
        }
        WalletAction::Spend { amount } => {
            if !app.spend_coins(amount) {
                return Err("insufficient coins".into());
            }
            println!("coins: {:.2}", app.auth().coins);
        }
        WalletAction::BuyPass { tier } => {
            let tier: PassType = tier.into();
            let bought = match tier {
                PassType::Gamer => app.buy_gamer_pass(),
                PassType::Flow => app.buy_flow_pass(),
                PassType::Guest | PassType::Account => {
                    return Err("only the gamer and flow passes can be purchased".into());
                }
            };
            if !bought {
                return Err("insufficient coins for this pass".into());
            }
            println!("Pass purchased: {tier}");
            println!("{}", serde_json::to_string_pretty(app.auth())?);
        }
    }
    Ok(())
}
