//! Authentication and pass management commands.

use clap::Subcommand;
use echosystem_core::PassType;

use super::open_app;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with an email address (account tier)
    SignIn {
        /// Email address
        email: String,
    },
    /// Continue as a guest (zero balances, local-only)
    Guest,
    /// Sign out entirely
    Logout,
    /// Show the current entitlement snapshot
    Status,
    /// Directly assign a pass tier (administrative)
    SetPass {
        /// Pass tier: guest, account, gamer, or flow
        pass: PassTypeArg,
        /// Replace the coin balance (floored at 0)
        #[arg(long)]
        top_up_coins: Option<f64>,
    },
}

/// clap-friendly wrapper so `--help` lists the tiers.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum PassTypeArg {
    Guest,
    Account,
    Gamer,
    Flow,
}

impl From<PassTypeArg> for PassType {
    fn from(arg: PassTypeArg) -> Self {
        match arg {
            PassTypeArg::Guest => PassType::Guest,
            PassTypeArg::Account => PassType::Account,
            PassTypeArg::Gamer => PassType::Gamer,
            PassTypeArg::Flow => PassType::Flow,
        }
    }
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        AuthAction::SignIn { email } => {
            app.sign_in(email.as_str());
            println!("Signed in as {email} (namespace: {})", app.namespace());
            println!("{}", serde_json::to_string_pretty(app.auth())?);
        }
        AuthAction::Guest => {
            app.continue_as_guest();
            println!("Continuing as guest");
            println!("{}", serde_json::to_string_pretty(app.auth())?);
        }
        AuthAction::Logout => {
            app.logout();
            println!("Signed out");
        }
        AuthAction::Status => {
            println!("{}", serde_json::to_string_pretty(app.auth())?);
            println!("{}", serde_json::to_string_pretty(&app.capabilities())?);
        }
        AuthAction::SetPass { pass, top_up_coins } => {
            let pass: PassType = pass.into();
            app.set_pass_type(pass, top_up_coins);
            println!("Pass set to {pass} (namespace: {})", app.namespace());
            println!("{}", serde_json::to_string_pretty(app.auth())?);
        }
    }
    Ok(())
}
