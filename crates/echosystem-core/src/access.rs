//! Tier-based access control: sync gate, capability matrix, AI metering.
//!
//! The core performs no network I/O itself; [`should_sync`] only answers
//! whether the collaborating sync layer is allowed to run for a tier.

use serde::{Deserialize, Serialize};

use crate::entitlement::PassType;

/// Base coin cost of one AI action. Flow tier pays half.
pub const BASE_AI_COST: f64 = 10.0;

/// Cloud sync is available to every tier except guest.
pub fn should_sync(pass: PassType) -> bool {
    pass != PassType::Guest
}

/// Whether a tier may trigger AI actions at all.
pub fn has_ai_privileges(pass: PassType) -> bool {
    matches!(pass, PassType::Gamer | PassType::Flow)
}

/// Effective coin cost of an AI action for a tier.
///
/// Flow pays half price; gamer pays the base cost; tiers without AI
/// privileges are charged nothing (the gate rejects them first).
pub fn ai_cost(pass: PassType, base_cost: f64) -> f64 {
    match pass {
        PassType::Flow => base_cost * 0.5,
        PassType::Gamer => base_cost,
        PassType::Guest | PassType::Account => 0.0,
    }
}

/// Outcome of requesting a metered AI action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AiActionOutcome {
    /// Accepted; `cost` coins were deducted.
    Ok { cost: f64 },
    /// The tier has no AI privileges.
    PassRequired,
    /// The tier qualifies but the coin balance cannot cover the cost.
    InsufficientFunds,
}

impl AiActionOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, AiActionOutcome::Ok { .. })
    }
}

/// What a pass tier is entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub pass_type: PassType,
    pub can_sync_cloud: bool,
    pub can_trigger_ai: bool,
    /// Flow runs AI automatically.
    pub flow_auto_ai: bool,
    /// Gamer triggers AI manually.
    pub gamer_manual_ai: bool,
    /// Signed-in access (account tier or above).
    pub account_access: bool,
    /// Microphone narration (flow only).
    pub mic_for_narration: bool,
    /// Microphone task capture (gamer and flow).
    pub mic_for_tasks: bool,
    /// Sun visualization (gamer and flow).
    pub sun_visualization: bool,
    /// Firefly visualization (account and above).
    pub firefly_visualization: bool,
}

impl Capabilities {
    pub fn for_pass(pass: PassType) -> Self {
        let flow = pass == PassType::Flow;
        let gamer = pass == PassType::Gamer;
        let account = pass == PassType::Account;
        Self {
            pass_type: pass,
            can_sync_cloud: should_sync(pass),
            can_trigger_ai: has_ai_privileges(pass),
            flow_auto_ai: flow,
            gamer_manual_ai: gamer,
            account_access: account || gamer || flow,
            mic_for_narration: flow,
            mic_for_tasks: gamer || flow,
            sun_visualization: gamer || flow,
            firefly_visualization: account || gamer || flow,
        }
    }
}
