//! The application controller.
//!
//! [`Echosystem`] owns the theme store, the ecosystem store, and the
//! persistence handle -- explicit context-passed state rather than ambient
//! globals. Its methods are the entire public contract of the core: every
//! action mutates the relevant collection, pulses the resonance scalar with
//! a paired log entry, and writes both documents through to the active
//! persistence namespace.
//!
//! Execution is single-threaded and synchronous: each action runs to
//! completion before the next, so balance checks are race-free by
//! construction. The write-through is best-effort; storage failures are
//! swallowed, matching the fire-and-forget contract of the persistence
//! layer.

use chrono::{DateTime, Utc};

use crate::access::{ai_cost, has_ai_privileges, AiActionOutcome, Capabilities, BASE_AI_COST};
use crate::content::journal::NewJournalEntry;
use crate::content::{JournalEntry, Quote, Task};
use crate::entitlement::{
    AuthState, PassType, FLOW_PASS_PRICE, GAMER_PASS_PRICE,
};
use crate::error::{CoreError, Result};
use crate::resonance::{Module, ResonanceLogEntry};
use crate::storage::{
    data_dir, Config, JsonFileStore, KeyValueStore, Namespace, Persistence, STATE_STORE_NAME,
    STATE_VERSION, THEME_STORE_NAME, THEME_VERSION,
};
use crate::store::EcosystemStore;
use crate::theme::ThemeStore;

/// Top-level application state: both stores plus the persistence handle.
pub struct Echosystem {
    theme: ThemeStore,
    ecosystem: EcosystemStore,
    persistence: Persistence,
    config: Config,
}

impl Echosystem {
    /// Create a fresh instance over `backend` with initial state (seeded
    /// per config), starting in the guest namespace.
    pub fn new(backend: Box<dyn KeyValueStore>, config: Config) -> Self {
        let ecosystem = Self::initial_store(&config);
        Self {
            theme: ThemeStore::default(),
            ecosystem,
            persistence: Persistence::new(backend),
            config,
        }
    }

    /// Open over `backend`, rehydrating both documents from the guest
    /// namespace and falling back to initial state for anything absent,
    /// corrupt, or version-mismatched. The namespace is then retargeted to
    /// match the rehydrated pass tier so write-through lands in the right
    /// place.
    pub fn open(backend: Box<dyn KeyValueStore>, config: Config) -> Self {
        let persistence = Persistence::new(backend);
        let ecosystem: EcosystemStore = persistence
            .load(STATE_STORE_NAME, STATE_VERSION)
            .unwrap_or_else(|| Self::initial_store(&config));
        let theme: ThemeStore = persistence
            .load(THEME_STORE_NAME, THEME_VERSION)
            .unwrap_or_default();

        let mut app = Self {
            theme,
            ecosystem,
            persistence,
            config,
        };
        app.persistence
            .set_namespace(Namespace::for_pass(app.ecosystem.auth.pass_type));
        app
    }

    /// Open against the default data directory and configuration.
    pub fn open_default() -> Result<Self> {
        let config = Config::load()?;
        let dir = data_dir().map_err(|err| CoreError::Custom(err.to_string()))?;
        let backend = JsonFileStore::open(dir)?;
        Ok(Self::open(Box::new(backend), config))
    }

    fn initial_store(config: &Config) -> EcosystemStore {
        if config.seed_demo_content {
            EcosystemStore::seeded()
        } else {
            EcosystemStore::empty()
        }
    }

    // ----- read surface -----

    pub fn ecosystem(&self) -> &EcosystemStore {
        &self.ecosystem
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn auth(&self) -> &AuthState {
        &self.ecosystem.auth
    }

    pub fn resonance(&self) -> f64 {
        self.theme.resonance
    }

    pub fn resonance_log(&self) -> &[ResonanceLogEntry] {
        &self.ecosystem.resonance_log
    }

    pub fn namespace(&self) -> Namespace {
        self.persistence.namespace()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Capability matrix for the current tier.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_pass(self.ecosystem.auth.pass_type)
    }

    // ----- internals -----

    /// Shift the resonance scalar and append the paired audit record.
    /// The two always travel together so the scalar and the log stay
    /// causally consistent.
    fn pulse(&mut self, delta: f64, module: Module, note: impl Into<String>, now: DateTime<Utc>) {
        self.theme.gently_shift_resonance(delta);
        let entry = ResonanceLogEntry::new(delta, module, note, now);
        self.ecosystem.push_log(entry, self.config.log.max_entries);
    }

    /// Best-effort write-through of both documents. Failures are not
    /// surfaced to callers.
    fn persist(&mut self) {
        let _ = self
            .persistence
            .save(STATE_STORE_NAME, STATE_VERSION, &self.ecosystem);
        let _ = self
            .persistence
            .save(THEME_STORE_NAME, THEME_VERSION, &self.theme);
    }

    // ----- auth & entitlement -----

    pub fn set_onboarded(&mut self, value: bool) {
        self.ecosystem.onboarded = value;
        self.persist();
    }

    /// Sign in with an email address, moving to the account tier.
    ///
    /// Coins survive only when the user was already on the account tier;
    /// gold and the streak always survive. Retargets persistence at the
    /// account namespace.
    pub fn sign_in(&mut self, email: impl Into<String>) {
        let email = email.into();
        let now = Utc::now();
        self.persistence
            .set_namespace(Namespace::for_pass(PassType::Account));
        self.pulse(0.04, Module::Account, format!("Signed in as {email}"), now);

        let auth = &mut self.ecosystem.auth;
        auth.is_authenticated = true;
        auth.is_guest = false;
        auth.email = Some(email);
        if auth.pass_type != PassType::Account {
            auth.coins = 0.0;
        }
        auth.pass_type = PassType::Account;
        auth.last_login = Some(now);
        self.ecosystem.onboarded = true;
        self.persist();
    }

    /// Enter the app as a guest: guest tier, zero balances.
    pub fn continue_as_guest(&mut self) {
        let now = Utc::now();
        self.persistence
            .set_namespace(Namespace::for_pass(PassType::Guest));
        self.pulse(0.02, Module::Account, "Continuing as guest", now);

        let mut auth = AuthState::signed_out();
        auth.is_authenticated = true;
        auth.is_guest = true;
        self.ecosystem.auth = auth;
        self.ecosystem.onboarded = true;
        self.persist();
    }

    /// Sign out entirely, restoring the signed-out snapshot.
    pub fn logout(&mut self) {
        let now = Utc::now();
        self.persistence
            .set_namespace(Namespace::for_pass(PassType::Guest));
        self.pulse(-0.02, Module::Account, "Signed out", now);
        self.ecosystem.auth = AuthState::signed_out();
        self.persist();
    }

    /// Directly assign a pass tier (administrative path; no resonance
    /// event). `top_up_coins` replaces the coin balance, floored at zero;
    /// the guest tier forces both balances to zero.
    pub fn set_pass_type(&mut self, pass: PassType, top_up_coins: Option<f64>) {
        self.persistence.set_namespace(Namespace::for_pass(pass));
        let auth = &mut self.ecosystem.auth;
        let base_coins = match top_up_coins {
            Some(coins) => coins.max(0.0),
            None => auth.coins,
        };
        auth.pass_type = pass;
        auth.is_guest = pass == PassType::Guest;
        if pass == PassType::Guest {
            auth.coins = 0.0;
            auth.gold = 0;
        } else {
            auth.coins = base_coins;
        }
        self.persist();
    }

    pub fn add_coins(&mut self, amount: f64) {
        self.ecosystem.auth.add_coins(amount);
        self.persist();
    }

    pub fn add_gold(&mut self, amount: f64) {
        self.ecosystem.auth.add_gold(amount);
        self.persist();
    }

    pub fn convert_gold_to_coins(&mut self, gold_amount: f64) -> bool {
        let converted = self.ecosystem.auth.convert_gold_to_coins(gold_amount);
        if converted {
            self.persist();
        }
        converted
    }

    /// Grant the daily gold reward (idempotent per calendar day).
    pub fn redeem_daily_gold(&mut self) {
        self.ecosystem.auth.redeem_daily_gold(Utc::now());
        self.persist();
    }

    /// Purchase the gamer pass for 120 coins.
    pub fn buy_gamer_pass(&mut self) -> bool {
        self.buy_pass(PassType::Gamer, GAMER_PASS_PRICE)
    }

    /// Purchase the flow pass for 220 coins.
    pub fn buy_flow_pass(&mut self) -> bool {
        self.buy_pass(PassType::Flow, FLOW_PASS_PRICE)
    }

    fn buy_pass(&mut self, tier: PassType, price: f64) -> bool {
        let now = Utc::now();
        if !self.ecosystem.auth.purchase_pass(tier, price, now) {
            return false;
        }
        self.persistence.set_namespace(Namespace::for_pass(tier));
        self.persist();
        true
    }

    pub fn spend_coins(&mut self, amount: f64) -> bool {
        let spent = self.ecosystem.auth.spend_coins(amount);
        if spent {
            self.persist();
        }
        spent
    }

    /// Request a metered AI action: tier gate first, then coin deduction.
    pub fn request_ai_action(&mut self, base_cost: Option<f64>) -> AiActionOutcome {
        let pass = self.ecosystem.auth.pass_type;
        if !has_ai_privileges(pass) {
            return AiActionOutcome::PassRequired;
        }
        let cost = ai_cost(pass, base_cost.unwrap_or(BASE_AI_COST));
        if !self.spend_coins(cost) {
            return AiActionOutcome::InsufficientFunds;
        }
        AiActionOutcome::Ok { cost }
    }

    // ----- content actions -----

    /// Add a journal entry. Above the guest tier, the entry body is also
    /// promoted into a new quote; guests never get the synthesis.
    pub fn add_journal_entry(&mut self, payload: NewJournalEntry) -> JournalEntry {
        let now = Utc::now();
        let entry = JournalEntry::create(payload, now);

        if self.ecosystem.auth.pass_type != PassType::Guest {
            let quote = Quote::from_journal_entry(&entry, now);
            self.ecosystem.quotes.insert(0, quote);
        }
        self.pulse(
            entry.resonance_delta,
            Module::Journal,
            format!("Entry: {}", entry.title),
            now,
        );
        self.ecosystem.journal_entries.insert(0, entry.clone());
        self.persist();
        entry
    }

    /// Plan a new task. Planning pulses a third of the task's delta; the
    /// rest is paid out on completion.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Task {
        let now = Utc::now();
        let task = Task::new(title, scheduled_for);
        self.pulse(
            task.resonance_delta / 3.0,
            Module::Tasks,
            format!("Planned: {}", task.title),
            now,
        );
        self.ecosystem.tasks.insert(0, task.clone());
        self.persist();
        task
    }

    /// Mark a quote as resonated-with. Unknown ids are a silent no-op.
    pub fn resonate_with_quote(&mut self, id: &str) {
        let now = Utc::now();
        let Some(quote) = self.ecosystem.quotes.iter_mut().find(|q| q.id == id) else {
            return;
        };
        let delta = quote.resonance_delta;
        let excerpt: String = quote.text.chars().take(32).collect();
        quote.last_resonated_at = Some(now);
        self.pulse(delta, Module::Quotes, format!("Quote: {excerpt}…"), now);
        self.persist();
    }

    /// Toggle a task between open and completed.
    ///
    /// Completion pulses the task's full delta; reopening pulses half the
    /// delta, negated. The asymmetry is intentional: reopening is a
    /// partial resonance cost, not a full refund.
    pub fn toggle_task(&mut self, id: &str) {
        let now = Utc::now();
        let Some(task) = self.ecosystem.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        let completed = !task.completed;
        task.completed = completed;
        task.completed_at = completed.then_some(now);
        let (delta, verb) = if completed {
            (task.resonance_delta, "Completed")
        } else {
            (-task.resonance_delta / 2.0, "Reopened")
        };
        let note = format!("{verb}: {}", task.title);
        self.pulse(delta, Module::Tasks, note, now);
        self.persist();
    }

    /// Record a habit check-in. The streak increments on every call with
    /// no day-gap check, unlike the daily-gold streak.
    pub fn log_habit_check_in(&mut self, id: &str) {
        let now = Utc::now();
        let Some(habit) = self.ecosystem.habits.iter_mut().find(|h| h.id == id) else {
            return;
        };
        habit.check_in(now);
        let delta = habit.resonance_delta;
        let note = format!("Habit check-in: {}", habit.name);
        self.pulse(delta, Module::Habits, note, now);
        self.persist();
    }

    /// Acknowledge a faith practice. Above the guest tier, the practice is
    /// also promoted into a new quote.
    pub fn acknowledge_faith_practice(&mut self, id: &str) {
        let now = Utc::now();
        let Some(idx) = self
            .ecosystem
            .faith_practices
            .iter()
            .position(|p| p.id == id)
        else {
            return;
        };
        self.ecosystem.faith_practices[idx].last_completed_on = Some(now);
        let practice = self.ecosystem.faith_practices[idx].clone();
        if self.ecosystem.auth.pass_type != PassType::Guest {
            let quote = Quote::from_faith_practice(&practice, now);
            self.ecosystem.quotes.insert(0, quote);
        }
        self.pulse(
            practice.resonance_delta,
            Module::Faith,
            format!("Faith practice: {}", practice.title),
            now,
        );
        self.persist();
    }

    /// Advance reading progress on a creative work (default increment
    /// 0.1). Progress clamps at 1.0 and the resonance pulse scales with
    /// the increment actually applied.
    pub fn advance_creative_work(&mut self, id: &str, progress: Option<f64>) {
        let now = Utc::now();
        let increment = progress.unwrap_or(0.1);
        let Some(work) = self.ecosystem.creative_works.iter_mut().find(|w| w.id == id) else {
            return;
        };
        let before = work.progress;
        work.advance(increment);
        let applied = work.progress - before;
        let delta = work.resonance_delta * applied;
        let note = format!("Creative reading: {}", work.title);
        self.pulse(delta, Module::Creation, note, now);
        self.persist();
    }

    // ----- theme -----

    /// Apply a theme mutation and write it through.
    pub fn update_theme(&mut self, f: impl FnOnce(&mut ThemeStore)) {
        f(&mut self.theme);
        self.persist();
    }

    /// Restore the initial snapshot and repoint persistence at the guest
    /// namespace.
    pub fn reset(&mut self) {
        self.persistence.set_namespace(Namespace::Guest);
        self.ecosystem = Self::initial_store(&self.config);
        self.theme = ThemeStore::default();
        self.persist();
    }
}

impl std::fmt::Debug for Echosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Echosystem")
            .field("namespace", &self.persistence.namespace())
            .field("pass_type", &self.ecosystem.auth.pass_type)
            .field("resonance", &self.theme.resonance)
            .finish_non_exhaustive()
    }
}
