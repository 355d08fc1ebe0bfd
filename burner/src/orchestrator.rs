//! The burn state machine.
//!
//! Cycles `Idle → Fetching → Ready ⇄ Burning` for the lifetime of a
//! session. Provider and transfer failures are converted to notifications
//! at this boundary and never propagate to callers; every failure path
//! lands back in `Ready`.

use crate::error::{BurnError, SelectionError};
use crate::event::{BurnerEvent, EventBus};
use crate::notify::{Notification, NotificationKind, NotificationQueue};
use crate::selection::SelectionStore;
use crate::submitter::{TransferError, TransferSubmitter, TxHash};
use cinder_provider::{BalanceProvider, ProviderError};
use cinder_types::{ChainAddress, Timestamp, TokenAmount, TokenBalance};
use std::sync::Arc;

/// Machine states. `Idle` means no owner is bound (wallet disconnected).
/// There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurnerState {
    Idle,
    Fetching,
    Ready,
    Burning,
}

/// One token's result within a burn batch. Failure isolation is encoded
/// here rather than in control flow: a batch is a list of independent
/// outcomes.
#[derive(Clone, Debug)]
pub struct BurnOutcome {
    pub token: ChainAddress,
    pub symbol: String,
    pub amount: TokenAmount,
    pub result: Result<TxHash, TransferError>,
}

/// Every outcome of one burn invocation, in submission order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BurnOutcome>,
}

impl BatchReport {
    pub fn submitted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Whether a fetch came from an initial connect or a post-burn refresh.
/// Both notify on provider failure, but a failed connect clears the list
/// while a failed refresh keeps the stale one.
enum FetchPhase {
    Connect,
    PostBurn,
}

/// Drives fetch → display → burn → refresh against the two collaborator
/// seams. Owns the selection and notification lifecycles exclusively.
///
/// Methods take `&mut self`: one logical thread of control. The
/// `Burning`/`Fetching` states serialize batches and fetches, and a
/// generation counter discards results of fetches that were outpaced by a
/// connect/disconnect (rapid wallet switching).
pub struct BurnOrchestrator {
    state: BurnerState,
    owner: Option<ChainAddress>,
    tokens: Vec<TokenBalance>,
    selection: SelectionStore,
    notifications: NotificationQueue,
    events: EventBus,
    provider: Arc<dyn BalanceProvider>,
    submitter: Arc<dyn TransferSubmitter>,
    /// Bumped on every connect/disconnect; fetch results carrying an older
    /// generation are dropped instead of clobbering newer state.
    generation: u64,
}

impl BurnOrchestrator {
    pub fn new(provider: Arc<dyn BalanceProvider>, submitter: Arc<dyn TransferSubmitter>) -> Self {
        Self {
            state: BurnerState::Idle,
            owner: None,
            tokens: Vec::new(),
            selection: SelectionStore::new(),
            notifications: NotificationQueue::new(),
            events: EventBus::new(),
            provider,
            submitter,
            generation: 0,
        }
    }

    pub fn state(&self) -> BurnerState {
        self.state
    }

    pub fn owner(&self) -> Option<&ChainAddress> {
        self.owner.as_ref()
    }

    /// The most recent normalized balance list. Replaced wholesale on
    /// every fetch, never mutated in place.
    pub fn tokens(&self) -> &[TokenBalance] {
        &self.tokens
    }

    pub fn notification(&self, now: Timestamp) -> Option<&Notification> {
        self.notifications.current(now)
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&BurnerEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    // ── Selection passthroughs ──────────────────────────────────────────

    pub fn toggle(&mut self, address: &ChainAddress) -> Result<(), SelectionError> {
        self.selection.toggle(address)
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn is_selected(&self, address: &ChainAddress) -> bool {
        self.selection.is_selected(address)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    // ── Session lifecycle ───────────────────────────────────────────────

    /// Bind an owner address and load its balances.
    ///
    /// On provider failure the machine still reaches `Ready`, with an
    /// empty token list and an error notification.
    pub async fn connect(&mut self, owner: ChainAddress, now: Timestamp) {
        self.owner = Some(owner.clone());
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.set_state(BurnerState::Fetching);

        let fetched = self.provider.fetch(&owner).await;
        self.apply_fetch(generation, fetched, FetchPhase::Connect, now);
    }

    /// Unbind the owner (wallet disconnected). Clears tokens, selection,
    /// and any live notification; any still-in-flight fetch result will be
    /// discarded by the generation check when it lands.
    pub fn disconnect(&mut self) {
        self.owner = None;
        self.generation = self.generation.wrapping_add(1);
        self.tokens.clear();
        self.selection.replace_all(&[]);
        self.notifications.clear();
        self.set_state(BurnerState::Idle);
    }

    // ── Burning ─────────────────────────────────────────────────────────

    /// Burn every selected token with a non-zero balance, sequentially and
    /// in balance-list order, then refresh balances.
    ///
    /// Transfers are submitted one at a time (submission of token n+1
    /// starts only once token n's outcome is known) so the owner account
    /// never issues out-of-order transactions. One token's failure never
    /// aborts the batch; each outcome is collected into the returned
    /// [`BatchReport`].
    pub async fn burn(&mut self, now: Timestamp) -> Result<BatchReport, BurnError> {
        match self.state {
            BurnerState::Burning => return Err(BurnError::AlreadyBurning),
            BurnerState::Ready => {}
            other => return Err(BurnError::NotReady(other)),
        }
        if self.selection.selected_count() == 0 {
            return Err(BurnError::NothingSelected);
        }

        self.set_state(BurnerState::Burning);

        // The job list exists only for this invocation: selected tokens
        // with a balance to move, in balance-list order.
        let jobs: Vec<TokenBalance> = self
            .selection
            .selected()
            .iter()
            .filter_map(|address| self.tokens.iter().find(|t| &t.address == address))
            .filter(|t| !t.balance.is_zero())
            .cloned()
            .collect();

        if jobs.is_empty() {
            self.notify(
                "No tokens selected or all selected tokens have zero balance",
                NotificationKind::Error,
                now,
            );
            self.set_state(BurnerState::Ready);
            return Ok(BatchReport::default());
        }

        let burn_to = ChainAddress::burn();
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in &jobs {
            let result = self
                .submitter
                .transfer(&job.address, &burn_to, job.balance)
                .await;

            match &result {
                Ok(tx) => {
                    tracing::info!(token = %job.address, symbol = %job.symbol, tx = %tx, "token burned");
                    self.notify(
                        format!("Successfully burned {}", job.symbol),
                        NotificationKind::Success,
                        now,
                    );
                    self.events.emit(&BurnerEvent::TokenBurned {
                        token: job.address.clone(),
                        symbol: job.symbol.clone(),
                        tx: tx.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(token = %job.address, symbol = %job.symbol, error = %e, "token burn failed");
                    self.notify(
                        format!("Failed to burn {}", job.symbol),
                        NotificationKind::Error,
                        now,
                    );
                    self.events.emit(&BurnerEvent::TokenBurnFailed {
                        token: job.address.clone(),
                        symbol: job.symbol.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            outcomes.push(BurnOutcome {
                token: job.address.clone(),
                symbol: job.symbol.clone(),
                amount: job.balance,
                result,
            });
        }

        // Refresh the balance list so burned tokens drop out.
        let generation = self.generation;
        match self.owner.clone() {
            Some(owner) => {
                let fetched = self.provider.fetch(&owner).await;
                self.apply_fetch(generation, fetched, FetchPhase::PostBurn, now);
            }
            None => self.set_state(BurnerState::Ready),
        }

        Ok(BatchReport { outcomes })
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Adopt a completed fetch, unless the session moved on (generation
    /// mismatch); the result is then stale and dropped.
    fn apply_fetch(
        &mut self,
        generation: u64,
        fetched: Result<Vec<TokenBalance>, ProviderError>,
        phase: FetchPhase,
        now: Timestamp,
    ) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return;
        }

        match fetched {
            Ok(tokens) => {
                self.tokens = tokens;
                self.selection.replace_all(&self.tokens);
                self.events.emit(&BurnerEvent::TokensRefreshed {
                    count: self.tokens.len(),
                });
            }
            Err(e) => match phase {
                FetchPhase::Connect => {
                    tracing::warn!(error = %e, "balance fetch failed");
                    self.tokens.clear();
                    self.selection.replace_all(&[]);
                    self.notify(
                        "Failed to fetch tokens. Please try again.",
                        NotificationKind::Error,
                        now,
                    );
                }
                FetchPhase::PostBurn => {
                    // Keep the stale list rather than wiping the view.
                    tracing::warn!(error = %e, "post-burn balance refresh failed, keeping stale list");
                    self.notify(
                        "Failed to burn tokens. Please try again.",
                        NotificationKind::Error,
                        now,
                    );
                }
            },
        }

        self.set_state(BurnerState::Ready);
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Timestamp) {
        let message = message.into();
        self.notifications.push(message.clone(), kind, now);
        self.events
            .emit(&BurnerEvent::NotificationPushed { kind, message });
    }

    fn set_state(&mut self, to: BurnerState) {
        if self.state == to {
            return;
        }
        let from = self.state;
        self.state = to;
        tracing::debug!(?from, ?to, "burner state changed");
        self.events.emit(&BurnerEvent::StateChanged { from, to });
    }
}
