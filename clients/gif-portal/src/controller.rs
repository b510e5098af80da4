//! Interaction controller.
//!
//! [`present`] turns (identity present?, list view) into the one affordance
//! the user sees. [`Portal`] wires user actions through the session, a fresh
//! gateway and the synchronizer.

use std::rc::Rc;

use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};

use crate::{
    config::PortalConfig,
    errors::{PortalError, PortalResult, RemoteCallError},
    gateway::{make_gateway, Gateway},
    ledger::Ledger,
    session::{ConnectOutcome, IdentitySession},
    sync::{ListSynchronizer, ListView},
    wallet::Wallet,
};

/// One rendered entry with its vote control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryCard {
    pub link: String,
    pub submitted_by: String,
    pub total_votes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresentedAction {
    ConnectWallet,
    /// Connected, first fetch still outstanding.
    Pending,
    InitializeAccount,
    /// Submission form plus one vote control per card.
    SubmitAndVote { cards: Vec<EntryCard> },
}

impl PresentedAction {
    pub fn label(&self) -> &'static str {
        match self {
            PresentedAction::ConnectWallet => "Connect to Wallet",
            PresentedAction::Pending => "",
            PresentedAction::InitializeAccount => "Do One-Time Initialization For GIF Program Account",
            PresentedAction::SubmitAndVote { .. } => "Submit",
        }
    }
}

pub fn present(identity_present: bool, view: &ListView) -> PresentedAction {
    if !identity_present {
        return PresentedAction::ConnectWallet;
    }
    match view {
        ListView::Unknown => PresentedAction::Pending,
        ListView::Uninitialized => PresentedAction::InitializeAccount,
        ListView::Loaded(entries) => PresentedAction::SubmitAndVote {
            cards: entries
                .iter()
                .map(|entry| EntryCard {
                    link: entry.link.clone(),
                    submitted_by: entry.submitter.to_string(),
                    total_votes: entry.vote_count,
                })
                .collect(),
        },
    }
}

/// Result of one user action. Failures stop here; nothing propagates past
/// the action that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    /// Dropped locally without any remote call.
    Ignored(&'static str),
    Failed(PortalError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

impl From<PortalResult<()>> for ActionOutcome {
    fn from(result: PortalResult<()>) -> Self {
        match result {
            Ok(()) => ActionOutcome::Applied,
            Err(err) => ActionOutcome::Failed(err),
        }
    }
}

pub struct Portal {
    config: PortalConfig,
    ledger: Rc<dyn Ledger>,
    session: IdentitySession,
    sync: ListSynchronizer,
    input: String,
}

impl Portal {
    pub fn new(config: PortalConfig, ledger: Rc<dyn Ledger>, wallet: Option<Rc<dyn Wallet>>) -> Self {
        Self {
            config,
            ledger,
            session: IdentitySession::new(wallet),
            sync: ListSynchronizer::new(),
            input: String::new(),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn identity(&self) -> Option<Pubkey> {
        self.session.identity()
    }

    pub fn session(&self) -> &IdentitySession {
        &self.session
    }

    pub fn view(&self) -> &ListView {
        self.sync.view()
    }

    pub fn synchronizer(&self) -> &ListSynchronizer {
        &self.sync
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn presented(&self) -> PresentedAction {
        present(self.identity().is_some(), self.sync.view())
    }

    /// Page-load hook: trusted connect, then the first fetch if it worked.
    pub async fn on_load(&mut self) -> ConnectOutcome {
        let outcome = self.session.try_silent_connect().await;
        if let ConnectOutcome::Connected(_) = outcome {
            self.refresh().await;
        }
        outcome
    }

    /// "Connect to Wallet" button.
    pub async fn connect_wallet(&mut self) -> ActionOutcome {
        let was_connected = self.identity().is_some();
        match self.session.connect_interactive().await {
            Ok(_) if was_connected => ActionOutcome::Ignored("already connected"),
            Ok(_) => {
                self.refresh().await;
                ActionOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "wallet connection failed");
                ActionOutcome::Failed(err.into())
            }
        }
    }

    /// Re-read the list. Does nothing without an identity.
    pub async fn refresh(&mut self) -> &ListView {
        if let Ok(gateway) = bind(&self.config, &self.ledger, &self.session) {
            self.sync.refresh(&gateway).await;
        }
        self.sync.view()
    }

    pub async fn initialize_account(&mut self) -> ActionOutcome {
        let result = self.run_initialize().await;
        if let Err(err) = &result {
            warn!(error = %err, "error creating base account");
        }
        result.into()
    }

    /// Submit the current input as a new gif link.
    pub async fn submit_entry(&mut self) -> ActionOutcome {
        if self.input.is_empty() {
            info!("no gif link given");
            return ActionOutcome::Ignored("no gif link given");
        }
        if self.config.reject_duplicate_links && self.is_listed(&self.input) {
            info!(link = %self.input, "gif link already listed");
            return ActionOutcome::Ignored("gif link already listed");
        }

        let link = self.input.clone();
        info!(%link, "submitting gif link");
        let result = self.run_append(&link).await;
        if let Err(err) = &result {
            warn!(%link, error = %err, "error sending gif");
        }
        result.into()
    }

    /// "Vote" control on the card for `link`.
    pub async fn vote(&mut self, link: &str) -> ActionOutcome {
        info!(link, "upvoting gif");
        let result = self.run_vote(link).await;
        if let Err(err) = &result {
            warn!(link, error = %err, "error upvoting gif");
        }
        result.into()
    }

    async fn run_initialize(&mut self) -> PortalResult<()> {
        let result = bind(&self.config, &self.ledger, &self.session)?
            .initialize_account()
            .await;
        self.read_after_write(result).await
    }

    async fn run_append(&mut self, link: &str) -> PortalResult<()> {
        let result = bind(&self.config, &self.ledger, &self.session)?
            .append_entry(link)
            .await;
        self.read_after_write(result).await
    }

    async fn run_vote(&mut self, link: &str) -> PortalResult<()> {
        let result = bind(&self.config, &self.ledger, &self.session)?
            .increment_vote(link)
            .await;
        self.read_after_write(result).await
    }

    // The refresh gets its own binding, separate from the write's
    async fn read_after_write<T>(&mut self, result: Result<T, RemoteCallError>) -> PortalResult<()> {
        let gateway = bind(&self.config, &self.ledger, &self.session)?;
        self.sync.after_write(&gateway, result).await?;
        Ok(())
    }

    fn is_listed(&self, link: &str) -> bool {
        self.sync
            .view()
            .entries()
            .is_some_and(|entries| entries.iter().any(|entry| entry.link == link))
    }
}

// Fresh binding for every call. Borrows only the config so the
// synchronizer stays free for the read-after-write.
fn bind<'a>(
    config: &'a PortalConfig,
    ledger: &Rc<dyn Ledger>,
    session: &IdentitySession,
) -> PortalResult<Gateway<'a>> {
    let identity = session.identity().ok_or(PortalError::NotConnected)?;
    let wallet = session.wallet().ok_or(PortalError::NotConnected)?;
    Ok(make_gateway(config, ledger.clone(), wallet, identity))
}
