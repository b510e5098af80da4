use std::rc::Rc;

use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};

use crate::{constants::EXTENSION_MISSING_ALERT, errors::WalletError, wallet::Wallet};

/// What a silent connect attempt ended in. Never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(Pubkey),
    /// Identity was already set; nothing was asked of the wallet.
    AlreadyConnected(Pubkey),
    ExtensionMissing,
    /// The wallet does not do prompt-free connects.
    Unsupported,
    NotConnected(WalletError),
}

/// Wallet connection lifecycle for one page session.
///
/// Identity starts unset and, once set, stays put until the session is
/// dropped.
pub struct IdentitySession {
    wallet: Option<Rc<dyn Wallet>>,
    identity: Option<Pubkey>,
    alert: Option<String>,
}

impl IdentitySession {
    /// `wallet` is whatever the host injected, if anything.
    pub fn new(wallet: Option<Rc<dyn Wallet>>) -> Self {
        Self {
            wallet,
            identity: None,
            alert: None,
        }
    }

    pub fn identity(&self) -> Option<Pubkey> {
        self.identity
    }

    pub fn wallet(&self) -> Option<Rc<dyn Wallet>> {
        self.wallet.clone()
    }

    /// Last user-visible alert raised by the session.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub async fn try_silent_connect(&mut self) -> ConnectOutcome {
        if let Some(identity) = self.identity {
            return ConnectOutcome::AlreadyConnected(identity);
        }
        let Some(wallet) = self.wallet.clone() else {
            warn!("no wallet extension found");
            self.alert = Some(EXTENSION_MISSING_ALERT.to_string());
            return ConnectOutcome::ExtensionMissing;
        };
        if !wallet.supports_silent_connect() {
            return ConnectOutcome::Unsupported;
        }

        info!("wallet found, trying trusted connect");
        match wallet.connect(true).await {
            Ok(pubkey) => {
                info!(%pubkey, "connected with public key");
                self.identity = Some(pubkey);
                ConnectOutcome::Connected(pubkey)
            }
            Err(err) => {
                warn!(error = %err, "silent connect failed");
                ConnectOutcome::NotConnected(err)
            }
        }
    }

    pub async fn connect_interactive(&mut self) -> Result<Pubkey, WalletError> {
        if let Some(identity) = self.identity {
            return Ok(identity);
        }
        let wallet = self.wallet.clone().ok_or(WalletError::ExtensionMissing)?;

        let pubkey = wallet.connect(false).await?;
        info!(%pubkey, "connected with public key");
        self.identity = Some(pubkey);
        Ok(pubkey)
    }
}
