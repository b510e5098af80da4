use std::cell::Cell;

use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use tracing::info;

use crate::errors::WalletError;

/// An injected wallet: hands out its public key and signs transactions.
#[async_trait(?Send)]
pub trait Wallet {
    /// With `only_if_trusted` set the wallet must not prompt; it succeeds only
    /// if this origin was approved before.
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, WalletError>;

    /// Add the wallet's signature. Other signatures already present for the
    /// same blockhash are kept.
    fn sign_transaction(&self, tx: &mut Transaction, recent_blockhash: Hash) -> Result<(), WalletError>;

    /// Wallets that cannot do a prompt-free connect are skipped on page load.
    fn supports_silent_connect(&self) -> bool {
        true
    }
}

/// Wallet backed by a local keypair.
///
/// `trusted` models a previous approval of this origin; `approves_prompts`
/// models how the user answers an interactive connect.
pub struct KeypairWallet {
    keypair: Keypair,
    trusted: Cell<bool>,
    approves_prompts: bool,
}

impl KeypairWallet {
    /// Already trusted: silent connects succeed.
    pub fn trusted(keypair: Keypair) -> Self {
        Self {
            keypair,
            trusted: Cell::new(true),
            approves_prompts: true,
        }
    }

    /// Not yet trusted: silent connects fail, prompts are approved.
    pub fn untrusted(keypair: Keypair) -> Self {
        Self {
            keypair,
            trusted: Cell::new(false),
            approves_prompts: true,
        }
    }

    /// Not trusted and the user rejects every prompt.
    pub fn rejecting(keypair: Keypair) -> Self {
        Self {
            keypair,
            trusted: Cell::new(false),
            approves_prompts: false,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted.get()
    }
}

#[async_trait(?Send)]
impl Wallet for KeypairWallet {
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, WalletError> {
        if self.trusted.get() {
            return Ok(self.keypair.pubkey());
        }
        if only_if_trusted {
            return Err(WalletError::ConnectionDenied(
                "origin is not trusted".to_string(),
            ));
        }
        if !self.approves_prompts {
            return Err(WalletError::ConnectionDenied(
                "user rejected the request".to_string(),
            ));
        }

        self.trusted.set(true);
        info!(pubkey = %self.keypair.pubkey(), "origin approved");
        Ok(self.keypair.pubkey())
    }

    fn sign_transaction(&self, tx: &mut Transaction, recent_blockhash: Hash) -> Result<(), WalletError> {
        tx.try_partial_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}
