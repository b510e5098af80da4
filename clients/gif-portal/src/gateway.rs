//! Remote account gateway.
//!
//! A [`Gateway`] binds the configuration, the ledger, the wallet and the
//! current identity. It is rebuilt by [`make_gateway`] for every operation
//! and never cached, so a change of identity or configuration can never
//! leave a stale binding behind.

use std::rc::Rc;

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::{
    config::PortalConfig,
    errors::{FetchError, RemoteCallError},
    instructions::{build_add_gif_ix, build_start_stuff_off_ix, build_upvote_gif_ix},
    ledger::Ledger,
    state::{AccountRecord, BaseAccount},
    wallet::Wallet,
};

pub struct Gateway<'a> {
    config: &'a PortalConfig,
    ledger: Rc<dyn Ledger>,
    wallet: Rc<dyn Wallet>,
    identity: Pubkey,
}

pub fn make_gateway<'a>(
    config: &'a PortalConfig,
    ledger: Rc<dyn Ledger>,
    wallet: Rc<dyn Wallet>,
    identity: Pubkey,
) -> Gateway<'a> {
    Gateway {
        config,
        ledger,
        wallet,
        identity,
    }
}

impl<'a> Gateway<'a> {
    pub fn identity(&self) -> Pubkey {
        self.identity
    }

    pub fn base_account_address(&self) -> Pubkey {
        self.config.base_account_address()
    }

    /// Read and decode the `BaseAccount` at `address`. Never mutates.
    ///
    /// An account that does not exist, or that the program does not own,
    /// is `NotFound`.
    pub async fn fetch_account(&self, address: &Pubkey) -> Result<AccountRecord, FetchError> {
        let account = self
            .ledger
            .get_account(address, self.config.commitment)
            .await?
            .ok_or(FetchError::NotFound)?;

        if account.owner != self.config.program_id {
            debug!(%address, owner = %account.owner, "account not owned by program");
            return Err(FetchError::NotFound);
        }

        let base = BaseAccount::try_from_account_data(&account.data)?;
        Ok(AccountRecord::from_base_account(*address, base))
    }

    /// One-time creation of the shared account (`start_stuff_off`).
    pub async fn initialize_account(&self) -> Result<Signature, RemoteCallError> {
        let base_account = self.config.base_account_address();
        let ix = build_start_stuff_off_ix(&self.config.program_id, &base_account, &self.identity);

        let signature = self.send(ix, &[&self.config.base_account]).await?;
        info!(%base_account, %signature, "created base account");
        Ok(signature)
    }

    /// Append `link` to the shared list (`add_gif`).
    pub async fn append_entry(&self, link: &str) -> Result<Signature, RemoteCallError> {
        if link.is_empty() {
            return Err(RemoteCallError::EmptyLink);
        }
        let ix = build_add_gif_ix(
            &self.config.program_id,
            &self.config.base_account_address(),
            &self.identity,
            link,
        );

        let signature = self.send(ix, &[]).await?;
        info!(link, %signature, "gif sent to program");
        Ok(signature)
    }

    /// Add one vote to the entry whose link equals `link` (`upvote_gif`).
    ///
    /// The program matches by content, so if the list holds the same link
    /// twice only the first one is counted.
    pub async fn increment_vote(&self, link: &str) -> Result<Signature, RemoteCallError> {
        let ix = build_upvote_gif_ix(
            &self.config.program_id,
            &self.config.base_account_address(),
            link,
        );

        let signature = self.send(ix, &[]).await?;
        info!(link, %signature, "gif upvoted");
        Ok(signature)
    }

    // Pay with the identity, co-sign with `extra_signers`, then let the wallet sign.
    async fn send(&self, ix: Instruction, extra_signers: &[&Keypair]) -> Result<Signature, RemoteCallError> {
        let commitment = self.config.commitment;
        let blockhash = self.ledger.latest_blockhash(commitment).await?;

        let mut tx = Transaction::new_with_payer(&[ix], Some(&self.identity));
        if !extra_signers.is_empty() {
            tx.try_partial_sign(extra_signers, blockhash)
                .map_err(|e| RemoteCallError::Signing(e.to_string()))?;
        }
        self.wallet.sign_transaction(&mut tx, blockhash)?;

        Ok(self.ledger.send_transaction(tx, commitment).await?)
    }
}
