//! Ledger boundary.
//!
//! The gateway talks to the ledger only through [`Ledger`]: read an
//! account, get a recent blockhash, submit a signed transaction. The
//! execution model is single-threaded and cooperative, so the trait is not
//! `Send` and handles are shared with `Rc`.

use std::cell::RefCell;

use async_trait::async_trait;
use litesvm::LiteSVM;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use tracing::debug;

use crate::{config::Commitment, errors::LedgerError};

/// Raw account contents as read from the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountData {
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

#[async_trait(?Send)]
pub trait Ledger {
    /// `Ok(None)` when no account exists at `address`.
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Commitment,
    ) -> Result<Option<AccountData>, LedgerError>;

    async fn latest_blockhash(&self, commitment: Commitment) -> Result<Hash, LedgerError>;

    /// Submit a fully signed transaction and wait for the given commitment.
    async fn send_transaction(
        &self,
        tx: Transaction,
        commitment: Commitment,
    ) -> Result<Signature, LedgerError>;
}

/// In-process ledger backed by LiteSVM.
///
/// LiteSVM executes transactions synchronously, so every commitment level is
/// satisfied as soon as `send_transaction` returns.
pub struct LiteSvmLedger {
    svm: RefCell<LiteSVM>,
}

impl LiteSvmLedger {
    pub fn new() -> Self {
        Self::from_svm(LiteSVM::new())
    }

    pub fn from_svm(svm: LiteSVM) -> Self {
        Self {
            svm: RefCell::new(svm),
        }
    }

    /// Direct access to the underlying SVM (deploying programs, airdrops,
    /// planting accounts).
    pub fn with_svm<R>(&self, f: impl FnOnce(&mut LiteSVM) -> R) -> R {
        f(&mut self.svm.borrow_mut())
    }
}

impl Default for LiteSvmLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Ledger for LiteSvmLedger {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Commitment,
    ) -> Result<Option<AccountData>, LedgerError> {
        debug!(%address, commitment = commitment.as_str(), "reading account");
        let account = self.svm.borrow().get_account(address);
        // Zero-lamport accounts are garbage collected on a real cluster
        Ok(account
            .filter(|account| account.lamports > 0)
            .map(|account| AccountData {
                owner: account.owner,
                lamports: account.lamports,
                data: account.data,
            }))
    }

    async fn latest_blockhash(&self, _commitment: Commitment) -> Result<Hash, LedgerError> {
        Ok(self.svm.borrow().latest_blockhash())
    }

    async fn send_transaction(
        &self,
        tx: Transaction,
        commitment: Commitment,
    ) -> Result<Signature, LedgerError> {
        let signature = tx
            .signatures
            .first()
            .copied()
            .ok_or_else(|| LedgerError::Rejected("transaction has no signatures".to_string()))?;

        debug!(%signature, commitment = commitment.as_str(), "submitting transaction");
        let mut svm = self.svm.borrow_mut();
        svm.send_transaction(tx)
            .map_err(|failed| LedgerError::Rejected(format!("{:?}", failed.err)))?;
        // Next write gets a new blockhash, so an identical vote is a new transaction
        svm.expire_blockhash();
        Ok(signature)
    }
}
