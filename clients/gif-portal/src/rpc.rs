//! Ledger over a cluster's JSON-RPC endpoint.

use async_trait::async_trait;
use solana_commitment_config::CommitmentConfig;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use tracing::debug;

use crate::{
    config::{Commitment, PortalConfig},
    errors::LedgerError,
    ledger::{AccountData, Ledger},
};

/// Ledger backed by a remote cluster, e.g. devnet.
///
/// The client's default commitment is the configured one; reads and
/// blockhash lookups use the level passed per call.
pub struct RpcLedger {
    client: RpcClient,
}

impl RpcLedger {
    pub fn new(url: impl Into<String>, commitment: Commitment) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.into(), commitment.into()),
        }
    }

    /// Endpoint and commitment taken from the portal config.
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.cluster_url.clone(), config.commitment)
    }

    pub fn url(&self) -> String {
        self.client.url()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.client.commitment()
    }
}

#[async_trait(?Send)]
impl Ledger for RpcLedger {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Commitment,
    ) -> Result<Option<AccountData>, LedgerError> {
        debug!(%address, commitment = commitment.as_str(), "reading account over rpc");
        let response = self
            .client
            .get_account_with_commitment(address, commitment.into())
            .await
            .map_err(|err| LedgerError::Transport(err.to_string()))?;

        Ok(response.value.map(|account| AccountData {
            owner: account.owner,
            lamports: account.lamports,
            data: account.data,
        }))
    }

    async fn latest_blockhash(&self, commitment: Commitment) -> Result<Hash, LedgerError> {
        let (blockhash, _last_valid_height) = self
            .client
            .get_latest_blockhash_with_commitment(commitment.into())
            .await
            .map_err(|err| LedgerError::Transport(err.to_string()))?;
        Ok(blockhash)
    }

    async fn send_transaction(
        &self,
        tx: Transaction,
        commitment: Commitment,
    ) -> Result<Signature, LedgerError> {
        debug!(commitment = commitment.as_str(), "submitting transaction over rpc");
        // Confirmation waits at the client's own commitment level
        self.client
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(|err| match err.get_transaction_error() {
                Some(failed) => LedgerError::Rejected(failed.to_string()),
                None => LedgerError::Transport(err.to_string()),
            })
    }
}
