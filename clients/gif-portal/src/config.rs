use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use crate::{constants::DEVNET_URL, errors::ConfigError};

/// How deep a write must be confirmed before it counts as done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Commitment {
    #[default]
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Everything the client needs to reach the program, fixed at startup.
///
/// `base_account` is the keypair of the shared `BaseAccount`. Every client
/// holds the same one; it co-signs `start_stuff_off` so the account can be
/// created at that address.
pub struct PortalConfig {
    pub cluster_url: String,
    pub program_id: Pubkey,
    pub base_account: Keypair,
    pub commitment: Commitment,
    /// Reject links already present in the loaded list before calling
    /// `add_gif`. Off by default; the program itself accepts duplicates.
    pub reject_duplicate_links: bool,
}

// Never print the base account secret
impl std::fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalConfig")
            .field("cluster_url", &self.cluster_url)
            .field("program_id", &self.program_id)
            .field("base_account", &self.base_account.pubkey())
            .field("commitment", &self.commitment)
            .field("reject_duplicate_links", &self.reject_duplicate_links)
            .finish()
    }
}

impl PortalConfig {
    pub fn new(program_id: Pubkey, base_account: Keypair) -> Self {
        Self {
            cluster_url: DEVNET_URL.to_string(),
            program_id,
            base_account,
            commitment: Commitment::Processed,
            reject_duplicate_links: false,
        }
    }

    /// Build from the 64-byte secret key form of the base account keypair.
    pub fn from_secret_key_bytes(program_id: Pubkey, bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() != 64 {
            return Err(ConfigError::InvalidKeypair(format!(
                "expected 64 bytes, got {}",
                bytes.len()
            )));
        }
        let base_account =
            Keypair::try_from(bytes).map_err(|e| ConfigError::InvalidKeypair(e.to_string()))?;
        Ok(Self::new(program_id, base_account))
    }

    pub fn with_cluster_url(mut self, url: impl Into<String>) -> Self {
        self.cluster_url = url.into();
        self
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_duplicate_link_guard(mut self, enabled: bool) -> Self {
        self.reject_duplicate_links = enabled;
        self
    }

    pub fn base_account_address(&self) -> Pubkey {
        self.base_account.pubkey()
    }
}
