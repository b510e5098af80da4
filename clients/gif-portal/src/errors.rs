use thiserror::Error;

/// Failures at the wallet boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("no wallet extension found in the host environment")]
    ExtensionMissing,

    #[error("connection denied: {0}")]
    ConnectionDenied(String),

    #[error("wallet failed to sign: {0}")]
    Signing(String),
}

/// Failures reported by a ledger transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),
}

/// Outcome of a failed account read. Callers collapse every variant to an
/// uninitialized view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("account not found")]
    NotFound,

    #[error("account data could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Transport(#[from] LedgerError),
}

/// Any rejection during a mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteCallError {
    #[error("gif link must not be empty")]
    EmptyLink,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("failed to sign transaction: {0}")]
    Signing(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base account keypair: {0}")]
    InvalidKeypair(String),
}

/// Error carried by a failed `Portal` action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    #[error("wallet not connected")]
    NotConnected,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    RemoteCall(#[from] RemoteCallError),
}

pub type PortalResult<T> = Result<T, PortalError>;
