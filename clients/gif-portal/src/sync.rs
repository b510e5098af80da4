use tracing::{debug, info, warn};

use crate::{errors::RemoteCallError, gateway::Gateway, state::Entry};

/// Local copy of the remote list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing fetched yet.
    #[default]
    Unknown,
    /// The last fetch found no usable account.
    Uninitialized,
    Loaded(Vec<Entry>),
}

impl ListView {
    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            ListView::Loaded(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Owns the cached view. The view only ever changes by replacing it with
/// the outcome of a fresh `fetch_account`.
#[derive(Debug, Default)]
pub struct ListSynchronizer {
    view: ListView,
    fetches: u64,
}

impl ListSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Fetches issued so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches
    }

    /// Replace the view with a fresh read of the base account.
    ///
    /// Every fetch failure, including transport errors, maps to
    /// `Uninitialized` so a stale list is never shown as current.
    pub async fn refresh(&mut self, gateway: &Gateway<'_>) -> &ListView {
        let address = gateway.base_account_address();
        debug!(%address, "fetching gif list");
        self.fetches += 1;

        self.view = match gateway.fetch_account(&address).await {
            Ok(record) => {
                info!(%address, entries = record.entries.len(), "got the account");
                ListView::Loaded(record.entries)
            }
            Err(err) => {
                warn!(%address, error = %err, "failed to fetch gif list");
                ListView::Uninitialized
            }
        };
        &self.view
    }

    /// Read-after-write: refresh after every successful mutation, leave the
    /// view alone after a failed one.
    pub async fn after_write<T>(
        &mut self,
        gateway: &Gateway<'_>,
        result: Result<T, RemoteCallError>,
    ) -> Result<T, RemoteCallError> {
        if result.is_ok() {
            self.refresh(gateway).await;
        }
        result
    }
}
