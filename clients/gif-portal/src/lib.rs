//! Client for the GIF portal program.
//!
//! Connects a wallet identity, reads the shared `BaseAccount` list of GIF
//! links and drives the three program instructions (`start_stuff_off`,
//! `add_gif`, `upvote_gif`). The displayed list is always a verbatim copy of
//! the last successful account read; every confirmed write is followed by a
//! fresh read.

pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod gateway;
pub mod instructions;
pub mod ledger;
pub mod rpc;
pub mod session;
pub mod state;
pub mod sync;
pub mod wallet;

pub use config::{Commitment, PortalConfig};
pub use controller::{present, ActionOutcome, EntryCard, Portal, PresentedAction};
pub use errors::*;
pub use gateway::{make_gateway, Gateway};
pub use ledger::{AccountData, Ledger, LiteSvmLedger};
pub use rpc::RpcLedger;
pub use session::{ConnectOutcome, IdentitySession};
pub use state::{AccountRecord, BaseAccount, Entry, ItemStruct};
pub use sync::{ListSynchronizer, ListView};
pub use wallet::{KeypairWallet, Wallet};
