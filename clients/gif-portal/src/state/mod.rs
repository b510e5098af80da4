pub mod base_account;
pub mod entry;

pub use base_account::*;
pub use entry::*;
