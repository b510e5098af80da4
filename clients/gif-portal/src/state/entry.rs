use solana_sdk::pubkey::Pubkey;

use super::{BaseAccount, ItemStruct};

/// One GIF in the shared list, as the client sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub link: String,
    pub submitter: Pubkey,
    pub vote_count: u64,
}

impl From<ItemStruct> for Entry {
    fn from(item: ItemStruct) -> Self {
        Self {
            link: item.gif_link,
            submitter: Pubkey::new_from_array(item.user_address),
            vote_count: item.total_votes,
        }
    }
}

/// A successfully fetched `BaseAccount`, entries in program order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountRecord {
    pub address: Pubkey,
    pub total_gifs: u64,
    pub entries: Vec<Entry>,
}

impl AccountRecord {
    pub fn from_base_account(address: Pubkey, account: BaseAccount) -> Self {
        Self {
            address,
            total_gifs: account.total_gifs,
            entries: account.gif_list.into_iter().map(Entry::from).collect(),
        }
    }
}
