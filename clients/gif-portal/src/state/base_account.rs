use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::{account_discriminator, ANCHOR_DISCRIMINATOR, BASE_ACCOUNT};
use crate::errors::FetchError;

// One submitted GIF as the program stores it
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemStruct {
    pub gif_link: String,
    pub user_address: [u8; 32],
    pub total_votes: u64,
}

// Shared GIF list account
//
// Layout after the 8-byte discriminator: total_gifs (u64) + gif_list (Vec<ItemStruct>)
// The account is preallocated by the program, so trailing zero bytes are normal.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<ItemStruct>,
}

impl BaseAccount {
    pub fn discriminator() -> [u8; ANCHOR_DISCRIMINATOR] {
        account_discriminator(BASE_ACCOUNT)
    }

    /// Decode raw account data, checking the Anchor discriminator first.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, FetchError> {
        if data.len() < ANCHOR_DISCRIMINATOR {
            return Err(FetchError::Decode(format!(
                "account data too short: {} bytes",
                data.len()
            )));
        }
        let (disc, mut body) = data.split_at(ANCHOR_DISCRIMINATOR);
        if disc != Self::discriminator() {
            return Err(FetchError::Decode("discriminator mismatch".to_string()));
        }
        BaseAccount::deserialize(&mut body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Encode as the program would lay it out on chain.
    pub fn to_account_data(&self) -> std::io::Result<Vec<u8>> {
        let mut data = Self::discriminator().to_vec();
        data.extend(borsh::to_vec(self)?);
        Ok(data)
    }
}
