use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::constants::ADD_GIF;

use super::encode_with_link;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddGifArgs {
    pub gif_link: String,
}

// Build add_gif instruction
pub fn build_add_gif_ix(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey, gif_link: &str) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, false),
            AccountMeta::new(*user, true),
        ],
        data: encode_with_link(ADD_GIF, gif_link),
    }
}
