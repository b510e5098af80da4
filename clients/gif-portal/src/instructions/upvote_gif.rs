use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::constants::UPVOTE_GIF;

use super::encode_with_link;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpvoteGifArgs {
    pub gif_link: String,
}

// Build upvote_gif instruction
//
// The program finds the target by link, so only the list account is passed.
pub fn build_upvote_gif_ix(program_id: &Pubkey, base_account: &Pubkey, gif_link: &str) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*base_account, false)],
        data: encode_with_link(UPVOTE_GIF, gif_link),
    }
}
