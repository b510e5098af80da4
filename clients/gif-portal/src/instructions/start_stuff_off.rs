use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_system_interface::program::ID as system_program;

use crate::constants::{instruction_discriminator, START_STUFF_OFF};

// Build start_stuff_off instruction
//
// Creates the BaseAccount, so the base account keypair must co-sign alongside the payer.
pub fn build_start_stuff_off_ix(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: instruction_discriminator(START_STUFF_OFF).to_vec(),
    }
}
