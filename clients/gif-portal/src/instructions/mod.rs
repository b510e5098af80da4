pub mod add_gif;
pub mod start_stuff_off;
pub mod upvote_gif;

pub use add_gif::*;
pub use start_stuff_off::*;
pub use upvote_gif::*;

use crate::constants::instruction_discriminator;

// Borsh String encoding: u32 little-endian length + utf8 bytes
pub(crate) fn encode_with_link(method: &str, link: &str) -> Vec<u8> {
    let mut data = instruction_discriminator(method).to_vec();
    data.extend_from_slice(&(link.len() as u32).to_le_bytes());
    data.extend_from_slice(link.as_bytes());
    data
}
