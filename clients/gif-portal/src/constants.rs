use sha2::{Digest, Sha256};

// Instruction names (snake_case, as Anchor hashes them)
pub const START_STUFF_OFF: &str = "start_stuff_off";
pub const ADD_GIF: &str = "add_gif";
pub const UPVOTE_GIF: &str = "upvote_gif";

// Account type names
pub const BASE_ACCOUNT: &str = "BaseAccount";

// Account Space Constants
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Network
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

// Shown when no wallet object is injected into the host
pub const EXTENSION_MISSING_ALERT: &str = "Solana object not found! Get a Phantom Wallet 👻";

fn discriminator(namespace: &str, name: &str) -> [u8; ANCHOR_DISCRIMINATOR] {
    let digest = Sha256::digest(format!("{}:{}", namespace, name).as_bytes());
    let mut out = [0u8; ANCHOR_DISCRIMINATOR];
    out.copy_from_slice(&digest[..ANCHOR_DISCRIMINATOR]);
    out
}

/// Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn instruction_discriminator(method: &str) -> [u8; ANCHOR_DISCRIMINATOR] {
    discriminator("global", method)
}

/// Anchor account discriminator (first 8 bytes of sha256("account:TypeName"))
pub fn account_discriminator(type_name: &str) -> [u8; ANCHOR_DISCRIMINATOR] {
    discriminator("account", type_name)
}
