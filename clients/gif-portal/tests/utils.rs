// Shared test utilities for the portal client integration tests
#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    rc::Rc,
};

use async_trait::async_trait;
use borsh::BorshDeserialize;
use gif_portal_client::{
    constants::{instruction_discriminator, ADD_GIF, ANCHOR_DISCRIMINATOR, START_STUFF_OFF, UPVOTE_GIF},
    instructions::{AddGifArgs, UpvoteGifArgs},
    AccountData, BaseAccount, Commitment, ItemStruct, KeypairWallet, Ledger, LedgerError, Portal,
    PortalConfig, Wallet, WalletError,
};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

// Lamports given to a freshly created base account
pub const BASE_ACCOUNT_LAMPORTS: u64 = 1_000_000;

// ======================== INSTRUCTION DECODING ========================

/// A portal instruction parsed back out of raw instruction data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalInstruction {
    StartStuffOff,
    AddGif(AddGifArgs),
    UpvoteGif(UpvoteGifArgs),
}

// None for unknown discriminators or malformed arguments
pub fn decode_instruction(data: &[u8]) -> Option<PortalInstruction> {
    if data.len() < ANCHOR_DISCRIMINATOR {
        return None;
    }
    let (disc, args) = data.split_at(ANCHOR_DISCRIMINATOR);

    if disc == instruction_discriminator(START_STUFF_OFF) {
        Some(PortalInstruction::StartStuffOff)
    } else if disc == instruction_discriminator(ADD_GIF) {
        AddGifArgs::try_from_slice(args).ok().map(PortalInstruction::AddGif)
    } else if disc == instruction_discriminator(UPVOTE_GIF) {
        UpvoteGifArgs::try_from_slice(args).ok().map(PortalInstruction::UpvoteGif)
    } else {
        None
    }
}

// ======================== LEDGER CALL LOG ========================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Fetch(Pubkey),
    Send(PortalInstruction),
}

// ======================== SIMULATED PROGRAM ========================

/// In-memory ledger that runs the portal program's three instructions the
/// way the deployed program does: create the list, append a link with zero
/// votes, add one vote to the first entry with a matching link.
pub struct ProgramLedger {
    program_id: Pubkey,
    accounts: RefCell<HashMap<Pubkey, AccountData>>,
    calls: RefCell<Vec<Call>>,
    fail_fetches: Cell<u32>,
    fail_sends: Cell<u32>,
    // Advances after every landed transaction, like a real cluster's slots
    blockhash_seed: Cell<u8>,
    processed: RefCell<HashSet<Signature>>,
}

impl ProgramLedger {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            accounts: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            fail_fetches: Cell::new(0),
            fail_sends: Cell::new(0),
            blockhash_seed: Cell::new(1),
            processed: RefCell::new(HashSet::new()),
        }
    }

    /// Plant a base account as if it had been created earlier.
    pub fn plant(&self, address: Pubkey, account: &BaseAccount) {
        self.plant_raw(address, self.program_id, account.to_account_data().unwrap());
    }

    pub fn plant_raw(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.borrow_mut().insert(
            address,
            AccountData {
                owner,
                lamports: BASE_ACCOUNT_LAMPORTS,
                data,
            },
        );
    }

    pub fn base_account(&self, address: &Pubkey) -> Option<BaseAccount> {
        self.accounts
            .borrow()
            .get(address)
            .and_then(|account| BaseAccount::try_from_account_data(&account.data).ok())
    }

    /// The next `n` reads fail with a transport error.
    pub fn fail_next_fetches(&self, n: u32) {
        self.fail_fetches.set(n);
    }

    /// The next `n` submissions are rejected.
    pub fn fail_next_sends(&self, n: u32) {
        self.fail_sends.set(n);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn send_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Send(_)))
            .count()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Fetch(_)))
            .count()
    }

    fn execute(&self, tx: &Transaction) -> Result<(), LedgerError> {
        if !tx.is_signed() {
            return Err(LedgerError::Rejected("missing signature".to_string()));
        }
        if self.processed.borrow().contains(&tx.signatures[0]) {
            return Err(LedgerError::Rejected("AlreadyProcessed".to_string()));
        }
        if tx.message.recent_blockhash != self.current_blockhash() {
            return Err(LedgerError::Rejected("BlockhashNotFound".to_string()));
        }
        let keys = &tx.message.account_keys;

        for compiled in &tx.message.instructions {
            let program = keys[compiled.program_id_index as usize];
            if program != self.program_id {
                return Err(LedgerError::Rejected(format!("unknown program {}", program)));
            }
            let accounts: Vec<Pubkey> = compiled
                .accounts
                .iter()
                .map(|i| keys[*i as usize])
                .collect();
            let ix = decode_instruction(&compiled.data)
                .ok_or_else(|| LedgerError::Rejected("invalid instruction data".to_string()))?;

            self.calls.borrow_mut().push(Call::Send(ix.clone()));
            self.apply(ix, &accounts)?;
        }
        Ok(())
    }

    fn current_blockhash(&self) -> Hash {
        Hash::new_from_array([self.blockhash_seed.get(); 32])
    }

    fn apply(&self, ix: PortalInstruction, accounts: &[Pubkey]) -> Result<(), LedgerError> {
        let base = accounts[0];

        if let PortalInstruction::StartStuffOff = ix {
            if self.accounts.borrow().contains_key(&base) {
                return Err(LedgerError::Rejected(format!("account {} already in use", base)));
            }
            self.plant(base, &BaseAccount::default());
            return Ok(());
        }

        let mut list = self
            .base_account(&base)
            .ok_or_else(|| LedgerError::Rejected("AccountNotInitialized".to_string()))?;

        match ix {
            PortalInstruction::AddGif(args) => {
                list.gif_list.push(ItemStruct {
                    gif_link: args.gif_link,
                    user_address: accounts[1].to_bytes(),
                    total_votes: 0,
                });
                list.total_gifs += 1;
            }
            PortalInstruction::UpvoteGif(args) => {
                let item = list
                    .gif_list
                    .iter_mut()
                    .find(|item| item.gif_link == args.gif_link)
                    .ok_or_else(|| LedgerError::Rejected("gif not found".to_string()))?;
                item.total_votes += 1;
            }
            PortalInstruction::StartStuffOff => unreachable!(),
        }

        self.plant(base, &list);
        Ok(())
    }
}

#[async_trait(?Send)]
impl Ledger for ProgramLedger {
    async fn get_account(
        &self,
        address: &Pubkey,
        _commitment: Commitment,
    ) -> Result<Option<AccountData>, LedgerError> {
        self.calls.borrow_mut().push(Call::Fetch(*address));
        if self.fail_fetches.get() > 0 {
            self.fail_fetches.set(self.fail_fetches.get() - 1);
            return Err(LedgerError::Transport("connection reset".to_string()));
        }
        Ok(self.accounts.borrow().get(address).cloned())
    }

    async fn latest_blockhash(&self, _commitment: Commitment) -> Result<Hash, LedgerError> {
        Ok(self.current_blockhash())
    }

    async fn send_transaction(
        &self,
        tx: Transaction,
        _commitment: Commitment,
    ) -> Result<Signature, LedgerError> {
        if self.fail_sends.get() > 0 {
            self.fail_sends.set(self.fail_sends.get() - 1);
            return Err(LedgerError::Rejected("blockhash not found".to_string()));
        }
        self.execute(&tx)?;
        self.processed.borrow_mut().insert(tx.signatures[0]);
        self.blockhash_seed.set(self.blockhash_seed.get().wrapping_add(1));
        Ok(tx.signatures[0])
    }
}

// ======================== WALLETS ========================

/// Wallet that can only connect through an explicit prompt.
pub struct PromptOnlyWallet {
    inner: KeypairWallet,
}

impl PromptOnlyWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            inner: KeypairWallet::untrusted(keypair),
        }
    }
}

#[async_trait(?Send)]
impl Wallet for PromptOnlyWallet {
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, WalletError> {
        self.inner.connect(only_if_trusted).await
    }

    fn sign_transaction(&self, tx: &mut Transaction, recent_blockhash: Hash) -> Result<(), WalletError> {
        self.inner.sign_transaction(tx, recent_blockhash)
    }

    fn supports_silent_connect(&self) -> bool {
        false
    }
}

// ======================== HELPERS ========================

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Harness {
    pub portal: Portal,
    pub ledger: Rc<ProgramLedger>,
    pub base_account: Pubkey,
    pub user: Pubkey,
}

// Portal wired to a simulated program and the given wallet
pub fn setup_with_wallet(wallet: KeypairWallet, configure: impl FnOnce(PortalConfig) -> PortalConfig) -> Harness {
    let user = wallet.pubkey();
    setup_with_dyn_wallet(Rc::new(wallet), user, configure)
}

pub fn setup_with_dyn_wallet(
    wallet: Rc<dyn Wallet>,
    user: Pubkey,
    configure: impl FnOnce(PortalConfig) -> PortalConfig,
) -> Harness {
    init_tracing();
    let program_id = Pubkey::new_unique();
    let config = configure(PortalConfig::new(program_id, Keypair::new()));
    let base_account = config.base_account_address();

    let ledger = Rc::new(ProgramLedger::new(program_id));
    let portal = Portal::new(config, ledger.clone() as Rc<dyn Ledger>, Some(wallet));

    Harness {
        portal,
        ledger,
        base_account,
        user,
    }
}

// Trusted wallet, default config
pub fn setup() -> Harness {
    setup_with_wallet(KeypairWallet::trusted(Keypair::new()), |config| config)
}

pub fn item(link: &str, submitter: Pubkey, votes: u64) -> ItemStruct {
    ItemStruct {
        gif_link: link.to_string(),
        user_address: submitter.to_bytes(),
        total_votes: votes,
    }
}

pub fn list_of(items: Vec<ItemStruct>) -> BaseAccount {
    BaseAccount {
        total_gifs: items.len() as u64,
        gif_list: items,
    }
}
