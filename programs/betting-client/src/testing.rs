//! Providers and ProgramTest fixtures shared by the unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use anchor_lang::{prelude::*, solana_program::instruction::Instruction};
use anchor_spl::{associated_token::get_associated_token_address, token::spl_token};
use solana_program_test::{BanksClient, ProgramTest};
use solana_sdk::{
    account::Account,
    native_token::LAMPORTS_PER_SOL,
    program_option::COption,
    program_pack::Pack,
    rent::Rent,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::{self, Transaction},
};

use crate::{
    error::transfer_failed,
    provider::{ChainReader, Receipt, ReceiptStatus, WalletProvider},
    state::Token,
};

/// Wallet that never leaves the process. Hands out fresh signatures and
/// records every submission.
#[derive(Default)]
pub struct ScriptedWallet {
    accounts: Vec<Pubkey>,
    failure: Option<String>,
    address_lookups: Cell<usize>,
    submissions: RefCell<Vec<(Pubkey, Vec<Instruction>)>>,
}

impl ScriptedWallet {
    pub fn with_account(account: Pubkey) -> Self {
        ScriptedWallet {
            accounts: vec![account],
            ..Default::default()
        }
    }
    pub fn failing(account: Pubkey, reason: &str) -> Self {
        ScriptedWallet {
            accounts: vec![account],
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }
    pub fn address_lookups(&self) -> usize {
        self.address_lookups.get()
    }
    pub fn submissions(&self) -> Vec<(Pubkey, Vec<Instruction>)> {
        self.submissions.borrow().clone()
    }
}

impl WalletProvider for ScriptedWallet {
    async fn addresses(&self) -> Result<Vec<Pubkey>> {
        self.address_lookups.set(self.address_lookups.get() + 1);
        Ok(self.accounts.clone())
    }

    async fn submit(&self, account: &Pubkey, instructions: &[Instruction]) -> Result<Signature> {
        if let Some(reason) = &self.failure {
            return Err(transfer_failed(reason));
        }
        self.submissions.borrow_mut().push((*account, instructions.to_vec()));
        Ok(Signature::new_unique())
    }
}

/// Chain that answers every receipt query with the same status and counts
/// how often it was asked.
pub struct RecordingChain {
    status: std::result::Result<ReceiptStatus, String>,
    lookups: Cell<usize>,
}

impl Default for RecordingChain {
    fn default() -> Self {
        RecordingChain::with_status(ReceiptStatus::Success)
    }
}

impl RecordingChain {
    pub fn with_status(status: ReceiptStatus) -> Self {
        RecordingChain {
            status: Ok(status),
            lookups: Cell::new(0),
        }
    }
    pub fn failing(reason: &str) -> Self {
        RecordingChain {
            status: Err(reason.to_string()),
            lookups: Cell::new(0),
        }
    }
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ChainReader for RecordingChain {
    async fn wait_for_receipt(&self, signature: &Signature) -> Result<Receipt> {
        self.lookups.set(self.lookups.get() + 1);
        match &self.status {
            Ok(status) => Ok(Receipt {
                signature: *signature,
                status: status.clone(),
            }),
            Err(reason) => Err(transfer_failed(reason)),
        }
    }
}

type ReceiptLog = Rc<RefCell<HashMap<Signature, transaction::Result<()>>>>;

/// Wallet that signs with a local keypair and processes through `BanksClient`.
pub struct BanksWallet {
    banks_client: BanksClient,
    signer: Keypair,
    receipts: ReceiptLog,
}

impl BanksWallet {
    pub fn new(banks_client: BanksClient, signer: Keypair) -> Self {
        BanksWallet {
            banks_client,
            signer,
            receipts: Rc::new(RefCell::new(HashMap::new())),
        }
    }
    pub fn receipts(&self) -> ReceiptLog {
        self.receipts.clone()
    }
}

impl WalletProvider for BanksWallet {
    async fn addresses(&self) -> Result<Vec<Pubkey>> {
        Ok(vec![self.signer.pubkey()])
    }

    async fn submit(&self, account: &Pubkey, instructions: &[Instruction]) -> Result<Signature> {
        let mut banks_client = self.banks_client.clone();
        let recent_blockhash = banks_client.get_latest_blockhash().await.map_err(transfer_failed)?;
        let tx = Transaction::new_signed_with_payer(instructions, Some(account), &[&self.signer], recent_blockhash);
        let signature = tx.signatures[0];
        let processed = banks_client
            .process_transaction_with_metadata(tx)
            .await
            .map_err(transfer_failed)?;
        self.receipts.borrow_mut().insert(signature, processed.result);
        Ok(signature)
    }
}

/// Reads receipts recorded by a `BanksWallet`.
pub struct BanksChain {
    receipts: ReceiptLog,
}

impl BanksChain {
    pub fn new(receipts: ReceiptLog) -> Self {
        BanksChain { receipts }
    }
}

impl ChainReader for BanksChain {
    async fn wait_for_receipt(&self, signature: &Signature) -> Result<Receipt> {
        let result = self
            .receipts
            .borrow()
            .get(signature)
            .cloned()
            .ok_or_else(|| transfer_failed(format!("transaction {} not found", signature)))?;
        let status = match result {
            Ok(()) => ReceiptStatus::Success,
            Err(err) => ReceiptStatus::Reverted {
                reason: err.to_string(),
            },
        };
        Ok(Receipt {
            signature: *signature,
            status,
        })
    }
}

pub fn add_wallet(program_test: &mut ProgramTest, owner: &Pubkey) {
    program_test.add_account(
        *owner,
        Account {
            lamports: LAMPORTS_PER_SOL,
            ..Default::default()
        },
    );
}

pub fn add_mint(program_test: &mut ProgramTest, token: Token) {
    let config = token.config();
    let mint_state = spl_token::state::Mint {
        mint_authority: COption::None,
        supply: u64::MAX / 2,
        decimals: config.decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut mint_data = [0_u8; 82];
    spl_token::state::Mint::pack(mint_state, &mut mint_data).unwrap();
    program_test.add_account(
        config.mint,
        Account {
            lamports: Rent::default().minimum_balance(82),
            data: Vec::from(mint_data),
            owner: spl_token::ID,
            ..Default::default()
        },
    );
}

/// Seeds the associated token account of `owner` for `token` and returns its address.
pub fn add_token_account(program_test: &mut ProgramTest, token: Token, owner: &Pubkey, amount: u64) -> Pubkey {
    let mint = token.config().mint;
    let ata = get_associated_token_address(owner, &mint);
    let ata_state = spl_token::state::Account {
        mint,
        owner: *owner,
        amount,
        state: spl_token::state::AccountState::Initialized,
        ..Default::default()
    };
    let mut ata_data = [0_u8; 165];
    spl_token::state::Account::pack(ata_state, &mut ata_data).unwrap();
    program_test.add_account(
        ata,
        Account {
            lamports: Rent::default().minimum_balance(165),
            data: Vec::from(ata_data),
            owner: spl_token::ID,
            ..Default::default()
        },
    );
    ata
}
