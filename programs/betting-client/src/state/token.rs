use anchor_lang::{prelude::*, solana_program::instruction::Instruction};
use anchor_spl::{associated_token::get_associated_token_address, mint::USDC, token::spl_token};

use crate::{
    constants::{CUSD_DECIMALS, CUSD_MINT, USDC_DECIMALS},
    error::transfer_failed,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Cusd,
    Usdc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallSignature {
    Transfer,
    TransferChecked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub mint: Pubkey,
    pub decimals: u8,
    pub call: CallSignature,
}

impl Token {
    pub const ALL: [Token; 2] = [Token::Cusd, Token::Usdc];

    pub fn config(&self) -> TokenConfig {
        match self {
            Token::Cusd => TokenConfig {
                mint: CUSD_MINT,
                decimals: CUSD_DECIMALS,
                call: CallSignature::Transfer,
            },
            Token::Usdc => TokenConfig {
                mint: USDC,
                decimals: USDC_DECIMALS,
                call: CallSignature::TransferChecked,
            },
        }
    }
    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Cusd => "cUSD",
            Token::Usdc => "USDC",
        }
    }
}

/// One token movement from `authority`'s associated token account to
/// `destination`'s. `amount` is already in base units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferCall {
    pub token: Token,
    pub authority: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

impl TransferCall {
    pub fn source(&self) -> Pubkey {
        get_associated_token_address(&self.authority, &self.token.config().mint)
    }
    pub fn destination_account(&self) -> Pubkey {
        get_associated_token_address(&self.destination, &self.token.config().mint)
    }
    pub fn instruction(&self) -> Result<Instruction> {
        let config = self.token.config();
        let instruction = match config.call {
            CallSignature::Transfer => spl_token::instruction::transfer(
                &spl_token::ID,
                &self.source(),
                &self.destination_account(),
                &self.authority,
                &[],
                self.amount,
            ),
            CallSignature::TransferChecked => spl_token::instruction::transfer_checked(
                &spl_token::ID,
                &self.source(),
                &config.mint,
                &self.destination_account(),
                &self.authority,
                &[],
                self.amount,
                config.decimals,
            ),
        };
        instruction.map_err(transfer_failed)
    }
}
