use std::time::Duration;

use anchor_lang::prelude::*;

pub const CUSD_MINT: Pubkey = Pubkey::new_from_array([
    44, 145, 139, 189, 69, 41, 135, 67, 39, 224, 184, 241, 11, 17, 88, 249, 197, 145, 198, 156, 154, 74, 20, 139,
    213, 43, 127, 57, 168, 225, 62, 199,
]);
pub const CUSD_DECIMALS: u8 = 0;

pub const USDC_DECIMALS: u8 = 6;

pub const CASHOUT_PUBKEY: Pubkey = Pubkey::new_from_array([
    0x67, 0x97, 0x9a, 0x47, 0x7a, 0x81, 0xdd, 0x98, 0xad, 0xc8, 0xa4, 0x25, 0x0c, 0x9c, 0x5a, 0x35, 0xb3, 0x8e,
    0xb9, 0x61, 0x57, 0xe0, 0xde, 0x13, 0xc3, 0xc1, 0xe7, 0x0b, 0x2e, 0xd5, 0x21, 0xbd,
]);

pub const MIN_WITHDRAW_AMOUNT: f64 = 10.0;
pub const MAX_WITHDRAW_AMOUNT: f64 = 5000.0;

pub const MIN_DEPOSIT_AMOUNT: f64 = 10.0;
pub const MAX_DEPOSIT_AMOUNT: f64 = 6000.0;

pub const LAST_DAYS_WINDOW: i64 = 30;

pub const ONE_X_TWO: &str = "1x2";
pub const NFL_KIND: &str = "1x2";
pub const DRAW_LABEL: &str = "Draw";

pub const WITHDRAW_CONFIRMED: &str = "Withdrawal confirmed";

pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_KEYPAIR_PATH: &str = ".config/solana/id.json";

pub const ENV_CLUSTER: &str = "BETTING_CLUSTER";
pub const ENV_KEYPAIR: &str = "BETTING_KEYPAIR";
pub const ENV_MOCK_TRANSFERS: &str = "BETTING_MOCK_TRANSFERS";
pub const ENV_WITHDRAW_DESTINATION: &str = "BETTING_WITHDRAW_DESTINATION";
