use std::sync::Arc;

use anchor_client::{
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        signature::{read_keypair_file, Keypair, Signature},
        signer::Signer,
        transaction::Transaction,
    },
};
use anchor_lang::{prelude::*, solana_program::instruction::Instruction};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{ChainReader, Receipt, ReceiptStatus, WalletProvider};
use crate::{
    actions::TransferDispatcher,
    config::ClientConfig,
    constants::RECEIPT_POLL_INTERVAL,
    error::{transfer_failed, BettingError},
    state::Token,
};

/// Wallet backed by a local keypair file, submitting through RPC.
pub struct KeypairWallet {
    keypair: Keypair,
    rpc: Arc<RpcClient>,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair, rpc: Arc<RpcClient>) -> Self {
        KeypairWallet { keypair, rpc }
    }

    /// Looks for the configured keypair. A missing or unreadable file means
    /// there is no signer in this environment.
    pub fn resolve(config: &ClientConfig, rpc: Arc<RpcClient>) -> Option<Self> {
        match read_keypair_file(&config.keypair_path) {
            Ok(keypair) => {
                debug!(target: "provider", signer = %keypair.pubkey(), "resolved keypair wallet");
                Some(KeypairWallet::new(keypair, rpc))
            }
            Err(err) => {
                warn!(
                    target: "provider",
                    path = %config.keypair_path.display(),
                    %err,
                    "no signer available"
                );
                None
            }
        }
    }
}

impl WalletProvider for KeypairWallet {
    async fn addresses(&self) -> Result<Vec<Pubkey>> {
        Ok(vec![self.keypair.pubkey()])
    }

    async fn submit(&self, account: &Pubkey, instructions: &[Instruction]) -> Result<Signature> {
        require_keys_eq!(*account, self.keypair.pubkey(), BettingError::UnknownAccount);
        let blockhash = self.rpc.get_latest_blockhash().await.map_err(transfer_failed)?;
        let tx = Transaction::new_signed_with_payer(instructions, Some(account), &[&self.keypair], blockhash);
        self.rpc.send_transaction(&tx).await.map_err(transfer_failed)
    }
}

pub struct RpcChain {
    rpc: Arc<RpcClient>,
}

impl RpcChain {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        RpcChain { rpc }
    }
}

impl ChainReader for RpcChain {
    async fn wait_for_receipt(&self, signature: &Signature) -> Result<Receipt> {
        loop {
            let status = self
                .rpc
                .get_signature_status(signature)
                .await
                .map_err(transfer_failed)?;
            match status {
                Some(Ok(())) => {
                    return Ok(Receipt {
                        signature: *signature,
                        status: ReceiptStatus::Success,
                    })
                }
                Some(Err(err)) => {
                    return Ok(Receipt {
                        signature: *signature,
                        status: ReceiptStatus::Reverted {
                            reason: err.to_string(),
                        },
                    })
                }
                None => sleep(RECEIPT_POLL_INTERVAL).await,
            }
        }
    }
}

/// Builds a live dispatcher for `token` against the configured cluster.
pub fn connect(config: &ClientConfig, token: Token) -> TransferDispatcher<KeypairWallet, RpcChain> {
    let rpc = Arc::new(RpcClient::new_with_commitment(
        config.cluster.url().to_string(),
        CommitmentConfig::confirmed(),
    ));
    let wallet = KeypairWallet::resolve(config, rpc.clone());
    TransferDispatcher::new(token, config.mode, wallet, RpcChain::new(rpc))
}
