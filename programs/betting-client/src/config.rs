use std::{path::PathBuf, str::FromStr};

use anchor_client::Cluster;
use anchor_lang::{error::Error, prelude::*};
use home::home_dir;
use tracing::warn;

use crate::{
    constants::{
        CASHOUT_PUBKEY, DEFAULT_KEYPAIR_PATH, ENV_CLUSTER, ENV_KEYPAIR, ENV_MOCK_TRANSFERS, ENV_WITHDRAW_DESTINATION,
    },
    error::BettingError,
};

/// `Mock` short-circuits every dispatch to a confirmed outcome without
/// touching the wallet or the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    #[default]
    Live,
    Mock,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub cluster: Cluster,
    pub keypair_path: PathBuf,
    pub mode: DispatchMode,
    pub withdraw_destination: Pubkey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            cluster: Cluster::Devnet,
            keypair_path: default_keypair_path(),
            mode: DispatchMode::Live,
            withdraw_destination: CASHOUT_PUBKEY,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Some(value) = lookup(ENV_CLUSTER) {
            config.cluster = Cluster::from_str(&value).map_err(|_| invalid(ENV_CLUSTER, &value))?;
        }
        if let Some(value) = lookup(ENV_KEYPAIR) {
            config.keypair_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_MOCK_TRANSFERS) {
            config.mode = parse_mode(&value).ok_or_else(|| invalid(ENV_MOCK_TRANSFERS, &value))?;
        }
        if let Some(value) = lookup(ENV_WITHDRAW_DESTINATION) {
            config.withdraw_destination =
                Pubkey::from_str(&value).map_err(|_| invalid(ENV_WITHDRAW_DESTINATION, &value))?;
        }
        Ok(config)
    }
}

fn default_keypair_path() -> PathBuf {
    home_dir().unwrap_or_default().join(DEFAULT_KEYPAIR_PATH)
}

fn parse_mode(value: &str) -> Option<DispatchMode> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(DispatchMode::Mock),
        "" | "0" | "false" | "no" | "off" => Some(DispatchMode::Live),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> Error {
    warn!(target: "config", key, value, "rejected configuration value");
    error!(BettingError::InvalidConfig)
}
