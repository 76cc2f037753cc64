use {
    crate::{
        constants::{DEVNET_RPC, LOCALNET_RPC, MAINNET_RPC, TESTNET_RPC},
        error::SolkitError,
    },
    serde::{Deserialize, Serialize},
    solana_commitment_config::{CommitmentConfig, CommitmentLevel},
    solana_rpc_client::nonblocking::rpc_client::RpcClient,
    std::{fmt, str::FromStr},
    tracing::debug,
};

/// A named deployment of the Solana network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
    Localnet,
}

impl Cluster {
    pub const ALL: [Cluster; 4] = [
        Cluster::Devnet,
        Cluster::Testnet,
        Cluster::MainnetBeta,
        Cluster::Localnet,
    ];

    pub const fn rpc_url(self) -> &'static str {
        match self {
            Cluster::MainnetBeta => MAINNET_RPC,
            Cluster::Testnet => TESTNET_RPC,
            Cluster::Devnet => DEVNET_RPC,
            Cluster::Localnet => LOCALNET_RPC,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = SolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            other => Err(SolkitError::validation(format!(
                "Unsupported cluster: {other}. Expected one of mainnet-beta, testnet, devnet, localnet"
            ))),
        }
    }
}

/// Returns an RPC client for `cluster` that uses `commitment` for every request.
pub fn get_connection(cluster: Cluster, commitment: CommitmentLevel) -> RpcClient {
    get_connection_with_url(cluster.rpc_url(), commitment)
}

pub fn get_connection_with_url(rpc_url: &str, commitment: CommitmentLevel) -> RpcClient {
    debug!(rpc_url, %commitment, "opening rpc connection");
    RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig { commitment })
}

/// Honors an explicit endpoint override, falling back to the cluster default.
pub fn connect(cluster: Cluster, commitment: CommitmentLevel, rpc_url: Option<&str>) -> RpcClient {
    match rpc_url {
        Some(url) => get_connection_with_url(url, commitment),
        None => get_connection(cluster, commitment),
    }
}
