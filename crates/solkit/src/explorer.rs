use {
    crate::{cluster::Cluster, constants::EXPLORER_BASE_URL},
    std::fmt,
};

/// What an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerTarget {
    Transaction,
    Address,
}

impl ExplorerTarget {
    const fn path(self) -> &'static str {
        match self {
            ExplorerTarget::Transaction => "tx",
            ExplorerTarget::Address => "address",
        }
    }
}

pub fn explorer_link(target: ExplorerTarget, value: impl fmt::Display, cluster: Cluster) -> String {
    let base = format!("{EXPLORER_BASE_URL}/{}/{value}", target.path());
    match cluster {
        Cluster::MainnetBeta => base,
        Cluster::Devnet | Cluster::Testnet => format!("{base}?cluster={cluster}"),
        Cluster::Localnet => format!("{base}?cluster=custom&customUrl=http%3A%2F%2Flocalhost%3A8899"),
    }
}

pub fn tx_link(signature: impl fmt::Display, cluster: Cluster) -> String {
    explorer_link(ExplorerTarget::Transaction, signature, cluster)
}

pub fn address_link(address: impl fmt::Display, cluster: Cluster) -> String {
    explorer_link(ExplorerTarget::Address, address, cluster)
}
