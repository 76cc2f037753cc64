use {
    crate::{
        cluster::{Cluster, connect},
        error::SolkitResult,
        explorer::address_link,
        misc::{conversion::lamports_to_sol, helpers::to_pubkey, validation::ensure_address},
    },
    solana_commitment_config::CommitmentLevel,
    tracing::{error, info},
};

#[derive(Debug, Clone)]
pub struct ShowBalanceParams {
    pub address: String,
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
    pub rpc_url: Option<String>,
}

impl ShowBalanceParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            rpc_url: None,
        }
    }
}

/// Returns the balance of `address` in SOL.
pub async fn show_balance(params: ShowBalanceParams) -> SolkitResult<f64> {
    info!(cluster = %params.cluster, "Fetching balance");
    fetch_balance(&params)
        .await
        .inspect_err(|err| error!(%err, "Failed to fetch balance"))
}

async fn fetch_balance(params: &ShowBalanceParams) -> SolkitResult<f64> {
    ensure_address(&params.address, "Public key string is required.")?;

    let pubkey = to_pubkey(&params.address)?;
    let rpc = connect(params.cluster, params.commitment, params.rpc_url.as_deref());

    let lamports = rpc.get_balance(&pubkey).await?;
    let sol = lamports_to_sol(lamports);

    info!(
        %pubkey,
        lamports,
        explorer = %address_link(pubkey, params.cluster),
        "Visit Explorer for more info"
    );

    Ok(sol)
}
