use {
    crate::{
        cluster::{Cluster, connect},
        confirm::{wait_for_commitment, with_confirmation_timeout},
        error::SolkitResult,
        explorer::tx_link,
        misc::{
            conversion::sol_to_lamports,
            helpers::to_pubkey,
            validation::{
                ensure_address, ensure_airdrop_allowed, ensure_nonzero_units, ensure_positive_amount,
            },
        },
    },
    solana_commitment_config::{CommitmentConfig, CommitmentLevel},
    solana_signature::Signature,
    tracing::{error, info},
};

#[derive(Debug, Clone)]
pub struct AirdropParams {
    pub address: String,
    /// In SOL.
    pub amount: f64,
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
    pub rpc_url: Option<String>,
}

impl AirdropParams {
    pub fn new(address: impl Into<String>, amount: f64) -> Self {
        Self {
            address: address.into(),
            amount,
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            rpc_url: None,
        }
    }
}

/// Requests `amount` SOL from the cluster faucet and waits for the airdrop to
/// be finalized.
pub async fn airdrop(params: AirdropParams) -> SolkitResult<Signature> {
    info!(cluster = %params.cluster, "Initiating airdrop");
    request_and_confirm(&params)
        .await
        .inspect_err(|err| error!(%err, "Airdrop failed"))
}

async fn request_and_confirm(params: &AirdropParams) -> SolkitResult<Signature> {
    ensure_address(&params.address, "Address string is required.")?;
    ensure_positive_amount(params.amount, "Airdrop amount must be greater than 0.")?;
    ensure_airdrop_allowed(params.cluster, params.amount)?;

    let lamports = sol_to_lamports(params.amount)?;
    ensure_nonzero_units(lamports, params.amount)?;

    let pubkey = to_pubkey(&params.address)?;
    let rpc = connect(params.cluster, params.commitment, params.rpc_url.as_deref());

    let signature = rpc.request_airdrop(&pubkey, lamports).await?;

    let (_, last_valid_block_height) = rpc
        .get_latest_blockhash_with_commitment(rpc.commitment())
        .await?;

    with_confirmation_timeout(
        wait_for_commitment(
            &rpc,
            &signature,
            last_valid_block_height,
            CommitmentConfig::finalized(),
        ),
        "Airdrop confirmation timeout",
    )
    .await?;

    info!(
        %signature,
        explorer = %tx_link(signature, params.cluster),
        "Airdrop confirmed"
    );

    Ok(signature)
}
