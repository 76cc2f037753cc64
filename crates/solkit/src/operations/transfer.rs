use {
    crate::{
        cluster::{Cluster, connect},
        error::SolkitResult,
        explorer::tx_link,
        misc::{
            conversion::sol_to_lamports,
            helpers::{build_and_send_tx, to_pubkey},
            validation::{ensure_address, ensure_nonzero_units, ensure_positive_amount},
        },
    },
    solana_commitment_config::CommitmentLevel,
    solana_keypair::{Keypair, Signer},
    solana_signature::Signature,
    solana_system_interface::instruction as system_instruction,
    tracing::{error, info},
};

pub struct TransferParams<'a> {
    /// Sender and fee payer.
    pub keypair: &'a Keypair,
    pub recipient_address: String,
    /// In SOL.
    pub amount: f64,
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
    pub rpc_url: Option<String>,
}

impl<'a> TransferParams<'a> {
    pub fn new(keypair: &'a Keypair, recipient_address: impl Into<String>, amount: f64) -> Self {
        Self {
            keypair,
            recipient_address: recipient_address.into(),
            amount,
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            rpc_url: None,
        }
    }
}

/// Sends `amount` SOL from `keypair` to the recipient and waits for the
/// configured commitment.
pub async fn transfer(params: TransferParams<'_>) -> SolkitResult<Signature> {
    info!(cluster = %params.cluster, "Processing transaction");
    send_sol(&params)
        .await
        .inspect_err(|err| error!(%err, "Transaction failed"))
}

async fn send_sol(params: &TransferParams<'_>) -> SolkitResult<Signature> {
    ensure_address(&params.recipient_address, "Recipient address is required")?;
    ensure_positive_amount(params.amount, "Amount must be greater than 0")?;

    let lamports = sol_to_lamports(params.amount)?;
    ensure_nonzero_units(lamports, params.amount)?;

    let recipient = to_pubkey(&params.recipient_address)?;
    let sender = params.keypair.pubkey();
    let rpc = connect(params.cluster, params.commitment, params.rpc_url.as_deref());

    let transfer_ix = system_instruction::transfer(&sender, &recipient, lamports);

    let signature = build_and_send_tx(&rpc, &sender, &[transfer_ix], &[params.keypair]).await?;

    info!(
        amount = params.amount,
        lamports,
        %recipient,
        "Sent {} SOL to {}",
        params.amount,
        params.recipient_address
    );
    info!(explorer = %tx_link(signature, params.cluster), "Visit Explorer for more info");

    Ok(signature)
}
