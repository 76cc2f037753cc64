use {
    super::{
        metadata::{CreateMetadataAccounts, DataV2, create_metadata_account_v3},
        token::{
            create_mint_instructions, get_or_create_associated_account, mint_to_instruction,
            send_token_transfer,
        },
    },
    crate::{
        cluster::{Cluster, connect},
        constants::DEFAULT_MANAGED_TOKEN_DECIMALS,
        error::SolkitResult,
        explorer::{address_link, tx_link},
        misc::{
            conversion::ui_amount_to_minor_units,
            helpers::{build_and_send_tx, to_pubkey},
            validation::{ensure_decimals, ensure_nonzero_units, ensure_positive_amount},
        },
    },
    solana_commitment_config::CommitmentLevel,
    solana_keypair::{Keypair, Signer},
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    tracing::{debug, error, info},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

pub struct ManagedTokenParams<'a> {
    /// Payer, mint authority and metadata update authority.
    pub wallet: &'a Keypair,
    pub metadata: TokenMetadata,
    /// Defaults to the wallet itself when `None`.
    pub recipient_address: Option<String>,
    pub amount_to_mint: f64,
    pub amount_to_transfer: f64,
    pub decimals: u8,
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
    pub rpc_url: Option<String>,
}

impl<'a> ManagedTokenParams<'a> {
    pub fn new(wallet: &'a Keypair, metadata: TokenMetadata) -> Self {
        Self {
            wallet,
            metadata,
            recipient_address: None,
            amount_to_mint: 10.0,
            amount_to_transfer: 1.0,
            decimals: DEFAULT_MANAGED_TOKEN_DECIMALS,
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            rpc_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedTokenLinks {
    pub mint: String,
    pub source_account: String,
    pub destination_account: String,
    pub metadata_tx: String,
    pub mint_tx: String,
    pub transfer_tx: String,
}

#[derive(Debug, Clone)]
pub struct ManagedTokenResult {
    pub mint_address: Pubkey,
    pub source_account: Pubkey,
    pub destination_account: Pubkey,
    pub metadata_signature: Signature,
    pub mint_signature: Signature,
    pub transfer_signature: Signature,
    pub explorer_links: ManagedTokenLinks,
}

/// Creates a fungible token with on-chain metadata, mints to the wallet and
/// transfers part of the supply to the recipient.
pub async fn create_and_manage_spl_token(params: ManagedTokenParams<'_>) -> SolkitResult<ManagedTokenResult> {
    info!(cluster = %params.cluster, "Processing SPL token");
    create_with_metadata(&params)
        .await
        .inspect_err(|err| error!(%err, "SPL token management failed"))
}

async fn create_with_metadata(params: &ManagedTokenParams<'_>) -> SolkitResult<ManagedTokenResult> {
    let wallet = params.wallet;
    let authority = wallet.pubkey();

    ensure_positive_amount(params.amount_to_mint, "Amounts must be greater than 0")?;
    ensure_positive_amount(params.amount_to_transfer, "Amounts must be greater than 0")?;
    ensure_decimals(params.decimals)?;

    let recipient = match params.recipient_address.as_deref() {
        Some(address) => to_pubkey(address)?,
        None => authority,
    };
    let mint_units = ui_amount_to_minor_units(params.amount_to_mint, params.decimals)?;
    let transfer_units = ui_amount_to_minor_units(params.amount_to_transfer, params.decimals)?;
    ensure_nonzero_units(mint_units, params.amount_to_mint)?;
    ensure_nonzero_units(transfer_units, params.amount_to_transfer)?;
    let data = DataV2::fungible(&params.metadata.name, &params.metadata.symbol, &params.metadata.uri);
    data.validate()?;

    let rpc = connect(params.cluster, params.commitment, params.rpc_url.as_deref());

    let mint = Keypair::new();
    let mint_address = mint.pubkey();
    let mut instructions = create_mint_instructions(&rpc, &authority, &mint_address, params.decimals).await?;
    instructions.push(create_metadata_account_v3(
        &CreateMetadataAccounts {
            mint: mint_address,
            mint_authority: authority,
            payer: authority,
            update_authority: authority,
        },
        data,
        true,
    )?);
    let metadata_signature = build_and_send_tx(&rpc, &authority, &instructions, &[wallet, &mint]).await?;
    debug!(%mint_address, %metadata_signature, "Created mint with metadata");

    let source_account = get_or_create_associated_account(&rpc, wallet, &mint_address, &authority).await?;
    let mint_signature = build_and_send_tx(
        &rpc,
        &authority,
        &[mint_to_instruction(&mint_address, &source_account, &authority, mint_units)?],
        &[wallet],
    )
    .await?;

    let destination_account = get_or_create_associated_account(&rpc, wallet, &mint_address, &recipient).await?;
    let (_, transfer_signature) =
        send_token_transfer(&rpc, wallet, &source_account, &destination_account, transfer_units).await?;

    let explorer_links = ManagedTokenLinks {
        mint: address_link(mint_address, params.cluster),
        source_account: address_link(source_account, params.cluster),
        destination_account: address_link(destination_account, params.cluster),
        metadata_tx: tx_link(metadata_signature, params.cluster),
        mint_tx: tx_link(mint_signature, params.cluster),
        transfer_tx: tx_link(transfer_signature, params.cluster),
    };

    info!(explorer = %explorer_links.mint, "Created and managed SPL token");

    Ok(ManagedTokenResult {
        mint_address,
        source_account,
        destination_account,
        metadata_signature,
        mint_signature,
        transfer_signature,
        explorer_links,
    })
}
