use {
    crate::{
        cluster::{Cluster, connect},
        constants::DEFAULT_TOKEN_DECIMALS,
        error::{SolkitError, SolkitResult},
        explorer::tx_link,
        misc::{
            conversion::ui_amount_to_minor_units,
            helpers::{build_and_send_tx, build_signed_tx, to_pubkey},
            validation::{ensure_address, ensure_decimals, ensure_nonzero_units, ensure_positive_amount},
        },
    },
    solana_commitment_config::CommitmentLevel,
    solana_instruction::Instruction,
    solana_keypair::{Keypair, Signer},
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    solana_rpc_client::nonblocking::rpc_client::RpcClient,
    solana_signature::Signature,
    solana_system_interface::instruction as system_instruction,
    solana_transaction::Transaction,
    spl_associated_token_account_interface::{
        address::get_associated_token_address, instruction::create_associated_token_account_idempotent,
    },
    spl_token_interface::{instruction as token_instruction, state::Mint},
    tracing::{debug, error, info},
};

pub struct CreateTokenParams<'a> {
    /// Pays for every account and is the mint authority.
    pub mint_wallet: &'a Keypair,
    pub recipient_address: String,
    /// In display units of the new token.
    pub amount: f64,
    pub decimals: u8,
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
    pub rpc_url: Option<String>,
}

impl<'a> CreateTokenParams<'a> {
    pub fn new(mint_wallet: &'a Keypair, recipient_address: impl Into<String>, amount: f64) -> Self {
        Self {
            mint_wallet,
            recipient_address: recipient_address.into(),
            amount,
            decimals: DEFAULT_TOKEN_DECIMALS,
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            rpc_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenTransferResult {
    pub signature: Signature,
    pub mint_address: Pubkey,
    /// The signed transfer transaction as submitted.
    pub transaction: Transaction,
}

/// Creates a new SPL token mint, mints `amount` to the wallet's associated
/// account and transfers the same amount to the recipient.
pub async fn create_and_transfer_token(params: CreateTokenParams<'_>) -> SolkitResult<TokenTransferResult> {
    info!(cluster = %params.cluster, "Processing token transaction");
    create_mint_and_send(&params)
        .await
        .inspect_err(|err| error!(%err, "Token transaction failed"))
}

async fn create_mint_and_send(params: &CreateTokenParams<'_>) -> SolkitResult<TokenTransferResult> {
    ensure_address(&params.recipient_address, "Recipient address is required")?;
    ensure_positive_amount(params.amount, "Amount must be greater than 0")?;
    ensure_decimals(params.decimals)?;

    let recipient = to_pubkey(&params.recipient_address)?;
    let units = ui_amount_to_minor_units(params.amount, params.decimals)?;
    ensure_nonzero_units(units, params.amount)?;
    let rpc = connect(params.cluster, params.commitment, params.rpc_url.as_deref());
    let wallet = params.mint_wallet;
    let authority = wallet.pubkey();

    let mint = Keypair::new();
    let mint_address = mint.pubkey();
    let mut create_ixs = create_mint_instructions(&rpc, &authority, &mint_address, params.decimals).await?;

    let source = get_associated_token_address(&authority, &mint_address);
    create_ixs.push(create_associated_token_account_idempotent(
        &authority,
        &authority,
        &mint_address,
        &spl_token_interface::id(),
    ));
    create_ixs.push(mint_to_instruction(&mint_address, &source, &authority, units)?);
    build_and_send_tx(&rpc, &authority, &create_ixs, &[wallet, &mint]).await?;
    debug!(%mint_address, %source, units, "Created mint and minted to source account");

    let destination = get_or_create_associated_account(&rpc, wallet, &mint_address, &recipient).await?;

    let (transaction, signature) = send_token_transfer(&rpc, wallet, &source, &destination, units).await?;

    info!(
        "Created token {} and transferred {} tokens to {}",
        mint_address, params.amount, params.recipient_address
    );
    info!(explorer = %tx_link(signature, params.cluster), "Transaction details");

    Ok(TokenTransferResult {
        signature,
        mint_address,
        transaction,
    })
}

fn instruction_error(err: impl std::fmt::Display) -> SolkitError {
    SolkitError::Instruction(err.to_string())
}

/// Allocates a rent-exempt mint account owned by the token program and
/// initializes it with `authority` as mint authority and no freeze authority.
pub(crate) async fn create_mint_instructions(
    rpc: &RpcClient,
    authority: &Pubkey,
    mint: &Pubkey,
    decimals: u8,
) -> SolkitResult<Vec<Instruction>> {
    let rent = rpc.get_minimum_balance_for_rent_exemption(Mint::LEN).await?;

    let create_account_ix = system_instruction::create_account(
        authority,
        mint,
        rent,
        Mint::LEN as u64,
        &spl_token_interface::id(),
    );
    let init_mint_ix =
        token_instruction::initialize_mint2(&spl_token_interface::id(), mint, authority, None, decimals)
            .map_err(instruction_error)?;

    Ok(vec![create_account_ix, init_mint_ix])
}

pub(crate) fn mint_to_instruction(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    units: u64,
) -> SolkitResult<Instruction> {
    token_instruction::mint_to(&spl_token_interface::id(), mint, destination, authority, &[], units)
        .map_err(instruction_error)
}

/// Returns the associated token account of `owner` for `mint`, creating it
/// with `payer` when it does not exist yet.
pub(crate) async fn get_or_create_associated_account(
    rpc: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> SolkitResult<Pubkey> {
    let address = get_associated_token_address(owner, mint);

    let existing = rpc
        .get_account_with_commitment(&address, rpc.commitment())
        .await?;

    if existing.value.is_none() {
        let create_ix = create_associated_token_account_idempotent(
            &payer.pubkey(),
            owner,
            mint,
            &spl_token_interface::id(),
        );
        let signature = build_and_send_tx(rpc, &payer.pubkey(), &[create_ix], &[payer]).await?;
        debug!(%address, %owner, %signature, "Created associated token account");
    }

    Ok(address)
}

pub(crate) async fn send_token_transfer(
    rpc: &RpcClient,
    authority: &Keypair,
    source: &Pubkey,
    destination: &Pubkey,
    units: u64,
) -> SolkitResult<(Transaction, Signature)> {
    let transfer_ix = token_instruction::transfer(
        &spl_token_interface::id(),
        source,
        destination,
        &authority.pubkey(),
        &[],
        units,
    )
    .map_err(instruction_error)?;

    let tx = build_signed_tx(rpc, &authority.pubkey(), &[transfer_ix], &[authority]).await?;
    let signature = rpc.send_and_confirm_transaction(&tx).await?;

    Ok((tx, signature))
}
