use {
    crate::{
        commands::CommandExec,
        constants::{DEFAULT_MANAGED_TOKEN_DECIMALS, DEFAULT_TOKEN_DECIMALS},
        context::SolkitContext,
        explorer::{address_link, tx_link},
        operations::{
            CreateTokenParams, ManagedTokenParams, TokenMetadata, create_and_manage_spl_token,
            create_and_transfer_token,
        },
        prompt::{prompt_input_data, prompt_input_with_default},
        ui::{print_error, print_summary, show_spinner},
    },
    solana_pubkey::Pubkey,
    std::fmt,
};

/// SPL token creation commands
#[derive(Debug, Clone)]
pub enum TokenCommand {
    CreateAndTransfer,
    CreateWithMetadata,
    GoBack,
}

impl TokenCommand {
    pub fn spinner_msg(&self) -> &'static str {
        match self {
            TokenCommand::CreateAndTransfer => "Creating mint and transferring tokens…",
            TokenCommand::CreateWithMetadata => "Creating token with metadata…",
            TokenCommand::GoBack => "Going back…",
        }
    }
}

impl fmt::Display for TokenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmd = match self {
            TokenCommand::CreateAndTransfer => "Create token and transfer",
            TokenCommand::CreateWithMetadata => "Create token with metadata",
            TokenCommand::GoBack => "Go back",
        };
        write!(f, "{cmd}")
    }
}

impl TokenCommand {
    pub async fn process_command(&self, ctx: &SolkitContext) -> anyhow::Result<CommandExec<()>> {
        let res = match self {
            TokenCommand::CreateAndTransfer => {
                let recipient: Pubkey = prompt_input_data("Enter recipient address:");
                let amount: f64 = prompt_input_data("Enter amount (tokens):");
                let decimals: u8 =
                    prompt_input_with_default("Enter decimals:", &DEFAULT_TOKEN_DECIMALS.to_string());
                show_spinner(
                    self.spinner_msg(),
                    process_create_and_transfer(ctx, recipient, amount, decimals),
                )
                .await
            }
            TokenCommand::CreateWithMetadata => {
                let metadata = TokenMetadata {
                    name: prompt_input_data("Enter token name:"),
                    symbol: prompt_input_data("Enter token symbol:"),
                    uri: prompt_input_data("Enter metadata URI:"),
                };
                let recipient: Pubkey =
                    prompt_input_with_default("Enter recipient address:", &ctx.pubkey().to_string());
                let amount_to_mint: f64 = prompt_input_with_default("Enter amount to mint:", "10");
                let amount_to_transfer: f64 =
                    prompt_input_with_default("Enter amount to transfer:", "1");
                let decimals: u8 = prompt_input_with_default(
                    "Enter decimals:",
                    &DEFAULT_MANAGED_TOKEN_DECIMALS.to_string(),
                );

                let params = ManagedTokenParams {
                    recipient_address: Some(recipient.to_string()),
                    amount_to_mint,
                    amount_to_transfer,
                    decimals,
                    cluster: ctx.cluster(),
                    commitment: ctx.commitment(),
                    rpc_url: ctx.rpc_url(),
                    ..ManagedTokenParams::new(ctx.keypair(), metadata)
                };
                show_spinner(self.spinner_msg(), process_create_with_metadata(ctx, params)).await
            }
            TokenCommand::GoBack => return Ok(CommandExec::GoBack),
        };

        if let Err(err) = res {
            print_error(format!("{self} failed: {err}"));
        }

        Ok(CommandExec::Process(()))
    }
}

async fn process_create_and_transfer(
    ctx: &SolkitContext,
    recipient: Pubkey,
    amount: f64,
    decimals: u8,
) -> anyhow::Result<()> {
    let result = create_and_transfer_token(CreateTokenParams {
        decimals,
        cluster: ctx.cluster(),
        commitment: ctx.commitment(),
        rpc_url: ctx.rpc_url(),
        ..CreateTokenParams::new(ctx.keypair(), recipient.to_string(), amount)
    })
    .await?;

    print_summary(
        "TOKEN TRANSFER SUMMARY",
        &[
            ("Mint", result.mint_address.to_string()),
            ("Recipient", recipient.to_string()),
            ("Amount", amount.to_string()),
            ("Decimals", decimals.to_string()),
            ("Signature", result.signature.to_string()),
            ("Explorer", tx_link(result.signature, ctx.cluster())),
        ],
    );

    Ok(())
}

async fn process_create_with_metadata(
    ctx: &SolkitContext,
    params: ManagedTokenParams<'_>,
) -> anyhow::Result<()> {
    let name = params.metadata.name.clone();
    let symbol = params.metadata.symbol.clone();
    let result = create_and_manage_spl_token(params).await?;
    let links = &result.explorer_links;

    print_summary(
        "SPL TOKEN SUMMARY",
        &[
            ("Name", name),
            ("Symbol", symbol),
            ("Mint", result.mint_address.to_string()),
            ("Source account", result.source_account.to_string()),
            ("Destination account", result.destination_account.to_string()),
            ("Metadata tx", links.metadata_tx.clone()),
            ("Mint tx", links.mint_tx.clone()),
            ("Transfer tx", links.transfer_tx.clone()),
            ("Explorer", address_link(result.mint_address, ctx.cluster())),
        ],
    );

    Ok(())
}
