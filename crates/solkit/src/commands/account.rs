use {
    crate::{
        commands::CommandExec,
        context::SolkitContext,
        explorer::{address_link, tx_link},
        misc::helpers::short_pubkey,
        operations::{AirdropParams, ShowBalanceParams, TransferParams, airdrop, show_balance, transfer},
        prompt::{prompt_input_data, prompt_input_with_default},
        ui::{print_error, print_summary, show_spinner},
    },
    solana_pubkey::Pubkey,
    std::fmt,
};

/// Commands over native SOL balances
#[derive(Debug, Clone)]
pub enum AccountCommand {
    Balance,
    Airdrop,
    Transfer,
    GoBack,
}

impl AccountCommand {
    pub fn spinner_msg(&self) -> &'static str {
        match self {
            AccountCommand::Balance => "Checking SOL balance…",
            AccountCommand::Airdrop => "Requesting airdrop and waiting for finalization…",
            AccountCommand::Transfer => "Sending SOL…",
            AccountCommand::GoBack => "Going back…",
        }
    }
}

impl fmt::Display for AccountCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match self {
            AccountCommand::Balance => "Check balance",
            AccountCommand::Airdrop => "Request airdrop",
            AccountCommand::Transfer => "Transfer SOL",
            AccountCommand::GoBack => "Go back",
        };
        write!(f, "{command}")
    }
}

impl AccountCommand {
    pub async fn process_command(&self, ctx: &SolkitContext) -> anyhow::Result<CommandExec<()>> {
        let res = match self {
            AccountCommand::Balance => {
                let address: Pubkey =
                    prompt_input_with_default("Enter address:", &ctx.pubkey().to_string());
                show_spinner(self.spinner_msg(), process_balance(ctx, address)).await
            }
            AccountCommand::Airdrop => {
                let address: Pubkey =
                    prompt_input_with_default("Enter address:", &ctx.pubkey().to_string());
                let amount: f64 = prompt_input_with_default("Enter amount (SOL):", "1");
                show_spinner(self.spinner_msg(), process_airdrop(ctx, address, amount)).await
            }
            AccountCommand::Transfer => {
                let recipient: Pubkey = prompt_input_data("Enter recipient address:");
                let amount: f64 = prompt_input_data("Enter amount (SOL):");
                show_spinner(self.spinner_msg(), process_transfer(ctx, recipient, amount)).await
            }
            AccountCommand::GoBack => return Ok(CommandExec::GoBack),
        };

        if let Err(err) = res {
            print_error(format!("{self} failed: {err}"));
        }

        Ok(CommandExec::Process(()))
    }
}

async fn process_balance(ctx: &SolkitContext, address: Pubkey) -> anyhow::Result<()> {
    let balance = show_balance(ShowBalanceParams {
        cluster: ctx.cluster(),
        commitment: ctx.commitment(),
        rpc_url: ctx.rpc_url(),
        ..ShowBalanceParams::new(address.to_string())
    })
    .await?;

    print_summary(
        "ACCOUNT BALANCE",
        &[
            ("Address", short_pubkey(&address)),
            ("Balance", format!("{balance} SOL")),
            ("Cluster", ctx.cluster().to_string()),
            ("Explorer", address_link(address, ctx.cluster())),
        ],
    );

    Ok(())
}

async fn process_airdrop(ctx: &SolkitContext, address: Pubkey, amount: f64) -> anyhow::Result<()> {
    let signature = airdrop(AirdropParams {
        cluster: ctx.cluster(),
        commitment: ctx.commitment(),
        rpc_url: ctx.rpc_url(),
        ..AirdropParams::new(address.to_string(), amount)
    })
    .await?;

    print_summary(
        "AIRDROP SUMMARY",
        &[
            ("Recipient", address.to_string()),
            ("Amount", format!("{amount} SOL")),
            ("Signature", signature.to_string()),
            ("Explorer", tx_link(signature, ctx.cluster())),
        ],
    );

    Ok(())
}

async fn process_transfer(ctx: &SolkitContext, recipient: Pubkey, amount: f64) -> anyhow::Result<()> {
    if &recipient == ctx.pubkey() {
        anyhow::bail!("Cannot transfer SOL to your own address.");
    }

    let signature = transfer(TransferParams {
        cluster: ctx.cluster(),
        commitment: ctx.commitment(),
        rpc_url: ctx.rpc_url(),
        ..TransferParams::new(ctx.keypair(), recipient.to_string(), amount)
    })
    .await?;

    print_summary(
        "TRANSFER SUMMARY",
        &[
            ("Status", "Success".to_string()),
            ("Recipient", recipient.to_string()),
            ("Amount", format!("{amount} SOL")),
            ("Signature", signature.to_string()),
            ("Explorer", tx_link(signature, ctx.cluster())),
        ],
    );

    Ok(())
}
