use {
    crate::{
        commands::CommandExec,
        config::{SolkitConfig, solkit_config_path},
        context::SolkitContext,
        prompt::{prompt_cluster, prompt_commitment, prompt_confirmation, prompt_input_with_default},
        ui::{print_error, print_summary},
    },
    console::style,
    std::{
        fmt,
        path::{Path, PathBuf},
    },
};

/// Commands related to configuration like cluster, commitment, keypair path
#[derive(Debug, Clone)]
pub enum ConfigCommand {
    Show,
    Generate,
    Edit,
    GoBack,
}

impl fmt::Display for ConfigCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match self {
            ConfigCommand::Show => "Show config",
            ConfigCommand::Generate => "Generate config",
            ConfigCommand::Edit => "Edit config",
            ConfigCommand::GoBack => "Go back",
        };
        write!(f, "{command}")
    }
}

impl ConfigCommand {
    pub async fn process_command(&self, ctx: &mut SolkitContext) -> anyhow::Result<CommandExec<()>> {
        match self {
            ConfigCommand::Show => show_config(ctx.config()),
            ConfigCommand::Generate => {
                generate_config()?;
            }
            ConfigCommand::Edit => {
                let config = edit_config(ctx.config().clone());
                let path = solkit_config_path()?;
                match ctx.apply_and_save(config, &path) {
                    Ok(()) => print_saved(&path),
                    Err(err) => print_error(format!("Config not saved: {err}")),
                }
            }
            ConfigCommand::GoBack => return Ok(CommandExec::GoBack),
        }

        Ok(CommandExec::Process(()))
    }
}

fn show_config(config: &SolkitConfig) {
    print_summary(
        "CURRENT CONFIG",
        &[
            ("Cluster", config.cluster.to_string()),
            ("RPC URL", config.effective_rpc_url().to_string()),
            ("Commitment Level", config.commitment_level.to_string()),
            ("Keypair Path", config.keypair_path.display().to_string()),
        ],
    );
}

fn prompt_keypair_path(default: &Path) -> PathBuf {
    loop {
        let keypair_path: PathBuf =
            prompt_input_with_default("Enter keypair path:", &default.display().to_string());

        if keypair_path.exists() {
            return keypair_path;
        }
        println!(
            "{}",
            style(format!("Keypair file not found at: {}", keypair_path.display())).red()
        );
    }
}

fn print_saved(path: &Path) {
    println!("\n{}", style("✓ Config saved successfully!").green().bold());
    println!("{}", style(format!("Saved to: {}", path.display())).cyan());
}

fn write_config(config: &SolkitConfig) -> anyhow::Result<()> {
    let path = config.save()?;
    print_saved(&path);
    Ok(())
}

/// Interactive first-run setup. Returns the written config.
pub fn generate_config() -> anyhow::Result<SolkitConfig> {
    let config_path = solkit_config_path()?;
    if config_path.exists() {
        println!("\n{}", style("⚠ Config file already exists!").yellow().bold());
        println!("{}", style(format!("Location: {}", config_path.display())).cyan());
        println!("{}", style("Use the 'Edit' option to modify your existing config.").cyan());
        return Ok(SolkitConfig::load_from_path(&config_path)?);
    }

    println!("\n{}", style("Generate New Config").green().bold());

    let mut config = SolkitConfig::default();
    if !prompt_confirmation("Use default config? (Devnet, Confirmed commitment)", true) {
        config.cluster = prompt_cluster();
        config.commitment_level = prompt_commitment();
    }
    config.keypair_path = prompt_keypair_path(&config.keypair_path);

    write_config(&config)?;
    Ok(config)
}

fn edit_config(mut config: SolkitConfig) -> SolkitConfig {
    println!("\n{}", style("Edit Config").green().bold());

    println!("{} {}", style("Current cluster:").cyan(), config.cluster);
    config.cluster = prompt_cluster();

    println!("{} {}", style("Current commitment:").cyan(), config.commitment_level);
    config.commitment_level = prompt_commitment();

    if prompt_confirmation("Use a custom RPC URL?", config.rpc_url.is_some()) {
        let url: String = prompt_input_with_default("Enter RPC URL:", config.cluster.rpc_url());
        config.rpc_url = Some(url);
    } else {
        config.rpc_url = None;
    }

    if prompt_confirmation("Edit keypair path?", false) {
        config.keypair_path = prompt_keypair_path(&config.keypair_path);
    }

    config
}
