use {
    console::style,
    solkit::{
        commands::{CommandExec, config::generate_config},
        config::{SolkitConfig, solkit_config_path},
        context::SolkitContext,
        logging::init_tracing,
        prompt::prompt_main_section,
    },
};

fn initialize_config() -> anyhow::Result<SolkitConfig> {
    let config_path = solkit_config_path()?;
    if !config_path.exists() {
        println!("\n{}", style("⚠ No configuration file found!").yellow().bold());
        println!(
            "{}",
            style(format!("Expected location: {}", config_path.display())).cyan()
        );
        println!(
            "{}",
            style("Let's generate a configuration file to get started.\n").cyan()
        );

        let config = generate_config()?;

        println!(
            "\n{}",
            style("✓ Configuration complete! Starting solkit...\n").green().bold()
        );
        return Ok(config);
    }

    Ok(SolkitConfig::load()?)
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<CommandExec<()>> {
    init_tracing();

    println!("{}", style("⚡ solkit: Solana quick actions").bold().cyan());

    let config = initialize_config()?;
    let mut ctx = SolkitContext::try_from(config)?;

    loop {
        let command = prompt_main_section()?;

        match command.process_command(&mut ctx).await? {
            CommandExec::Process(_) | CommandExec::GoBack => continue,
            CommandExec::Exit => break,
        }
    }

    Ok(CommandExec::Exit)
}
