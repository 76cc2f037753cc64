use {
    crate::{
        context::SolkitContext,
        prompt::{prompt_account_section, prompt_config_section, prompt_token_section},
    },
    console::style,
    std::{
        fmt,
        process::{ExitCode, Termination},
    },
};

pub mod account;
pub mod config;
pub mod token;

pub enum CommandExec<T> {
    Process(T),
    GoBack,
    Exit,
}

impl<T> Termination for CommandExec<T> {
    fn report(self) -> ExitCode {
        println!("{}", style("Goodbye 👋").dim());
        ExitCode::SUCCESS
    }
}

/// Top level menu entries.
#[derive(Debug, Clone, Copy)]
pub enum MainCommand {
    Account,
    Token,
    Config,
    Exit,
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match self {
            MainCommand::Account => "Account",
            MainCommand::Token => "Token",
            MainCommand::Config => "Config",
            MainCommand::Exit => "Exit",
        };
        write!(f, "{command}")
    }
}

impl MainCommand {
    /// Runs the section's sub menu until the user goes back or exits.
    pub async fn process_command(&self, ctx: &mut SolkitContext) -> anyhow::Result<CommandExec<()>> {
        loop {
            let res = match self {
                MainCommand::Account => prompt_account_section()?.process_command(ctx).await?,
                MainCommand::Token => prompt_token_section()?.process_command(ctx).await?,
                MainCommand::Config => prompt_config_section()?.process_command(ctx).await?,
                MainCommand::Exit => return Ok(CommandExec::Exit),
            };

            match res {
                CommandExec::Process(()) => continue,
                CommandExec::GoBack => return Ok(CommandExec::GoBack),
                CommandExec::Exit => return Ok(CommandExec::Exit),
            }
        }
    }
}
