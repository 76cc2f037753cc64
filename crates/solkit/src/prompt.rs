use {
    crate::{
        cluster::Cluster,
        commands::{
            MainCommand, account::AccountCommand, config::ConfigCommand, token::TokenCommand,
        },
        ui::print_error,
    },
    console::style,
    inquire::{Confirm, InquireError, Select, Text},
    solana_commitment_config::CommitmentLevel,
    std::{fmt::Display, process::exit, str::FromStr},
};

pub fn prompt_main_section() -> anyhow::Result<MainCommand> {
    let command = Select::new(
        "Choose a command group:",
        vec![
            MainCommand::Account,
            MainCommand::Token,
            MainCommand::Config,
            MainCommand::Exit,
        ],
    )
    .prompt()?;

    Ok(command)
}

pub fn prompt_account_section() -> anyhow::Result<AccountCommand> {
    let choice = Select::new(
        "Account Command:",
        vec![
            AccountCommand::Balance,
            AccountCommand::Airdrop,
            AccountCommand::Transfer,
            AccountCommand::GoBack,
        ],
    )
    .prompt()?;

    Ok(choice)
}

pub fn prompt_token_section() -> anyhow::Result<TokenCommand> {
    let choice = Select::new(
        "Token Command:",
        vec![
            TokenCommand::CreateAndTransfer,
            TokenCommand::CreateWithMetadata,
            TokenCommand::GoBack,
        ],
    )
    .prompt()?;

    Ok(choice)
}

pub fn prompt_config_section() -> anyhow::Result<ConfigCommand> {
    let choice = Select::new(
        "Config Command:",
        vec![
            ConfigCommand::Show,
            ConfigCommand::Generate,
            ConfigCommand::Edit,
            ConfigCommand::GoBack,
        ],
    )
    .prompt()?;

    Ok(choice)
}

fn is_cancellation(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationInterrupted | InquireError::OperationCanceled
    )
}

fn exit_on_cancel(e: &InquireError) {
    if is_cancellation(e) {
        println!("{}", style("Operation cancelled. Exiting.").yellow().bold());
        exit(0);
    }
}

pub fn prompt_input_data<T>(msg: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let input = match Text::new(msg).prompt() {
            Ok(v) => v,
            Err(e) => {
                exit_on_cancel(&e);
                print_error(format!("Invalid input: {e}. Please try again."));
                continue;
            }
        };

        match input.trim().parse::<T>() {
            Ok(value) => return value,
            Err(e) => print_error(format!("Parse error : {e}. Please try again.")),
        }
    }
}

/// Like [`prompt_input_data`] but an empty answer yields `default`.
pub fn prompt_input_with_default<T>(msg: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let input = match Text::new(msg)
            .with_default(default)
            .with_help_message("Press Enter to use the default")
            .prompt()
        {
            Ok(v) => v,
            Err(e) => {
                exit_on_cancel(&e);
                print_error(format!("Invalid input: {e}. Please try again."));
                continue;
            }
        };

        match input.trim().parse::<T>() {
            Ok(value) => return value,
            Err(e) => print_error(format!("Parse error : {e}. Please try again.")),
        }
    }
}

pub fn prompt_select_data<T>(msg: &str, options: Vec<T>) -> T
where
    T: Display + Clone,
{
    loop {
        match Select::new(msg, options.clone()).prompt() {
            Ok(v) => return v,
            Err(e) => {
                exit_on_cancel(&e);
                print_error(format!("Invalid Choice: {e}. Please try again."));
            }
        }
    }
}

pub fn prompt_cluster() -> Cluster {
    prompt_select_data("Select cluster:", Cluster::ALL.to_vec())
}

pub fn prompt_commitment() -> CommitmentLevel {
    prompt_select_data(
        "Select commitment level:",
        vec![
            CommitmentLevel::Confirmed,
            CommitmentLevel::Finalized,
            CommitmentLevel::Processed,
        ],
    )
}

pub fn prompt_confirmation(msg: &str, default: bool) -> bool {
    loop {
        match Confirm::new(msg).with_default(default).prompt() {
            Ok(answer) => return answer,
            Err(e) => {
                exit_on_cancel(&e);
                print_error(format!("Invalid answer: {e}. Please try again."));
            }
        }
    }
}
