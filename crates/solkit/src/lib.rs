//! Convenience operations over the Solana client SDK.
//!
//! Every operation validates its inputs, opens a connection to the selected
//! [`Cluster`], runs a short sequence of RPC calls and returns the resulting
//! signature, balance or token addresses. Errors are logged and returned to
//! the caller unchanged.

pub mod cluster;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod context;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod misc;
pub mod operations;
pub mod prompt;
pub mod ui;

pub use {
    cluster::{Cluster, get_connection},
    error::{SolkitError, SolkitResult},
    operations::{
        AirdropParams, CreateTokenParams, ManagedTokenParams, ManagedTokenResult, ShowBalanceParams,
        TokenMetadata, TokenTransferResult, TransferParams, airdrop, create_and_manage_spl_token,
        create_and_transfer_token, show_balance, transfer,
    },
};
