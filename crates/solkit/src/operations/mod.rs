pub mod airdrop;
pub mod balance;
pub mod metadata;
pub mod token;
pub mod token_metadata;
pub mod transfer;

pub use {
    airdrop::{AirdropParams, airdrop},
    balance::{ShowBalanceParams, show_balance},
    token::{CreateTokenParams, TokenTransferResult, create_and_transfer_token},
    token_metadata::{
        ManagedTokenLinks, ManagedTokenParams, ManagedTokenResult, TokenMetadata,
        create_and_manage_spl_token,
    },
    transfer::{TransferParams, transfer},
};
