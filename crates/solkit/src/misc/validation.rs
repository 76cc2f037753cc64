use crate::{
    cluster::Cluster,
    constants::{DEVNET_AIRDROP_LIMIT_SOL, MAX_TOKEN_DECIMALS},
    error::{SolkitError, SolkitResult},
};

/// Fails with `msg` when `address` is empty or whitespace.
pub fn ensure_address(address: &str, msg: &str) -> SolkitResult<()> {
    if address.trim().is_empty() {
        return Err(SolkitError::validation(msg));
    }
    Ok(())
}

pub fn ensure_positive_amount(amount: f64, msg: &str) -> SolkitResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SolkitError::validation(msg));
    }
    Ok(())
}

/// Fails when a positive display amount rounds down to zero minor units.
pub fn ensure_nonzero_units(units: u64, amount: f64) -> SolkitResult<()> {
    if units == 0 {
        return Err(SolkitError::validation(format!(
            "Amount {amount} is below the smallest transferable unit"
        )));
    }
    Ok(())
}

pub fn ensure_decimals(decimals: u8) -> SolkitResult<()> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(SolkitError::validation(format!(
            "Decimals must be between 0 and {MAX_TOKEN_DECIMALS}, got {decimals}"
        )));
    }
    Ok(())
}

pub fn ensure_airdrop_allowed(cluster: Cluster, amount: f64) -> SolkitResult<()> {
    match cluster {
        Cluster::MainnetBeta => Err(SolkitError::validation(
            "Airdrops are not available on Mainnet Beta. Use devnet, testnet or localnet.",
        )),
        Cluster::Devnet if amount > DEVNET_AIRDROP_LIMIT_SOL => Err(SolkitError::validation(
            format!("Airdrop amount exceeds typical devnet limit of {DEVNET_AIRDROP_LIMIT_SOL} SOL"),
        )),
        _ => Ok(()),
    }
}
