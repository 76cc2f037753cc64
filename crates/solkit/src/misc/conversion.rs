use crate::{
    constants::{LAMPORTS_PER_SOL, MAX_TOKEN_DECIMALS, SOL_DECIMALS},
    error::{SolkitError, SolkitResult},
};

/// Exact SOL to lamports conversion. Digits past the ninth decimal are
/// truncated, so sub-lamport amounts come back as `0`.
pub fn sol_to_lamports(sol: f64) -> SolkitResult<u64> {
    ui_amount_to_minor_units(sol, SOL_DECIMALS)
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Converts a display amount into integer minor units for a token with
/// `decimals` places. Digits past `decimals` are truncated.
///
/// Works on the shortest decimal rendering of `amount` so that values like
/// `0.3` with 9 decimals yield exactly `300_000_000` instead of going through
/// a lossy float multiplication.
pub fn ui_amount_to_minor_units(amount: f64, decimals: u8) -> SolkitResult<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SolkitError::validation(format!(
            "Amount must be a non-negative finite number, got {amount}"
        )));
    }
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(SolkitError::validation(format!(
            "Decimals must be at most {MAX_TOKEN_DECIMALS}, got {decimals}"
        )));
    }

    let rendered = amount.to_string();
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let scale = 10u128.pow(u32::from(decimals));
    let whole: u128 = whole
        .parse()
        .map_err(|_| SolkitError::validation(format!("Amount too large: {amount}")))?;

    let mut fraction_digits: String = fraction.chars().take(usize::from(decimals)).collect();
    while fraction_digits.len() < usize::from(decimals) {
        fraction_digits.push('0');
    }
    let fraction: u128 = if fraction_digits.is_empty() {
        0
    } else {
        fraction_digits
            .parse()
            .map_err(|_| SolkitError::validation(format!("Invalid amount: {amount}")))?
    };

    whole
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction))
        .and_then(|units| u64::try_from(units).ok())
        .ok_or_else(|| {
            SolkitError::validation(format!(
                "Amount too large: {amount} with {decimals} decimals would overflow"
            ))
        })
}

pub fn minor_units_to_ui_amount(units: u64, decimals: u8) -> f64 {
    units as f64 / 10f64.powi(i32::from(decimals))
}
