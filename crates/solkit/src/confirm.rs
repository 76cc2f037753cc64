//! Waiting for a submitted signature to reach a commitment level, bounded by
//! a wall-clock timer.

use {
    crate::{
        constants::{CONFIRMATION_POLL_INTERVAL, CONFIRMATION_TIMEOUT},
        error::{SolkitError, SolkitResult},
    },
    solana_commitment_config::CommitmentConfig,
    solana_rpc_client::nonblocking::rpc_client::RpcClient,
    solana_signature::Signature,
    std::{future::Future, time::Duration},
    tokio::time::sleep,
    tracing::{debug, warn},
};

/// Races `wait` against a timer of `limit`. Whichever finishes first decides
/// the outcome; a losing `wait` is dropped, not cancelled on the remote side.
pub async fn race_with_timeout<F, T>(wait: F, limit: Duration, timeout_msg: &str) -> SolkitResult<T>
where
    F: Future<Output = SolkitResult<T>>,
{
    tokio::select! {
        res = wait => res,
        _ = sleep(limit) => {
            warn!(?limit, "{timeout_msg}");
            Err(SolkitError::Timeout(timeout_msg.to_string()))
        }
    }
}

/// [`race_with_timeout`] with the fixed confirmation bound.
pub async fn with_confirmation_timeout<F, T>(wait: F, timeout_msg: &str) -> SolkitResult<T>
where
    F: Future<Output = SolkitResult<T>>,
{
    race_with_timeout(wait, CONFIRMATION_TIMEOUT, timeout_msg).await
}

/// Polls the status of `signature` until it lands at `commitment`, fails, or
/// its blockhash is no longer valid.
pub async fn wait_for_commitment(
    rpc: &RpcClient,
    signature: &Signature,
    last_valid_block_height: u64,
    commitment: CommitmentConfig,
) -> SolkitResult<()> {
    loop {
        match rpc
            .get_signature_status_with_commitment(signature, commitment)
            .await?
        {
            Some(Ok(())) => {
                debug!(%signature, commitment = %commitment.commitment, "signature reached commitment");
                return Ok(());
            }
            Some(Err(err)) => {
                return Err(SolkitError::TransactionFailed {
                    signature: *signature,
                    reason: err.to_string(),
                });
            }
            None => {}
        }

        let block_height = rpc.get_block_height().await?;
        if block_height > last_valid_block_height {
            return Err(SolkitError::BlockhashExpired(*signature));
        }

        sleep(CONFIRMATION_POLL_INTERVAL).await;
    }
}
