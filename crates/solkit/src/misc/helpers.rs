use {
    crate::error::{SolkitError, SolkitResult},
    solana_instruction::Instruction,
    solana_keypair::{EncodableKey, Keypair, Signer},
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_rpc_client::nonblocking::rpc_client::RpcClient,
    solana_signature::Signature,
    solana_transaction::Transaction,
    std::{path::Path, str::FromStr},
};

/// Parses a base58 address, rejecting anything that is not a valid public key.
pub fn to_pubkey(address: &str) -> SolkitResult<Pubkey> {
    Pubkey::from_str(address.trim()).map_err(|_| SolkitError::InvalidAddress(address.to_string()))
}

pub fn read_keypair_from_path<P: AsRef<Path>>(path: P) -> SolkitResult<Keypair> {
    let path = path.as_ref();
    Keypair::read_from_file(path)
        .map_err(|e| SolkitError::Keypair(format!("{}: {}", path.display(), e)))
}

/// Signs `instructions` with `signers` (first signer pays) against a fresh
/// blockhash. The transaction is returned unsent.
pub async fn build_signed_tx(
    rpc: &RpcClient,
    payer: &Pubkey,
    instructions: &[Instruction],
    signers: &[&dyn Signer],
) -> SolkitResult<Transaction> {
    let recent_blockhash = rpc.get_latest_blockhash().await?;
    let message = Message::new(instructions, Some(payer));
    let mut tx = Transaction::new_unsigned(message);
    tx.try_sign(&signers.to_vec(), recent_blockhash)
        .map_err(|e| SolkitError::Signing(e.to_string()))?;

    Ok(tx)
}

pub async fn build_and_send_tx(
    rpc: &RpcClient,
    payer: &Pubkey,
    instructions: &[Instruction],
    signers: &[&dyn Signer],
) -> SolkitResult<Signature> {
    let tx = build_signed_tx(rpc, payer, instructions, signers).await?;
    let signature = rpc.send_and_confirm_transaction(&tx).await?;

    Ok(signature)
}

pub fn short_pubkey(pk: &Pubkey) -> String {
    let s = pk.to_string();
    let prefix = &s[..4];
    let suffix = &s[s.len() - 3..];
    format!("{prefix}...{suffix}")
}
