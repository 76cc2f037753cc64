use {
    solana_rpc_client_api::client_error::Error as ClientError,
    solana_signature::Signature,
    thiserror::Error,
};

pub type SolkitResult<T> = Result<T, SolkitError>;

#[derive(Debug, Error)]
pub enum SolkitError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid public key address provided: {0}")]
    InvalidAddress(String),
    #[error("RPC request failed: {0}")]
    Rpc(#[from] ClientError),
    #[error("{0}")]
    Timeout(String),
    #[error("Transaction {signature} failed: {reason}")]
    TransactionFailed { signature: Signature, reason: String },
    #[error("Blockhash expired before transaction {0} was finalized")]
    BlockhashExpired(Signature),
    #[error("Failed to sign transaction: {0}")]
    Signing(String),
    #[error("Failed to build instruction: {0}")]
    Instruction(String),
    #[error("Failed to read keypair: {0}")]
    Keypair(String),
    #[error("Solkit config path doesnt exists")]
    ConfigPathDoesntExists,
    #[error("Could not determine home directory. Please set the HOME environment variable.")]
    HomeDirectoryNotFound,
    #[error("Io error")]
    IoError(#[from] std::io::Error),
    #[error("Toml Parse error")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Toml Serialize error")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl SolkitError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SolkitError::Validation(msg.into())
    }

    /// True for failures raised before any network call is attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SolkitError::Validation(_) | SolkitError::InvalidAddress(_)
        )
    }
}
