use {
    crate::{
        cluster::Cluster,
        config::SolkitConfig,
        error::{SolkitError, SolkitResult},
        misc::helpers::read_keypair_from_path,
    },
    solana_commitment_config::CommitmentLevel,
    solana_keypair::{Keypair, Signer},
    solana_pubkey::Pubkey,
    std::path::Path,
};

/// Everything an interactive session needs: the loaded config and the
/// signing keypair it points at.
pub struct SolkitContext {
    config: SolkitConfig,
    keypair: Keypair,
    pubkey: Pubkey,
}

impl SolkitContext {
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    pub fn pubkey(&self) -> &Pubkey {
        &self.pubkey
    }

    pub fn cluster(&self) -> Cluster {
        self.config.cluster
    }

    pub fn commitment(&self) -> CommitmentLevel {
        self.config.commitment_level
    }

    pub fn rpc_url(&self) -> Option<String> {
        self.config.rpc_url.clone()
    }

    pub fn config(&self) -> &SolkitConfig {
        &self.config
    }

    /// Switches to `new_config` and writes it to `path`. Nothing is written
    /// and the current context is kept when the keypair cannot be read.
    pub fn apply_and_save(&mut self, new_config: SolkitConfig, path: &Path) -> SolkitResult<()> {
        let next = Self::try_from(new_config)?;
        next.config.save_to_path(path)?;
        *self = next;
        Ok(())
    }
}

impl TryFrom<SolkitConfig> for SolkitContext {
    type Error = SolkitError;

    fn try_from(config: SolkitConfig) -> Result<Self, Self::Error> {
        let keypair = read_keypair_from_path(&config.keypair_path)?;
        let pubkey = keypair.pubkey();

        Ok(Self {
            config,
            keypair,
            pubkey,
        })
    }
}
