use {
    crate::{
        cluster::Cluster,
        constants::{DEFAULT_KEYPAIR_RELATIVE_PATH, SOLKIT_CONFIG_ENV, SOLKIT_CONFIG_RELATIVE_PATH},
        error::{SolkitError, SolkitResult},
    },
    serde::{Deserialize, Serialize},
    solana_commitment_config::CommitmentLevel,
    std::{env, fs, path::{Path, PathBuf}},
    tracing::debug,
};

/// `$SOLKIT_CONFIG` when set, otherwise `~/.config/solkit.toml`.
pub fn solkit_config_path() -> SolkitResult<PathBuf> {
    if let Some(path) = env::var_os(SOLKIT_CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let mut path = dirs::home_dir().ok_or(SolkitError::HomeDirectoryNotFound)?;
    path.push(SOLKIT_CONFIG_RELATIVE_PATH);
    Ok(path)
}

/// Expands a leading `~/` to the home directory. Anything else is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SolkitConfig {
    pub cluster: Cluster,
    pub commitment_level: CommitmentLevel,
    pub keypair_path: PathBuf,
    /// Replaces the well-known endpoint of `cluster` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl Default for SolkitConfig {
    fn default() -> Self {
        let keypair_path = dirs::home_dir()
            .map(|home| home.join(DEFAULT_KEYPAIR_RELATIVE_PATH))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYPAIR_RELATIVE_PATH));

        Self {
            cluster: Cluster::Devnet,
            commitment_level: CommitmentLevel::Confirmed,
            keypair_path,
            rpc_url: None,
        }
    }
}

impl SolkitConfig {
    pub fn load() -> SolkitResult<SolkitConfig> {
        Self::load_from_path(&solkit_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> SolkitResult<SolkitConfig> {
        if !path.exists() {
            return Err(SolkitError::ConfigPathDoesntExists);
        }
        debug!(path = %path.display(), "loading config");
        let data = fs::read_to_string(path)?;
        let mut config: SolkitConfig = toml::from_str(&data)?;
        config.keypair_path = expand_tilde(&config.keypair_path.to_string_lossy());
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> SolkitResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn save(&self) -> SolkitResult<PathBuf> {
        let path = solkit_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Endpoint the operations will talk to.
    pub fn effective_rpc_url(&self) -> &str {
        self.rpc_url.as_deref().unwrap_or(self.cluster.rpc_url())
    }
}
