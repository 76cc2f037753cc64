/// Integration tests for configuration loading and parsing
use solana_commitment_config::CommitmentLevel;
use solana_keypair::{EncodableKey, Keypair, Signer};
use solkit::{
    Cluster,
    config::{SolkitConfig, expand_tilde},
    context::SolkitContext,
    error::SolkitError,
};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join("solkit.toml");
    fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

// ============================================================================
// Tests for expand_tilde function
// ============================================================================

#[test]
fn test_expand_tilde_with_path() {
    let Some(home) = dirs::home_dir() else {
        eprintln!("Skipping test: HOME not set");
        return;
    };
    let expanded = expand_tilde("~/.config/solana/id.json");
    assert_eq!(expanded, home.join(".config/solana/id.json"));
}

#[test]
fn test_expand_tilde_leaves_other_paths_alone() {
    for path in ["~", "/etc/config.toml", "./config.toml", "/home/user~/file.txt", ""] {
        assert_eq!(expand_tilde(path), PathBuf::from(path), "{path:?} should not change");
    }
}

// ============================================================================
// Tests for SolkitConfig loading
// ============================================================================

#[test]
fn test_load_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "testnet"
keypair-path = "/tmp/id.json"
commitment-level = "finalized"
"#,
    );

    let config = SolkitConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.cluster, Cluster::Testnet);
    assert_eq!(config.commitment_level, CommitmentLevel::Finalized);
    assert_eq!(config.keypair_path, PathBuf::from("/tmp/id.json"));
    assert_eq!(config.rpc_url, None);
    assert_eq!(config.effective_rpc_url(), "https://api.testnet.solana.com");
}

#[test]
fn test_load_config_with_rpc_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "localnet"
keypair-path = "/tmp/id.json"
commitment-level = "confirmed"
rpc-url = "http://localhost:8999"
"#,
    );

    let config = SolkitConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.effective_rpc_url(), "http://localhost:8999");
}

#[test]
fn test_load_config_all_clusters() {
    let cases = [
        ("mainnet-beta", Cluster::MainnetBeta),
        ("testnet", Cluster::Testnet),
        ("devnet", Cluster::Devnet),
        ("localnet", Cluster::Localnet),
    ];

    for (name, expected) in cases {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = write_config(
            &temp_dir,
            &format!(
                r#"
cluster = "{name}"
keypair-path = "/tmp/id.json"
commitment-level = "confirmed"
"#
            ),
        );

        let config = SolkitConfig::load_from_path(&config_path)
            .unwrap_or_else(|_| panic!("Failed to load config with cluster: {name}"));
        assert_eq!(config.cluster, expected);
    }
}

#[test]
fn test_load_config_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("nonexistent.toml");

    match SolkitConfig::load_from_path(&config_path) {
        Err(SolkitError::ConfigPathDoesntExists) => {}
        other => panic!("Expected ConfigPathDoesntExists error, got {other:?}"),
    }
}

#[test]
fn test_load_config_malformed_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "devnet
keypair-path = "/tmp/id.json"
commitment-level = "confirmed"
"#,
    );

    match SolkitConfig::load_from_path(&config_path) {
        Err(SolkitError::TomlParseError(_)) => {}
        other => panic!("Expected TomlParseError, got {other:?}"),
    }
}

#[test]
fn test_load_config_unknown_cluster() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "moonnet"
keypair-path = "/tmp/id.json"
commitment-level = "confirmed"
"#,
    );

    assert!(SolkitConfig::load_from_path(&config_path).is_err());
}

#[test]
fn test_load_config_missing_required_field() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "devnet"
keypair-path = "/tmp/id.json"
"#,
    );

    assert!(
        SolkitConfig::load_from_path(&config_path).is_err(),
        "Loading config with missing commitment-level should fail"
    );
}

#[test]
fn test_config_keypair_path_tilde_expansion() {
    let Some(home_dir) = dirs::home_dir() else {
        eprintln!("Skipping test: HOME not set");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
cluster = "devnet"
keypair-path = "~/my/custom/keypair.json"
commitment-level = "finalized"
"#,
    );

    let config = SolkitConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.keypair_path, home_dir.join("my/custom/keypair.json"));
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("nested/dir/solkit.toml");

    let config = SolkitConfig {
        cluster: Cluster::Localnet,
        commitment_level: CommitmentLevel::Processed,
        keypair_path: PathBuf::from("/tmp/payer.json"),
        rpc_url: Some("http://127.0.0.1:8899".to_string()),
    };
    config.save_to_path(&config_path).expect("Failed to save config");

    let loaded = SolkitConfig::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_default_config() {
    let config = SolkitConfig::default();
    assert_eq!(config.cluster, Cluster::Devnet);
    assert_eq!(config.commitment_level, CommitmentLevel::Confirmed);
    assert!(config.keypair_path.ends_with(".config/solana/id.json"));
    assert_eq!(config.effective_rpc_url(), "https://api.devnet.solana.com");
}

// ============================================================================
// Tests for SolkitContext::apply_and_save
// ============================================================================

fn context_in(dir: &TempDir) -> (SolkitContext, PathBuf) {
    let keypair_path = dir.path().join("id.json");
    Keypair::new()
        .write_to_file(&keypair_path)
        .expect("Failed to write keypair");

    let config = SolkitConfig {
        keypair_path,
        ..SolkitConfig::default()
    };
    let config_path = dir.path().join("solkit.toml");
    config.save_to_path(&config_path).expect("Failed to save config");

    let ctx = SolkitContext::try_from(config).expect("Failed to build context");
    (ctx, config_path)
}

#[test]
fn test_apply_and_save_switches_keypair_and_writes_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (mut ctx, config_path) = context_in(&dir);

    let other_path = dir.path().join("other.json");
    let other = Keypair::new();
    other.write_to_file(&other_path).expect("Failed to write keypair");

    let new_config = SolkitConfig {
        cluster: Cluster::Testnet,
        keypair_path: other_path,
        ..ctx.config().clone()
    };
    ctx.apply_and_save(new_config.clone(), &config_path)
        .expect("apply_and_save should succeed");

    assert_eq!(*ctx.pubkey(), other.pubkey());
    assert_eq!(ctx.cluster(), Cluster::Testnet);
    assert_eq!(SolkitConfig::load_from_path(&config_path).unwrap(), new_config);
}

#[test]
fn test_apply_and_save_keeps_file_when_keypair_is_invalid() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (mut ctx, config_path) = context_in(&dir);
    let before = fs::read_to_string(&config_path).unwrap();
    let original_pubkey = *ctx.pubkey();

    let bad_keypair = dir.path().join("not-a-keypair.json");
    fs::write(&bad_keypair, "not a keypair").unwrap();

    let new_config = SolkitConfig {
        cluster: Cluster::Testnet,
        keypair_path: bad_keypair,
        ..ctx.config().clone()
    };
    let res = ctx.apply_and_save(new_config, &config_path);

    assert!(
        matches!(res, Err(SolkitError::Keypair(_))),
        "Expected Keypair error, got {res:?}"
    );
    assert_eq!(fs::read_to_string(&config_path).unwrap(), before);
    assert_eq!(*ctx.pubkey(), original_pubkey);
    assert_eq!(ctx.cluster(), Cluster::Devnet);
}
