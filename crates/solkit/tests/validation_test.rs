/// Every operation must reject bad input before touching the network. The
/// params point at an unroutable endpoint so a stray RPC call would surface
/// as an `Rpc` error instead of a validation failure.
use solana_keypair::{Keypair, Signer};
use solkit::{
    AirdropParams, Cluster, CreateTokenParams, ManagedTokenParams, ShowBalanceParams, SolkitError,
    TokenMetadata, TransferParams, airdrop, create_and_manage_spl_token, create_and_transfer_token,
    show_balance, transfer,
};

const DEAD_RPC: &str = "http://127.0.0.1:1";

fn metadata() -> TokenMetadata {
    TokenMetadata {
        name: "Solkit Test".to_string(),
        symbol: "SKT".to_string(),
        uri: "https://example.com/skt.json".to_string(),
    }
}

fn assert_validation<T: std::fmt::Debug>(res: Result<T, SolkitError>, expected_msg: &str) {
    match res {
        Err(SolkitError::Validation(msg)) => assert_eq!(msg, expected_msg),
        other => panic!("Expected Validation({expected_msg:?}), got {other:?}"),
    }
}

#[tokio::test]
async fn test_airdrop_empty_address() {
    let res = airdrop(AirdropParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..AirdropParams::new("", 1.0)
    })
    .await;
    assert_validation(res, "Address string is required.");
}

#[tokio::test]
async fn test_airdrop_non_positive_amount() {
    let address = Keypair::new().pubkey().to_string();
    for amount in [0.0, -1.0] {
        let res = airdrop(AirdropParams {
            rpc_url: Some(DEAD_RPC.to_string()),
            ..AirdropParams::new(address.clone(), amount)
        })
        .await;
        assert_validation(res, "Airdrop amount must be greater than 0.");
    }
}

#[tokio::test]
async fn test_airdrop_mainnet_always_fails() {
    let address = Keypair::new().pubkey().to_string();
    for amount in [0.5, 1.0, 50.0, 500.0] {
        let res = airdrop(AirdropParams {
            cluster: Cluster::MainnetBeta,
            rpc_url: Some(DEAD_RPC.to_string()),
            ..AirdropParams::new(address.clone(), amount)
        })
        .await;
        assert!(
            matches!(res, Err(SolkitError::Validation(_))),
            "mainnet airdrop of {amount} should be rejected, got {res:?}"
        );
    }
}

#[tokio::test]
async fn test_airdrop_devnet_over_limit_fails() {
    let res = airdrop(AirdropParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..AirdropParams::new(Keypair::new().pubkey().to_string(), 100.01)
    })
    .await;
    assert_validation(res, "Airdrop amount exceeds typical devnet limit of 100 SOL");
}

#[tokio::test]
async fn test_airdrop_invalid_address() {
    let res = airdrop(AirdropParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..AirdropParams::new("definitely-not-base58!", 1.0)
    })
    .await;
    assert!(matches!(res, Err(SolkitError::InvalidAddress(_))), "got {res:?}");
}

#[tokio::test]
async fn test_show_balance_empty_address() {
    let res = show_balance(ShowBalanceParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ShowBalanceParams::new("  ")
    })
    .await;
    assert_validation(res, "Public key string is required.");
}

#[tokio::test]
async fn test_show_balance_invalid_address() {
    let res = show_balance(ShowBalanceParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ShowBalanceParams::new("0OIl")
    })
    .await;
    let err = res.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().starts_with("Invalid public key address provided"));
}

#[tokio::test]
async fn test_sub_lamport_amounts_are_rejected() {
    let keypair = Keypair::new();
    let address = Keypair::new().pubkey().to_string();

    let res = airdrop(AirdropParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..AirdropParams::new(address.clone(), 1e-10)
    })
    .await;
    assert_validation(res, "Amount 0.0000000001 is below the smallest transferable unit");

    let res = transfer(TransferParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..TransferParams::new(&keypair, address, 1e-10)
    })
    .await;
    assert_validation(res, "Amount 0.0000000001 is below the smallest transferable unit");
}

#[tokio::test]
async fn test_transfer_validation() {
    let keypair = Keypair::new();

    let res = transfer(TransferParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..TransferParams::new(&keypair, "", 1.0)
    })
    .await;
    assert_validation(res, "Recipient address is required");

    let res = transfer(TransferParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..TransferParams::new(&keypair, Keypair::new().pubkey().to_string(), 0.0)
    })
    .await;
    assert_validation(res, "Amount must be greater than 0");
}

#[tokio::test]
async fn test_create_and_transfer_token_validation() {
    let wallet = Keypair::new();
    let recipient = Keypair::new().pubkey().to_string();

    let res = create_and_transfer_token(CreateTokenParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..CreateTokenParams::new(&wallet, "", 1.0)
    })
    .await;
    assert_validation(res, "Recipient address is required");

    let res = create_and_transfer_token(CreateTokenParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..CreateTokenParams::new(&wallet, recipient.clone(), -2.0)
    })
    .await;
    assert_validation(res, "Amount must be greater than 0");

    let res = create_and_transfer_token(CreateTokenParams {
        decimals: 20,
        rpc_url: Some(DEAD_RPC.to_string()),
        ..CreateTokenParams::new(&wallet, recipient, 1.0)
    })
    .await;
    assert!(matches!(res, Err(SolkitError::Validation(_))));
}

#[tokio::test]
async fn test_create_and_manage_spl_token_validation() {
    let wallet = Keypair::new();

    let res = create_and_manage_spl_token(ManagedTokenParams {
        amount_to_mint: 0.0,
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ManagedTokenParams::new(&wallet, metadata())
    })
    .await;
    assert_validation(res, "Amounts must be greater than 0");

    let res = create_and_manage_spl_token(ManagedTokenParams {
        amount_to_transfer: -1.0,
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ManagedTokenParams::new(&wallet, metadata())
    })
    .await;
    assert_validation(res, "Amounts must be greater than 0");

    let res = create_and_manage_spl_token(ManagedTokenParams {
        recipient_address: Some("bogus".to_string()),
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ManagedTokenParams::new(&wallet, metadata())
    })
    .await;
    assert!(matches!(res, Err(SolkitError::InvalidAddress(_))));

    let mut long_symbol = metadata();
    long_symbol.symbol = "WAYTOOLONGSYMBOL".to_string();
    let res = create_and_manage_spl_token(ManagedTokenParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ManagedTokenParams::new(&wallet, long_symbol)
    })
    .await;
    assert!(matches!(res, Err(SolkitError::Validation(_))));
}

#[tokio::test]
async fn test_valid_input_reaches_the_network() {
    // Sanity check for the tests above: well-formed input gets past
    // validation and fails on the unroutable endpoint instead.
    let res = show_balance(ShowBalanceParams {
        rpc_url: Some(DEAD_RPC.to_string()),
        ..ShowBalanceParams::new(Keypair::new().pubkey().to_string())
    })
    .await;
    assert!(matches!(res, Err(SolkitError::Rpc(_))), "got {res:?}");
}
