//! Metaplex Token Metadata `CreateMetadataAccountV3` instruction, encoded by
//! hand with borsh so the rest of the crate stays on the plain SPL interfaces.

use {
    crate::{
        constants::{
            MAX_METADATA_NAME_LEN, MAX_METADATA_SYMBOL_LEN, MAX_METADATA_URI_LEN, METADATA_PROGRAM_ID,
            METADATA_SEED_PREFIX,
        },
        error::{SolkitError, SolkitResult},
    },
    borsh::BorshSerialize,
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
    solana_sdk_ids::{system_program, sysvar},
};

pub const CREATE_METADATA_ACCOUNT_V3: u8 = 33;

pub fn metadata_program_id() -> Pubkey {
    Pubkey::from_str_const(METADATA_PROGRAM_ID)
}

/// Metadata PDA for `mint`: seeds `["metadata", program_id, mint]`.
pub fn find_metadata_address(mint: &Pubkey) -> Pubkey {
    let program_id = metadata_program_id();
    let (address, _bump) = Pubkey::find_program_address(
        &[
            METADATA_SEED_PREFIX.as_bytes(),
            program_id.as_ref(),
            mint.as_ref(),
        ],
        &program_id,
    );
    address
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub struct Creator {
    pub address: [u8; 32],
    pub verified: bool,
    pub share: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub struct Collection {
    pub verified: bool,
    pub key: [u8; 32],
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub struct DataV2 {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
}

impl DataV2 {
    /// Fungible metadata with no royalties, creators, collection or uses.
    pub fn fungible(name: &str, symbol: &str, uri: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        }
    }

    pub fn validate(&self) -> SolkitResult<()> {
        let checks = [
            ("name", self.name.len(), MAX_METADATA_NAME_LEN),
            ("symbol", self.symbol.len(), MAX_METADATA_SYMBOL_LEN),
            ("uri", self.uri.len(), MAX_METADATA_URI_LEN),
        ];
        for (field, len, max) in checks {
            if len > max {
                return Err(SolkitError::validation(format!(
                    "Token metadata {field} is {len} bytes, max is {max}"
                )));
            }
        }
        if self.name.trim().is_empty() {
            return Err(SolkitError::validation("Token metadata name is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
pub enum CollectionDetails {
    V1 { size: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize)]
struct CreateMetadataAccountV3Args {
    data: DataV2,
    is_mutable: bool,
    collection_details: Option<CollectionDetails>,
}

pub struct CreateMetadataAccounts {
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub payer: Pubkey,
    pub update_authority: Pubkey,
}

pub fn create_metadata_account_v3(
    accounts: &CreateMetadataAccounts,
    data: DataV2,
    is_mutable: bool,
) -> SolkitResult<Instruction> {
    data.validate()?;

    let args = CreateMetadataAccountV3Args {
        data,
        is_mutable,
        collection_details: None,
    };
    let mut instruction_data = vec![CREATE_METADATA_ACCOUNT_V3];
    args.serialize(&mut instruction_data)
        .map_err(|e| SolkitError::Instruction(format!("metadata encoding: {e}")))?;

    Ok(Instruction {
        program_id: metadata_program_id(),
        accounts: vec![
            AccountMeta::new(find_metadata_address(&accounts.mint), false),
            AccountMeta::new_readonly(accounts.mint, false),
            AccountMeta::new_readonly(accounts.mint_authority, true),
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(accounts.update_authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: instruction_data,
    })
}
