use cosmwasm_std::{coin, Decimal, HexBinary};
use initials_minter::msg::{InitialsInit, InstantiateMsg};
use merkle_allowlist::MerkleTree;
use minter_types::collection_details::CollectionDetails;
use minter_types::token_details::TokenDetails;

pub const MAX_SUPPLY: u32 = 30;
pub const MINT_PRICE: u128 = 250_000;
pub const RANDOM_MINT_PRICE: u128 = 50_000;
pub const BASE_URI: &str = "ipfs://initials/";

pub fn whitelist_tree() -> MerkleTree {
    MerkleTree::from_identities(["collector", "whitelisted"])
}

pub fn free_mint_tree() -> MerkleTree {
    MerkleTree::from_identities(["free_minter", "other_free_minter"])
}

pub fn whitelist_proof(identity: &str) -> Vec<HexBinary> {
    whitelist_tree().hex_proof_for(identity).unwrap()
}

pub fn free_mint_proof(identity: &str) -> Vec<HexBinary> {
    free_mint_tree().hex_proof_for(identity).unwrap()
}

pub fn return_collection_details() -> CollectionDetails {
    CollectionDetails {
        collection_name: "Initials".to_string(),
        symbol: "INIT".to_string(),
        id: "initials".to_string(),
        description: Some("description".to_string()),
        preview_uri: Some("preview_uri".to_string()),
        schema: Some("schema".to_string()),
        uri: Some("uri".to_string()),
        uri_hash: Some("uri_hash".to_string()),
        data: Some("data".to_string()),
    }
}

pub fn return_token_details() -> TokenDetails {
    TokenDetails {
        token_name: "Initial".to_string(),
        data: None,
        description: Some("description".to_string()),
        transferable: true,
        extensible: true,
        nsfw: false,
        royalty_ratio: Decimal::percent(10),
        preview_uri: None,
    }
}

pub fn return_minter_instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        collection_details: return_collection_details(),
        token_details: return_token_details(),
        init: InitialsInit {
            admin: None,
            treasury: "treasury".to_string(),
            whitelist_root: whitelist_tree().hex_root(),
            free_mint_root: free_mint_tree().hex_root(),
            base_uri: BASE_URI.to_string(),
            max_supply: MAX_SUPPLY,
            mint_price: coin(MINT_PRICE, "uflix"),
            random_mint_price: coin(RANDOM_MINT_PRICE, "uflix"),
            random_mint_limit: None,
        },
    }
}
