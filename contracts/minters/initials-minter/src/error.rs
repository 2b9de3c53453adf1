use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use minter_types::collection_details::CollectionDetailsError;
use minter_types::config::ConfigurationError;
use minter_types::token_details::TokenDetailsError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error(transparent)]
    TokenDetailsError(#[from] TokenDetailsError),

    #[error(transparent)]
    CollectionDetailsError(#[from] CollectionDetailsError),

    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Overflow error")]
    OverflowError {},

    #[error("Invalid creation fee")]
    InvalidCreationFee { expected: Uint128, sent: Uint128 },

    #[error("MaxMinted")]
    MaxMinted {},

    #[error("AlreadyFreeMinted")]
    AlreadyFreeMinted {},

    #[error("MissingProof")]
    MissingProof {},

    #[error("InvalidProof")]
    InvalidProof {},

    #[error("Insufficient payment, expected at least {expected}, sent {sent}")]
    InsufficientPayment { expected: Uint128, sent: Uint128 },

    #[error("Mint quantity must be greater than zero")]
    InvalidMintQuantity {},

    #[error("Free mint is limited to a single token")]
    InvalidFreeMintQuantity {},

    #[error("Random mint is limited to {limit} tokens per call")]
    RandomMintLimitExceeded { limit: u32 },

    #[error("Token id is not minted")]
    TokenNotMinted {},

    #[error("Cannot migrate from {previous_contract} to {new_contract}")]
    InvalidMigrationContract {
        previous_contract: String,
        new_contract: String,
    },

    #[error("Cannot migrate from newer version {previous_version} to {new_version}")]
    InvalidMigrationVersion {
        previous_version: String,
        new_version: String,
    },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}

impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::OverflowError {}
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        ContractError::Std(StdError::generic_err(err.to_string()))
    }
}
