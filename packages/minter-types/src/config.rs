use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, HexBinary};
use merkle_allowlist::{parse_root, AllowlistError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid mint price")]
    InvalidMintPrice {},
    #[error("Mint prices must share a denom")]
    MintPriceDenomMismatch {},
    #[error("Invalid number of tokens")]
    InvalidNumberOfTokens {},
    #[error("Invalid random mint limit")]
    InvalidRandomMintLimit {},
    #[error("Base uri too long")]
    BaseUriTooLong {},
    #[error(transparent)]
    InvalidMerkleRoot(#[from] AllowlistError),
}

#[cw_serde]
pub struct Config {
    // Hard cap on the number of tokens ever issued
    pub max_supply: u32,
    // Per token price of targeted mints
    pub mint_price: Coin,
    // Per token price of random mints
    pub random_mint_price: Coin,
    // Optional ceiling on the quantity of a single random mint
    pub random_mint_limit: Option<u32>,
    pub whitelist_root: HexBinary,
    pub free_mint_root: HexBinary,
    // Token uri is base_uri + token_id
    pub base_uri: String,
}

impl Config {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.max_supply == 0 {
            return Err(ConfigurationError::InvalidNumberOfTokens {});
        }
        self.check_prices()?;
        if self.random_mint_limit == Some(0) {
            return Err(ConfigurationError::InvalidRandomMintLimit {});
        }
        check_base_uri(&self.base_uri)?;
        parse_root(&self.whitelist_root)?;
        parse_root(&self.free_mint_root)?;
        Ok(())
    }

    pub fn check_prices(&self) -> Result<(), ConfigurationError> {
        if self.mint_price.amount.is_zero() || self.random_mint_price.amount.is_zero() {
            return Err(ConfigurationError::InvalidMintPrice {});
        }
        if self.mint_price.denom != self.random_mint_price.denom {
            return Err(ConfigurationError::MintPriceDenomMismatch {});
        }
        Ok(())
    }
}

// Empty base uri is allowed, tokens then have no uri
pub fn check_base_uri(base_uri: &str) -> Result<(), ConfigurationError> {
    if base_uri.chars().count() > 256 {
        return Err(ConfigurationError::BaseUriTooLong {});
    }
    Ok(())
}
