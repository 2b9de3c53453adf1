use cosmwasm_std::{Coin, Uint128};
use minter_types::config::Config;
use minter_types::types::{MintCategory, MintKind};

use crate::error::ContractError;

/// Payment owed for `quantity` tokens, always denominated in the mint denom.
pub fn required_payment(
    config: &Config,
    category: MintCategory,
    kind: MintKind,
    quantity: u32,
) -> Result<Coin, ContractError> {
    let unit_price = match (category, kind) {
        (MintCategory::FreeMint, _) => {
            return Ok(Coin {
                denom: config.mint_price.denom.clone(),
                amount: Uint128::zero(),
            })
        }
        (_, MintKind::Targeted) => &config.mint_price,
        (_, MintKind::Random) => &config.random_mint_price,
    };
    let amount = unit_price
        .amount
        .checked_mul(Uint128::from(quantity))?;
    Ok(Coin {
        denom: unit_price.denom.clone(),
        amount,
    })
}
