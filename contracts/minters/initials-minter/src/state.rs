use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use minter_types::collection_details::CollectionDetails;
use minter_types::config::Config;
use minter_types::token_details::{Token, TokenDetails};
use minter_types::types::{AuthDetails, SalePhase, UserDetails};

use crate::error::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const TOKEN_DETAILS: Item<TokenDetails> = Item::new("token_details");
pub const AUTH_DETAILS: Item<AuthDetails> = Item::new("auth_details");
pub const SALE_PHASE: Item<SalePhase> = Item::new("sale_phase");
// Number of tokens issued so far, never above config.max_supply
pub const TOTAL_SUPPLY: Item<u32> = Item::new("total_supply");
// Addresses which already used their free mint
pub const FREE_MINTED: Map<Addr, bool> = Map::new("free_minted");
// Address and tokens minted
pub const USER_MINTING_DETAILS: Map<Addr, UserDetails> = Map::new("user_minting_details");
// Token number and its first owner
pub const TOKEN_OWNERS: Map<u32, Addr> = Map::new("token_owners");
// Token numbers not issued yet
pub const MINTABLE_TOKENS: Map<u32, Token> = Map::new("mintable_tokens");

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 100;

pub fn generate_tokens(num_tokens: u32) -> Vec<(u32, Token)> {
    (1..=num_tokens)
        .map(|x| {
            (
                x,
                Token {
                    token_id: x.to_string(),
                },
            )
        })
        .collect()
}

pub fn initialize_ledger(storage: &mut dyn Storage, max_supply: u32) -> StdResult<()> {
    for (key, token) in generate_tokens(max_supply) {
        MINTABLE_TOKENS.save(storage, key, &token)?;
    }
    TOTAL_SUPPLY.save(storage, &0)?;
    SALE_PHASE.save(storage, &SalePhase::Private)?;
    Ok(())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<u32> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

/// Supply after reserving `quantity`, or `MaxMinted` if that would pass the cap.
pub fn ensure_capacity(
    storage: &dyn Storage,
    max_supply: u32,
    quantity: u32,
) -> Result<u32, ContractError> {
    match total_supply(storage)?.checked_add(quantity) {
        Some(new_total) if new_total <= max_supply => Ok(new_total),
        _ => Err(ContractError::MaxMinted {}),
    }
}

pub fn reserve(
    storage: &mut dyn Storage,
    max_supply: u32,
    quantity: u32,
) -> Result<u32, ContractError> {
    let new_total = ensure_capacity(storage, max_supply, quantity)?;
    TOTAL_SUPPLY.save(storage, &new_total)?;
    Ok(new_total)
}

pub fn is_free_minted(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(FREE_MINTED.may_load(storage, address.clone())?.is_some())
}

pub fn mark_free_minted(storage: &mut dyn Storage, address: &Addr) -> Result<(), ContractError> {
    if is_free_minted(storage, address)? {
        return Err(ContractError::AlreadyFreeMinted {});
    }
    FREE_MINTED.save(storage, address.clone(), &true)?;
    Ok(())
}

pub fn sale_phase(storage: &dyn Storage) -> StdResult<SalePhase> {
    Ok(SALE_PHASE.may_load(storage)?.unwrap_or_default())
}

pub fn set_phase(storage: &mut dyn Storage, phase: SalePhase) -> StdResult<()> {
    SALE_PHASE.save(storage, &phase)
}

/// Applies an authorized mint to the ledger.
///
/// Both the supply cap and the free mint mark are checked before anything is
/// written, so an error leaves every item untouched.
pub fn commit_mint(
    storage: &mut dyn Storage,
    max_supply: u32,
    recipient: &Addr,
    tokens: &[(u32, Token)],
    free_mint: bool,
) -> Result<u32, ContractError> {
    let quantity = tokens.len() as u32;
    ensure_capacity(storage, max_supply, quantity)?;
    if free_mint && is_free_minted(storage, recipient)? {
        return Err(ContractError::AlreadyFreeMinted {});
    }

    let new_total = reserve(storage, max_supply, quantity)?;
    if free_mint {
        mark_free_minted(storage, recipient)?;
    }

    let mut user_details = USER_MINTING_DETAILS
        .may_load(storage, recipient.clone())?
        .unwrap_or_default();
    for (key, token) in tokens {
        MINTABLE_TOKENS.remove(storage, *key);
        TOKEN_OWNERS.save(storage, *key, recipient)?;
        user_details.minted_tokens.push(token.clone());
    }
    user_details.total_minted_count += quantity;
    if free_mint {
        user_details.free_mint_count += 1;
    }
    USER_MINTING_DETAILS.save(storage, recipient.clone(), &user_details)?;

    Ok(new_total)
}

pub fn collect_mintable_tokens(storage: &dyn Storage) -> StdResult<Vec<(u32, Token)>> {
    MINTABLE_TOKENS
        .range(storage, None, None, Order::Ascending)
        .collect()
}

pub fn lowest_mintable_tokens(storage: &dyn Storage, quantity: u32) -> StdResult<Vec<(u32, Token)>> {
    MINTABLE_TOKENS
        .range(storage, None, None, Order::Ascending)
        .take(quantity as usize)
        .collect()
}

pub fn paginate_mintable_tokens(
    storage: &dyn Storage,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<(u32, Token)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    MINTABLE_TOKENS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
