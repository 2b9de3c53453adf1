#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, HexBinary,
    MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::{maybe_addr, must_pay, nonpayable};
use semver::Version;

use minter_types::collection_details::CollectionDetails;
use minter_types::config::{check_base_uri, Config, ConfigurationError};
use minter_types::token_details::{Token, TokenDetails};
use minter_types::types::{AuthDetails, MintCategory, MintKind, SalePhase, UserDetails};
use minter_types::utils::{
    check_collection_creation_fee, generate_create_denom_msg, generate_mint_message, token_uri,
};

use crate::authorization::plan_mint;
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::pricing::required_payment;
use crate::state::{
    collect_mintable_tokens, commit_mint, initialize_ledger, is_free_minted,
    lowest_mintable_tokens, paginate_mintable_tokens, sale_phase, set_phase, total_supply,
    AUTH_DETAILS, COLLECTION, CONFIG, TOKEN_DETAILS, TOKEN_OWNERS, USER_MINTING_DETAILS,
};
use crate::utils::draw_random_tokens;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:initials-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Exact denom creation fee must be paid
    let creation_fee = check_collection_creation_fee(deps.querier)?;
    let amount = must_pay(&info, &creation_fee.denom)?;
    if amount != creation_fee.amount {
        return Err(ContractError::InvalidCreationFee {
            expected: creation_fee.amount,
            sent: amount,
        });
    }

    msg.collection_details.check_integrity()?;
    msg.token_details.check_integrity()?;

    let init = msg.init;
    let admin = maybe_addr(deps.api, init.admin)?.unwrap_or(info.sender.clone());
    let payment_collector = deps.api.addr_validate(&init.treasury)?;
    let auth_details = AuthDetails {
        admin,
        payment_collector,
    };

    let config = Config {
        max_supply: init.max_supply,
        mint_price: init.mint_price,
        random_mint_price: init.random_mint_price,
        random_mint_limit: init.random_mint_limit,
        whitelist_root: init.whitelist_root,
        free_mint_root: init.free_mint_root,
        base_uri: init.base_uri,
    };
    config.check_integrity()?;

    CONFIG.save(deps.storage, &config)?;
    COLLECTION.save(deps.storage, &msg.collection_details)?;
    TOKEN_DETAILS.save(deps.storage, &msg.token_details)?;
    AUTH_DETAILS.save(deps.storage, &auth_details)?;
    initialize_ledger(deps.storage, config.max_supply)?;

    let nft_creation_msg: CosmosMsg = generate_create_denom_msg(
        &msg.collection_details,
        env.contract.address,
        creation_fee,
    )
    .into();

    let res = Response::new()
        .add_message(nft_creation_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("collection_id", msg.collection_details.id)
        .add_attribute("admin", auth_details.admin)
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("sale_phase", SalePhase::Private.to_string());
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { quantity, proof } => {
            execute_mint(deps, env, info, MintKind::Targeted, quantity, proof)
        }
        ExecuteMsg::RandomMint { quantity, proof } => {
            execute_mint(deps, env, info, MintKind::Random, quantity, proof)
        }
        ExecuteMsg::SetSale { is_public } => execute_set_sale(deps, env, info, is_public),
        ExecuteMsg::UpdateBaseUri { base_uri } => {
            execute_update_base_uri(deps, env, info, base_uri)
        }
        ExecuteMsg::UpdateMintPrice {
            mint_price,
            random_mint_price,
        } => execute_update_mint_price(deps, env, info, mint_price, random_mint_price),
        ExecuteMsg::UpdateRandomMintLimit { limit } => {
            execute_update_random_mint_limit(deps, env, info, limit)
        }
        ExecuteMsg::TransferOwnership { new_admin } => {
            execute_transfer_ownership(deps, env, info, new_admin)
        }
        ExecuteMsg::UpdatePaymentCollector { payment_collector } => {
            execute_update_payment_collector(deps, env, info, payment_collector)
        }
    }
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: MintKind,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let phase = sale_phase(deps.storage)?;

    // Every gate runs before the ledger is touched
    let plan = plan_mint(
        deps.storage,
        &info,
        &config,
        phase,
        kind,
        quantity,
        &proof,
    )?;

    let tokens = match kind {
        MintKind::Targeted => lowest_mintable_tokens(deps.storage, quantity)?,
        MintKind::Random => {
            let supply = total_supply(deps.storage)?;
            draw_random_tokens(
                collect_mintable_tokens(deps.storage)?,
                quantity,
                &env,
                &info.sender,
                supply,
            )?
        }
    };
    let new_total = commit_mint(
        deps.storage,
        config.max_supply,
        &info.sender,
        &tokens,
        plan.is_free_mint(),
    )?;

    let collection = COLLECTION.load(deps.storage)?;
    let token_details = TOKEN_DETAILS.load(deps.storage)?;
    let mut messages: Vec<CosmosMsg> = tokens
        .iter()
        .map(|(_, token)| {
            generate_mint_message(
                &collection,
                &token_details,
                &config.base_uri,
                token.token_id.clone(),
                env.contract.address.clone(),
                info.sender.clone(),
            )
            .into()
        })
        .collect();

    if !plan.payment.amount.is_zero() {
        let auth_details = AUTH_DETAILS.load(deps.storage)?;
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: auth_details.payment_collector.into_string(),
            amount: vec![plan.payment.clone()],
        }));
    }

    let token_ids = tokens
        .iter()
        .map(|(_, token)| token.token_id.clone())
        .collect::<Vec<String>>()
        .join(",");
    let action = match kind {
        MintKind::Targeted => "mint",
        MintKind::Random => "random_mint",
    };

    let res = Response::new()
        .add_messages(messages)
        .add_attribute("action", action)
        .add_attribute("minter", info.sender)
        .add_attribute("category", plan.category.to_string())
        .add_attribute("quantity", plan.quantity.to_string())
        .add_attribute("token_ids", token_ids)
        .add_attribute("total_supply", new_total.to_string())
        .add_attribute("payment", plan.payment.to_string())
        .add_attribute("collection_id", collection.id);
    Ok(res)
}

fn check_admin(deps: Deps, info: &MessageInfo) -> Result<AuthDetails, ContractError> {
    nonpayable(info)?;
    let auth_details = AUTH_DETAILS.load(deps.storage)?;
    if info.sender != auth_details.admin {
        return Err(ContractError::Unauthorized {});
    }
    Ok(auth_details)
}

pub fn execute_set_sale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    is_public: bool,
) -> Result<Response, ContractError> {
    check_admin(deps.as_ref(), &info)?;
    let phase = SalePhase::from_public_flag(is_public);
    set_phase(deps.storage, phase)?;

    let res = Response::new()
        .add_attribute("action", "set_sale")
        .add_attribute("sale_phase", phase.to_string());
    Ok(res)
}

pub fn execute_update_base_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    check_admin(deps.as_ref(), &info)?;
    check_base_uri(&base_uri)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.base_uri = base_uri.clone();
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "update_base_uri")
        .add_attribute("base_uri", base_uri);
    Ok(res)
}

pub fn execute_update_mint_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mint_price: Option<Coin>,
    random_mint_price: Option<Coin>,
) -> Result<Response, ContractError> {
    check_admin(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    if let Some(mint_price) = mint_price {
        config.mint_price = mint_price;
    }
    if let Some(random_mint_price) = random_mint_price {
        config.random_mint_price = random_mint_price;
    }
    config.check_prices()?;
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "update_mint_price")
        .add_attribute("mint_price", config.mint_price.to_string())
        .add_attribute("random_mint_price", config.random_mint_price.to_string());
    Ok(res)
}

pub fn execute_update_random_mint_limit(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    limit: Option<u32>,
) -> Result<Response, ContractError> {
    check_admin(deps.as_ref(), &info)?;
    if limit == Some(0) {
        return Err(ConfigurationError::InvalidRandomMintLimit {}.into());
    }
    let mut config = CONFIG.load(deps.storage)?;
    config.random_mint_limit = limit;
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "update_random_mint_limit")
        .add_attribute(
            "random_mint_limit",
            limit.map_or("none".to_string(), |limit| limit.to_string()),
        );
    Ok(res)
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut auth_details = check_admin(deps.as_ref(), &info)?;
    let new_admin = deps.api.addr_validate(&new_admin)?;
    auth_details.admin = new_admin.clone();
    AUTH_DETAILS.save(deps.storage, &auth_details)?;

    let res = Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_admin", new_admin);
    Ok(res)
}

pub fn execute_update_payment_collector(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    payment_collector: String,
) -> Result<Response, ContractError> {
    let mut auth_details = check_admin(deps.as_ref(), &info)?;
    let payment_collector = deps.api.addr_validate(&payment_collector)?;
    auth_details.payment_collector = payment_collector.clone();
    AUTH_DETAILS.save(deps.storage, &auth_details)?;

    let res = Response::new()
        .add_attribute("action", "update_payment_collector")
        .add_attribute("payment_collector", payment_collector);
    Ok(res)
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Collection {} => to_json_binary(&query_collection(deps, env)?),
        QueryMsg::TokenDetails {} => to_json_binary(&query_token_details(deps, env)?),
        QueryMsg::AuthDetails {} => to_json_binary(&query_auth_details(deps, env)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::UserMintingDetails { address } => {
            to_json_binary(&query_user_minting_details(deps, env, address)?)
        }
        QueryMsg::TotalMintedCount {} => to_json_binary(&query_total_minted_count(deps, env)?),
        QueryMsg::SalePhase {} => to_json_binary(&sale_phase(deps.storage)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, env, token_id)?),
        QueryMsg::BalanceOf { address } => {
            to_json_binary(&query_balance_of(deps, env, address)?)
        }
        QueryMsg::IsFreeMinted { address } => {
            to_json_binary(&query_is_free_minted(deps, env, address)?)
        }
        QueryMsg::BaseUri {} => to_json_binary(&CONFIG.load(deps.storage)?.base_uri),
        QueryMsg::TokenUri { token_id } => {
            to_json_binary(&query_token_uri(deps, env, token_id)?)
        }
        QueryMsg::TokensRemaining {} => to_json_binary(&query_tokens_remaining(deps, env)?),
        QueryMsg::MintableTokens { start_after, limit } => {
            to_json_binary(&query_mintable_tokens(deps, env, start_after, limit)?)
        }
        QueryMsg::MintPrice {
            category,
            kind,
            quantity,
        } => to_json_binary(&query_mint_price(deps, env, category, kind, quantity)?),
    }
}

fn query_collection(deps: Deps, _env: Env) -> Result<CollectionDetails, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(collection)
}

fn query_token_details(deps: Deps, _env: Env) -> Result<TokenDetails, ContractError> {
    let token_details = TOKEN_DETAILS.load(deps.storage)?;
    Ok(token_details)
}

fn query_auth_details(deps: Deps, _env: Env) -> Result<AuthDetails, ContractError> {
    let auth_details = AUTH_DETAILS.load(deps.storage)?;
    Ok(auth_details)
}

fn query_config(deps: Deps, _env: Env) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_user_minting_details(
    deps: Deps,
    _env: Env,
    address: String,
) -> Result<UserDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = USER_MINTING_DETAILS
        .may_load(deps.storage, address)?
        .unwrap_or_default();
    Ok(user_details)
}

fn query_total_minted_count(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let total = total_supply(deps.storage)?;
    Ok(total)
}

fn query_owner_of(deps: Deps, _env: Env, token_id: u32) -> Result<Addr, ContractError> {
    TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotMinted {})
}

fn query_balance_of(deps: Deps, _env: Env, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let balance = USER_MINTING_DETAILS
        .may_load(deps.storage, address)?
        .map_or(0, |details| details.total_minted_count);
    Ok(balance)
}

fn query_is_free_minted(deps: Deps, _env: Env, address: String) -> Result<bool, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let free_minted = is_free_minted(deps.storage, &address)?;
    Ok(free_minted)
}

fn query_token_uri(deps: Deps, _env: Env, token_id: u32) -> Result<String, ContractError> {
    if !TOKEN_OWNERS.has(deps.storage, token_id) {
        return Err(ContractError::TokenNotMinted {});
    }
    let config = CONFIG.load(deps.storage)?;
    Ok(token_uri(&config.base_uri, &token_id.to_string()))
}

fn query_tokens_remaining(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let total = total_supply(deps.storage)?;
    Ok(config.max_supply.saturating_sub(total))
}

fn query_mintable_tokens(
    deps: Deps,
    _env: Env,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> Result<Vec<Token>, ContractError> {
    let tokens = paginate_mintable_tokens(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(_, token)| token)
        .collect();
    Ok(tokens)
}

fn query_mint_price(
    deps: Deps,
    _env: Env,
    category: MintCategory,
    kind: MintKind,
    quantity: u32,
) -> Result<Coin, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    required_payment(&config, category, kind, quantity)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigrationContract {
            previous_contract: current_version.contract,
            new_contract: CONTRACT_NAME.to_string(),
        });
    }
    let version: Version = current_version.version.parse()?;
    let new_version: Version = CONTRACT_VERSION.parse()?;
    if version > new_version {
        return Err(ContractError::InvalidMigrationVersion {
            previous_version: current_version.version,
            new_version: CONTRACT_VERSION.to_string(),
        });
    }
    if version < new_version {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    let res = Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", current_version.version)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(res)
}
