use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary};
use minter_types::collection_details::CollectionDetails;
use minter_types::config::Config;
use minter_types::msg::MinterInstantiateMsg;
use minter_types::token_details::{Token, TokenDetails};
use minter_types::types::{AuthDetails, MintCategory, MintKind, SalePhase, UserDetails};

#[cw_serde]
pub struct InitialsInit {
    // Defaults to the instantiating address
    pub admin: Option<String>,
    pub treasury: String,
    pub whitelist_root: HexBinary,
    pub free_mint_root: HexBinary,
    pub base_uri: String,
    pub max_supply: u32,
    pub mint_price: Coin,
    pub random_mint_price: Coin,
    pub random_mint_limit: Option<u32>,
}

pub type InstantiateMsg = MinterInstantiateMsg<InitialsInit>;

#[cw_serde]
pub enum ExecuteMsg {
    Mint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    RandomMint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    SetSale {
        is_public: bool,
    },
    UpdateBaseUri {
        base_uri: String,
    },
    UpdateMintPrice {
        mint_price: Option<Coin>,
        random_mint_price: Option<Coin>,
    },
    UpdateRandomMintLimit {
        limit: Option<u32>,
    },
    TransferOwnership {
        new_admin: String,
    },
    UpdatePaymentCollector {
        payment_collector: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(TokenDetails)]
    TokenDetails {},
    #[returns(AuthDetails)]
    AuthDetails {},
    #[returns(Config)]
    Config {},
    #[returns(UserDetails)]
    UserMintingDetails { address: String },
    #[returns(u32)]
    TotalMintedCount {},
    #[returns(SalePhase)]
    SalePhase {},
    #[returns(Addr)]
    OwnerOf { token_id: u32 },
    #[returns(u32)]
    BalanceOf { address: String },
    #[returns(bool)]
    IsFreeMinted { address: String },
    #[returns(String)]
    BaseUri {},
    #[returns(String)]
    TokenUri { token_id: u32 },
    #[returns(u32)]
    TokensRemaining {},
    #[returns(Vec<Token>)]
    MintableTokens {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Coin)]
    MintPrice {
        category: MintCategory,
        kind: MintKind,
        quantity: u32,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
