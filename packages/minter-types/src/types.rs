use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::token_details::Token;

#[cw_serde]
pub struct AuthDetails {
    // Owner of the collection, the only address allowed to change the sale phase
    pub admin: Addr,
    // Treasury receiving every mint payment
    pub payment_collector: Addr,
}

#[derive(Default)]
#[cw_serde]
pub struct UserDetails {
    pub minted_tokens: Vec<Token>,
    pub total_minted_count: u32,
    pub free_mint_count: u32,
}

#[derive(Default, Copy)]
#[cw_serde]
pub enum SalePhase {
    #[default]
    Private,
    Public,
}

impl SalePhase {
    pub fn from_public_flag(is_public: bool) -> Self {
        if is_public {
            SalePhase::Public
        } else {
            SalePhase::Private
        }
    }
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalePhase::Private => write!(f, "private"),
            SalePhase::Public => write!(f, "public"),
        }
    }
}

/// Category a mint request is accounted under once its proof has been checked.
#[derive(Copy)]
#[cw_serde]
pub enum MintCategory {
    Whitelist,
    FreeMint,
    Public,
}

impl fmt::Display for MintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MintCategory::Whitelist => write!(f, "whitelist"),
            MintCategory::FreeMint => write!(f, "free_mint"),
            MintCategory::Public => write!(f, "public"),
        }
    }
}

/// Targeted mints take the lowest remaining token ids, random mints draw
/// them from a shuffled pool and are priced at the lower tier.
#[derive(Copy)]
#[cw_serde]
pub enum MintKind {
    Targeted,
    Random,
}
