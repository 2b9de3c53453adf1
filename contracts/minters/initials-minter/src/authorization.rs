use cosmwasm_std::{Addr, Coin, HexBinary, MessageInfo, Storage};
use cw_utils::{must_pay, nonpayable};
use merkle_allowlist::verify;
use minter_types::config::Config;
use minter_types::types::{MintCategory, MintKind, SalePhase};

use crate::error::ContractError;
use crate::pricing::required_payment;
use crate::state::{ensure_capacity, is_free_minted};

/// Outcome of a mint request that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct MintPlan {
    pub category: MintCategory,
    pub kind: MintKind,
    pub quantity: u32,
    // Funds to forward to the payment collector, zero for free mints
    pub payment: Coin,
}

impl MintPlan {
    pub fn is_free_mint(&self) -> bool {
        self.category == MintCategory::FreeMint
    }
}

pub fn classify(
    phase: SalePhase,
    caller: &Addr,
    proof: &[HexBinary],
    whitelist_root: &HexBinary,
    free_mint_root: &HexBinary,
) -> Result<MintCategory, ContractError> {
    let in_free_mint = |proof: &[HexBinary]| verify(free_mint_root, caller.as_str(), proof);
    match phase {
        // An empty proof only verifies against a single member allowlist
        SalePhase::Private => {
            if in_free_mint(proof) {
                Ok(MintCategory::FreeMint)
            } else if verify(whitelist_root, caller.as_str(), proof) {
                Ok(MintCategory::Whitelist)
            } else if proof.is_empty() {
                Err(ContractError::MissingProof {})
            } else {
                Err(ContractError::InvalidProof {})
            }
        }
        SalePhase::Public => {
            if !proof.is_empty() && in_free_mint(proof) {
                Ok(MintCategory::FreeMint)
            } else {
                Ok(MintCategory::Public)
            }
        }
    }
}

/// Runs every gate of a mint request against the current ledger without
/// writing to it.
pub fn plan_mint(
    storage: &dyn Storage,
    info: &MessageInfo,
    config: &Config,
    phase: SalePhase,
    kind: MintKind,
    quantity: u32,
    proof: &[HexBinary],
) -> Result<MintPlan, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidMintQuantity {});
    }

    let category = classify(
        phase,
        &info.sender,
        proof,
        &config.whitelist_root,
        &config.free_mint_root,
    )?;

    if category == MintCategory::FreeMint {
        if is_free_minted(storage, &info.sender)? {
            return Err(ContractError::AlreadyFreeMinted {});
        }
        if quantity != 1 {
            return Err(ContractError::InvalidFreeMintQuantity {});
        }
        nonpayable(info)?;
    }

    if kind == MintKind::Random {
        if let Some(limit) = config.random_mint_limit {
            if quantity > limit {
                return Err(ContractError::RandomMintLimitExceeded { limit });
            }
        }
    }

    let payment = required_payment(config, category, kind, quantity)?;
    let payment = if payment.amount.is_zero() {
        payment
    } else {
        let sent = must_pay(info, &payment.denom)?;
        if sent < payment.amount {
            return Err(ContractError::InsufficientPayment {
                expected: payment.amount,
                sent,
            });
        }
        Coin {
            denom: payment.denom,
            amount: sent,
        }
    };

    ensure_capacity(storage, config.max_supply, quantity)?;

    Ok(MintPlan {
        category,
        kind,
        quantity,
        payment,
    })
}
