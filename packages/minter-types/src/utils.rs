use crate::collection_details::CollectionDetails;
use crate::token_details::TokenDetails;
use cosmwasm_std::{Addr, Coin, QuerierWrapper, StdError, Uint128};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Metadata, MsgCreateDenom, MsgMintOnft, OnftQuerier,
};
use std::str::FromStr;

/// Metadata uri of a token; empty when the collection has no base uri.
pub fn token_uri(base_uri: &str, token_id: &str) -> String {
    if base_uri.is_empty() {
        String::new()
    } else {
        format!("{}{}", base_uri, token_id)
    }
}

pub fn generate_mint_message(
    collection: &CollectionDetails,
    token_details: &TokenDetails,
    base_uri: &str,
    token_id: String,
    minter_address: Addr,
    recipient: Addr,
) -> MsgMintOnft {
    let media_uri = token_uri(base_uri, &token_id);
    let preview_uri = match &token_details.preview_uri {
        Some(preview_uri) => format!("{}/{}", preview_uri, token_id),
        None => media_uri.clone(),
    };
    let metadata = Metadata {
        name: format!("{} #{}", token_details.token_name, token_id),
        description: token_details.description.clone().unwrap_or_default(),
        media_uri,
        preview_uri,
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
    };
    MsgMintOnft {
        data: token_details.data.clone().unwrap_or_default(),
        id: format!("{}{}", collection.id, token_id),
        metadata: Some(metadata),
        denom_id: collection.id.clone(),
        transferable: token_details.transferable,
        sender: minter_address.into_string(),
        extensible: token_details.extensible,
        nsfw: token_details.nsfw,
        recipient: recipient.into_string(),
        royalty_share: token_details.royalty_ratio.atomics().to_string(),
    }
}

pub fn generate_create_denom_msg(
    collection: &CollectionDetails,
    minter_address: Addr,
    creation_fee: Coin,
) -> MsgCreateDenom {
    MsgCreateDenom {
        creation_fee: Some(creation_fee.into()),
        id: collection.id.clone(),
        symbol: collection.symbol.clone(),
        name: collection.collection_name.clone(),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection.preview_uri.clone().unwrap_or_default(),
        schema: collection.schema.clone().unwrap_or_default(),
        sender: minter_address.into_string(),
        uri: collection.uri.clone().unwrap_or_default(),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
        data: collection.data.clone().unwrap_or_default(),
        // Royalty splitting is left to the ONFT module defaults
        royalty_receivers: vec![],
    }
}

pub fn check_collection_creation_fee(querier: QuerierWrapper) -> Result<Coin, StdError> {
    let onft_querier = OnftQuerier::new(&querier);
    let params = onft_querier
        .params()?
        .params
        .ok_or_else(|| StdError::not_found("onft params"))?;
    let creation_fee = params
        .denom_creation_fee
        .ok_or_else(|| StdError::not_found("denom creation fee"))?;
    Ok(Coin {
        denom: creation_fee.denom,
        amount: Uint128::from_str(&creation_fee.amount)?,
    })
}
