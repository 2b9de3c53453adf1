use crate::collection_details::CollectionDetails;
use crate::token_details::TokenDetails;
use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct MinterInstantiateMsg<T> {
    pub collection_details: CollectionDetails,
    pub token_details: TokenDetails,
    pub init: T,
}
