use anyhow::{anyhow, bail};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Api, Binary, BlockInfo, Coin, Querier, Storage,
};
use cw_multi_test::{error::AnyResult, AppResponse, CosmosRouter, Stargate};
use omniflix_std::types::cosmos::base::v1beta1::Coin as ProtoCoin;
use omniflix_std::types::omniflix::onft::v1beta1::{
    Collection, Denom, MsgCreateDenom, MsgMintOnft, Onft, Params, QueryParamsResponse,
};
use prost::Message;

const CREATE_DENOM_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgCreateDenom";
const MINT_ONFT_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgMintONFT";
const PARAMS_QUERY_PATH: &str = "/OmniFlix.onft.v1beta1.Query/Params";

pub const DEFAULT_CREATION_FEE: u128 = 1_000_000;
pub const DEFAULT_CREATION_FEE_DENOM: &str = "uflix";

pub fn collection_key(creator: &str) -> String {
    format!("collections:collection:{}", creator)
}

/// Reads the collection a contract created through the keeper, with every
/// ONFT minted into it so far.
pub fn load_collection(storage: &dyn Storage, creator: &str) -> AnyResult<Collection> {
    let raw = storage
        .get(collection_key(creator).as_bytes())
        .ok_or_else(|| anyhow!("no collection created by {}", creator))?;
    Ok(from_json(raw)?)
}

/// Stands in for the ONFT module: answers the params query with a fixed
/// denom creation fee and records created denoms and minted ONFTs.
pub struct StargateKeeper {
    pub creation_fee: Coin,
}

impl Default for StargateKeeper {
    fn default() -> Self {
        Self {
            creation_fee: Coin::new(DEFAULT_CREATION_FEE, DEFAULT_CREATION_FEE_DENOM),
        }
    }
}

impl StargateKeeper {
    fn create_denom(&self, storage: &mut dyn Storage, sender: &Addr, msg: MsgCreateDenom) -> AnyResult<()> {
        let key = collection_key(sender.as_str());
        if storage.get(key.as_bytes()).is_some() {
            bail!("denom already created by {}", sender);
        }
        let collection = Collection {
            denom: Some(Denom {
                creator: sender.to_string(),
                data: msg.data,
                name: msg.name,
                id: msg.id,
                preview_uri: msg.preview_uri,
                description: msg.description,
                schema: msg.schema,
                symbol: msg.symbol,
                uri: msg.uri,
                uri_hash: msg.uri_hash,
                royalty_receivers: msg.royalty_receivers,
            }),
            onfts: vec![],
        };
        storage.set(key.as_bytes(), &to_json_binary(&collection)?);
        Ok(())
    }

    fn mint_onft(&self, storage: &mut dyn Storage, sender: &Addr, msg: MsgMintOnft) -> AnyResult<()> {
        let mut collection = load_collection(storage, sender.as_str())?;
        if collection.onfts.iter().any(|onft| onft.id == msg.id) {
            bail!("onft {} already exists", msg.id);
        }
        collection.onfts.push(Onft {
            id: msg.id,
            created_at: None,
            nsfw: msg.nsfw,
            owner: msg.recipient,
            data: msg.data,
            transferable: msg.transferable,
            extensible: msg.extensible,
            metadata: msg.metadata,
            royalty_share: msg.royalty_share,
        });
        storage.set(
            collection_key(sender.as_str()).as_bytes(),
            &to_json_binary(&collection)?,
        );
        Ok(())
    }
}

impl Stargate for StargateKeeper {
    fn execute<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse> {
        match type_url.as_str() {
            CREATE_DENOM_TYPE_URL => {
                let msg = MsgCreateDenom::decode(value.as_slice())?;
                self.create_denom(storage, &sender, msg)?;
            }
            MINT_ONFT_TYPE_URL => {
                let msg = MsgMintOnft::decode(value.as_slice())?;
                self.mint_onft(storage, &sender, msg)?;
            }
            _ => bail!("unsupported stargate message {}", type_url),
        }
        Ok(AppResponse::default())
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        _data: Binary,
    ) -> AnyResult<Binary> {
        if path == PARAMS_QUERY_PATH {
            let params = QueryParamsResponse {
                params: Some(Params {
                    denom_creation_fee: Some(ProtoCoin {
                        denom: self.creation_fee.denom.clone(),
                        amount: self.creation_fee.amount.to_string(),
                    }),
                }),
            };
            return Ok(to_json_binary(&params)?);
        }
        bail!("unsupported stargate query {}", path)
    }
}
