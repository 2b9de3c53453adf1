use cosmwasm_schema::cw_serde;
use thiserror::Error;

#[cw_serde]
pub struct CollectionDetails {
    pub collection_name: String,
    pub symbol: String,
    // ONFT denom id of the collection
    pub id: String,
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub schema: Option<String>,
    pub uri: Option<String>,
    pub uri_hash: Option<String>,
    pub data: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum CollectionDetailsError {
    #[error("Invalid collection name")]
    InvalidCollectionName {},
    #[error("Invalid symbol")]
    InvalidSymbol {},
    #[error("Invalid collection id")]
    InvalidCollectionId {},
    #[error("Invalid description")]
    InvalidDescription {},
    #[error("Invalid preview uri")]
    InvalidPreviewUri {},
    #[error("Invalid schema")]
    InvalidSchema {},
    #[error("Invalid uri")]
    InvalidUri {},
    #[error("Invalid uri hash")]
    InvalidUriHash {},
    #[error("Invalid data")]
    InvalidData {},
}

fn within(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

fn optional_within(value: &Option<String>, max: usize) -> bool {
    value.as_deref().map_or(true, |v| within(v, max))
}

impl CollectionDetails {
    pub fn check_integrity(&self) -> Result<(), CollectionDetailsError> {
        if self.collection_name.is_empty() || !within(&self.collection_name, 256) {
            return Err(CollectionDetailsError::InvalidCollectionName {});
        }
        if !within(&self.symbol, 256) {
            return Err(CollectionDetailsError::InvalidSymbol {});
        }
        if self.id.is_empty() || !within(&self.id, 256) {
            return Err(CollectionDetailsError::InvalidCollectionId {});
        }
        if !optional_within(&self.description, 4096) {
            return Err(CollectionDetailsError::InvalidDescription {});
        }
        if !optional_within(&self.preview_uri, 256) {
            return Err(CollectionDetailsError::InvalidPreviewUri {});
        }
        if !optional_within(&self.schema, 256) {
            return Err(CollectionDetailsError::InvalidSchema {});
        }
        if !optional_within(&self.uri, 256) {
            return Err(CollectionDetailsError::InvalidUri {});
        }
        if !optional_within(&self.uri_hash, 256) {
            return Err(CollectionDetailsError::InvalidUriHash {});
        }
        if !optional_within(&self.data, 4096) {
            return Err(CollectionDetailsError::InvalidData {});
        }
        Ok(())
    }
}
