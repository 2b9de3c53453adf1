//! Merkle allowlists committing to a set of addresses.
//!
//! Leaves are `keccak256(address)`. Every parent is the Keccak-256 hash of its
//! two children concatenated in ascending byte order, so a proof is a plain
//! list of sibling hashes with no left/right markers. A node left alone at the
//! end of a layer is carried up unchanged. This is the layout produced by
//! `merkletreejs` with `sortPairs: true`, which lets roots and proofs be built
//! off-chain with the usual tooling.

use cosmwasm_std::HexBinary;
use sha3::{Digest, Keccak256};
use thiserror::Error;

pub type Hash = [u8; 32];

pub const HASH_LENGTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum AllowlistError {
    #[error("Invalid merkle root length: expected 32 bytes, got {length}")]
    InvalidRootLength { length: usize },
}

/// Leaf committed to by the tree for a given address.
pub fn leaf_hash(identity: &str) -> Hash {
    Keccak256::digest(identity.as_bytes()).into()
}

/// Parent hash of two nodes, independent of their order.
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

pub fn parse_root(root: &HexBinary) -> Result<Hash, AllowlistError> {
    to_hash(root.as_slice()).ok_or(AllowlistError::InvalidRootLength {
        length: root.len(),
    })
}

fn to_hash(bytes: &[u8]) -> Option<Hash> {
    bytes.try_into().ok()
}

/// Checks that `identity` belongs to the set committed by `root`.
///
/// Never errors: a root or sibling of the wrong size simply fails
/// verification.
pub fn verify(root: &[u8], identity: &str, proof: &[HexBinary]) -> bool {
    verify_leaf(root, leaf_hash(identity), proof)
}

pub fn verify_leaf(root: &[u8], leaf: Hash, proof: &[HexBinary]) -> bool {
    let root = match to_hash(root) {
        Some(root) => root,
        None => return false,
    };
    let mut computed = leaf;
    for sibling in proof {
        match to_hash(sibling.as_slice()) {
            Some(sibling) => computed = hash_sorted_pair(&computed, &sibling),
            None => return false,
        }
    }
    computed == root
}

#[derive(Debug, Clone, PartialEq)]
pub struct MerkleTree {
    // Bottom-up; the last layer holds the root.
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn from_identities<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_leaves(
            identities
                .into_iter()
                .map(|identity| leaf_hash(identity.as_ref()))
                .collect(),
        )
    }

    pub fn from_leaves(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];
        while let Some(layer) = layers.last() {
            if layer.len() <= 1 {
                break;
            }
            let pairs = layer.chunks_exact(2);
            let promoted = pairs.remainder().first().copied();
            let next: Vec<Hash> = pairs
                .map(|pair| hash_sorted_pair(&pair[0], &pair[1]))
                .chain(promoted)
                .collect();
            layers.push(next);
        }
        MerkleTree { layers }
    }

    /// Root of the tree. An empty tree commits to the all-zero hash, which no
    /// leaf can fold to.
    pub fn root(&self) -> Hash {
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or([0u8; HASH_LENGTH])
    }

    pub fn hex_root(&self) -> HexBinary {
        HexBinary::from(self.root().to_vec())
    }

    pub fn leaves(&self) -> &[Hash] {
        self.layers.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sibling path for `leaf`, or `None` if the leaf is not in the tree.
    pub fn proof(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut index = self.leaves().iter().position(|l| l == leaf)?;
        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling_index = if index % 2 == 0 { index + 1 } else { index - 1 };
            if let Some(sibling) = layer.get(sibling_index) {
                proof.push(*sibling);
            }
            index /= 2;
        }
        Some(proof)
    }

    pub fn proof_for(&self, identity: &str) -> Option<Vec<Hash>> {
        self.proof(&leaf_hash(identity))
    }

    pub fn hex_proof_for(&self, identity: &str) -> Option<Vec<HexBinary>> {
        self.proof_for(identity).map(|proof| {
            proof
                .into_iter()
                .map(|hash| HexBinary::from(hash.to_vec()))
                .collect()
        })
    }
}
