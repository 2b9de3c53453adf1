use cosmwasm_std::{Addr, Env, StdError};
use minter_types::token_details::Token;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro128PlusPlus;
use sha2::{Digest, Sha256};
use shuffle::{fy::FisherYates, shuffler::Shuffler};

fn seed(env: &Env, sender: &Addr, total_supply: u32) -> [u8; 16] {
    let tx_index = env.transaction.as_ref().map_or(0, |tx| tx.index);
    let sha256 = Sha256::digest(format!(
        "{}{}{}{}{}",
        env.block.height, env.block.time, tx_index, sender, total_supply
    ));
    let mut randomness = [0u8; 16];
    randomness.copy_from_slice(&sha256[0..16]);
    randomness
}

/// Shuffles the pool of mintable tokens, keeping each token paired with its key.
pub fn randomize_token_list(
    tokens: Vec<(u32, Token)>,
    env: &Env,
    sender: &Addr,
    total_supply: u32,
) -> Result<Vec<(u32, Token)>, StdError> {
    let mut tokens = tokens;
    let mut rng = Xoshiro128PlusPlus::from_seed(seed(env, sender, total_supply));
    let mut shuffler = FisherYates::default();
    shuffler
        .shuffle(&mut tokens, &mut rng)
        .map_err(StdError::generic_err)?;
    Ok(tokens)
}

pub fn draw_random_tokens(
    tokens: Vec<(u32, Token)>,
    quantity: u32,
    env: &Env,
    sender: &Addr,
    total_supply: u32,
) -> Result<Vec<(u32, Token)>, StdError> {
    let mut shuffled = randomize_token_list(tokens, env, sender, total_supply)?;
    shuffled.truncate(quantity as usize);
    Ok(shuffled)
}
