use cosmwasm_std::{coin, coins, Addr};
use cw_utils::PaymentError;

use initials_minter::msg::{ExecuteMsg, QueryMsg};
use initials_minter::ContractError;
use minter_types::token_details::Token;
use omniflix_testing::app::OmniflixApp;

use crate::helpers::mock_messages::minter_mock_messages::{
    free_mint_proof, return_minter_instantiate_msg, whitelist_proof, MAX_SUPPLY, MINT_PRICE,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::{
    assert_contract_error, execute_minter, get_wasm_attribute, instantiate_minter, mint,
    query_onft_collection,
};

fn open_public_sale(app: &mut OmniflixApp, admin: &Addr, minter: &Addr) {
    execute_minter(
        app,
        admin,
        minter,
        &ExecuteMsg::SetSale { is_public: true },
        &[],
    )
    .unwrap();
}

#[test]
fn public_minting_takes_lowest_ids() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let stranger = res.test_accounts.stranger;
    let treasury = res.test_accounts.treasury;
    let minter_code_id = res.minter_code_id;
    let mut app = res.app;

    let minter_address = instantiate_minter(
        &mut app,
        minter_code_id,
        &creator,
        &return_minter_instantiate_msg(),
    );
    open_public_sale(&mut app, &creator, &minter_address);

    let res = execute_minter(
        &mut app,
        &stranger,
        &minter_address,
        &mint(3, vec![]),
        &coins(3 * MINT_PRICE, "uflix"),
    )
    .unwrap();
    assert_eq!(get_wasm_attribute(&res, "action"), "mint");
    assert_eq!(get_wasm_attribute(&res, "token_ids"), "1,2,3");

    // Whitelist proofs carry no benefit once the sale is public
    let res = execute_minter(
        &mut app,
        &collector,
        &minter_address,
        &mint(1, whitelist_proof(collector.as_str())),
        &coins(MINT_PRICE, "uflix"),
    )
    .unwrap();
    assert_eq!(get_wasm_attribute(&res, "category"), "public");
    assert_eq!(get_wasm_attribute(&res, "token_ids"), "4");

    let treasury_balance = app.wrap().query_balance(&treasury, "uflix").unwrap();
    assert_eq!(treasury_balance, coin(4 * MINT_PRICE, "uflix"));

    let mintable_tokens: Vec<Token> = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::MintableTokens {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(
        mintable_tokens,
        vec![
            Token {
                token_id: "5".to_string()
            },
            Token {
                token_id: "6".to_string()
            },
        ]
    );

    let collection = query_onft_collection(&app, &minter_address);
    assert_eq!(collection.onfts.len(), 4);
    assert_eq!(collection.onfts[3].owner, collector.to_string());
}

#[test]
fn public_free_minter_without_proof_pays() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let free_minter = res.test_accounts.free_minter;
    let minter_code_id = res.minter_code_id;
    let mut app = res.app;

    let minter_address = instantiate_minter(
        &mut app,
        minter_code_id,
        &creator,
        &return_minter_instantiate_msg(),
    );
    open_public_sale(&mut app, &creator, &minter_address);

    // No proof means a paid public mint
    let result = execute_minter(&mut app, &free_minter, &minter_address, &mint(1, vec![]), &[]);
    assert_contract_error(result, ContractError::PaymentError(PaymentError::NoFunds {}));

    let res = execute_minter(
        &mut app,
        &free_minter,
        &minter_address,
        &mint(1, vec![]),
        &coins(MINT_PRICE, "uflix"),
    )
    .unwrap();
    assert_eq!(get_wasm_attribute(&res, "category"), "public");

    // The free mint is still available with a proof
    let res = execute_minter(
        &mut app,
        &free_minter,
        &minter_address,
        &mint(1, free_mint_proof(free_minter.as_str())),
        &[],
    )
    .unwrap();
    assert_eq!(get_wasm_attribute(&res, "category"), "free_mint");
    assert_eq!(get_wasm_attribute(&res, "payment"), "0uflix");
}

#[test]
fn public_minting_respects_max_supply() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let stranger = res.test_accounts.stranger;
    let collector = res.test_accounts.collector;
    let minter_code_id = res.minter_code_id;
    let mut app = res.app;

    let minter_address = instantiate_minter(
        &mut app,
        minter_code_id,
        &creator,
        &return_minter_instantiate_msg(),
    );
    open_public_sale(&mut app, &creator, &minter_address);

    let quantity = MAX_SUPPLY + 1;
    let result = execute_minter(
        &mut app,
        &stranger,
        &minter_address,
        &mint(quantity, vec![]),
        &coins(quantity as u128 * MINT_PRICE, "uflix"),
    );
    assert_contract_error(result, ContractError::MaxMinted {});

    let total_minted: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalMintedCount {})
        .unwrap();
    assert_eq!(total_minted, 0);

    execute_minter(
        &mut app,
        &stranger,
        &minter_address,
        &mint(MAX_SUPPLY - 1, vec![]),
        &coins((MAX_SUPPLY - 1) as u128 * MINT_PRICE, "uflix"),
    )
    .unwrap();
    let result = execute_minter(
        &mut app,
        &collector,
        &minter_address,
        &mint(2, vec![]),
        &coins(2 * MINT_PRICE, "uflix"),
    );
    assert_contract_error(result, ContractError::MaxMinted {});

    let res = execute_minter(
        &mut app,
        &collector,
        &minter_address,
        &mint(1, vec![]),
        &coins(MINT_PRICE, "uflix"),
    )
    .unwrap();
    assert_eq!(get_wasm_attribute(&res, "total_supply"), MAX_SUPPLY.to_string());

    // Sold out
    let result = execute_minter(
        &mut app,
        &collector,
        &minter_address,
        &mint(1, vec![]),
        &coins(MINT_PRICE, "uflix"),
    );
    assert_contract_error(result, ContractError::MaxMinted {});

    let total_minted: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalMintedCount {})
        .unwrap();
    assert_eq!(total_minted, MAX_SUPPLY);
    let tokens_remaining: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::TokensRemaining {},
        )
        .unwrap();
    assert_eq!(tokens_remaining, 0);
    let collection = query_onft_collection(&app, &minter_address);
    assert_eq!(collection.onfts.len(), MAX_SUPPLY as usize);
}
