use basket::{constants::DEFAULT_FEE_PERCENTAGE, error::ErrorCode};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env, Vec,
};

use crate::{
    controller::{ledger, registry},
    events::MemeIndexEvents,
    meme_index::MemeIndexTrait,
    settlement::TokenTransfer,
    storage::{
        bump_instance, get_basket_count, get_config, get_fee_percentage, get_position,
        is_initialized, save_basket_count, save_config, save_fee_percentage, set_initialized,
        utils, BasketDefinition, Config, Position,
    },
};

contractmeta!(
    key = "Description",
    val = "Fixed five-asset index baskets with proportional redemption"
);

#[contract]
pub struct MemeIndex;

#[contractimpl]
impl MemeIndexTrait for MemeIndex {
    fn initialize(env: Env, admin: Address, base_asset: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Meme Index: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                base_asset: base_asset.clone(),
            },
        );
        save_fee_percentage(&env, DEFAULT_FEE_PERCENTAGE);
        save_basket_count(&env, 0);

        MemeIndexEvents::initialize(&env, admin, base_asset, DEFAULT_FEE_PERCENTAGE);
    }

    fn create_index(
        env: Env,
        sender: Address,
        assets: Vec<Address>,
        weights: Vec<u32>,
    ) -> Result<u32, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        utils::is_admin(&env, &config, &sender)?;

        let basket_id = registry::create_basket(&env, assets.clone(), weights.clone())?;

        MemeIndexEvents::index_created(&env, sender, basket_id, assets, weights);

        Ok(basket_id)
    }

    fn update_fee_percentage(env: Env, sender: Address, new_fee: u32) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        utils::is_admin(&env, &config, &sender)?;
        registry::validate_fee_percentage(&env, new_fee)?;

        let old_fee = get_fee_percentage(&env);
        save_fee_percentage(&env, new_fee);

        MemeIndexEvents::fee_updated(&env, sender, old_fee, new_fee);

        Ok(())
    }

    fn buy_index(
        env: Env,
        sender: Address,
        basket_id: u32,
        total_cost: i128,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        let basket = registry::load_basket(&env, basket_id)?;
        let existing = get_position(&env, &sender, basket_id);

        let settlement = ledger::plan_buy(
            &env, &config, &sender, basket_id, &basket, existing, total_cost,
        )?;
        settlement.commit(&env, &TokenTransfer)?;

        MemeIndexEvents::index_bought(&env, sender, basket_id, total_cost);

        Ok(())
    }

    fn sell_index(
        env: Env,
        sender: Address,
        basket_id: u32,
        redeem_amount: i128,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        let position = ledger::load_position(&env, &sender, basket_id)?;
        let basket = registry::load_basket(&env, basket_id)?;
        let fee_percentage = get_fee_percentage(&env);

        let (settlement, summary) = ledger::plan_sell(
            &env,
            &config,
            &sender,
            &basket,
            &position,
            fee_percentage,
            redeem_amount,
        )?;
        settlement.commit(&env, &TokenTransfer)?;

        log!(
            &env,
            "Meme Index: Sell Index: sold {}% of basket {}, returned {}",
            summary.sell_fraction,
            basket_id,
            summary.total_return
        );

        MemeIndexEvents::fee_collected(&env, config.admin, summary.fee);
        MemeIndexEvents::index_sold(&env, sender, basket_id, summary.net_to_user);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_user_indexes(env: Env, owner: Address) -> Vec<Option<Position>> {
        bump_instance(&env);

        let mut positions = Vec::new(&env);
        for basket_id in 0..get_basket_count(&env) {
            positions.push_back(get_position(&env, &owner, basket_id));
        }

        positions
    }

    fn query_position(env: Env, owner: Address, basket_id: u32) -> Option<Position> {
        bump_instance(&env);
        get_position(&env, &owner, basket_id)
    }

    fn query_basket(env: Env, basket_id: u32) -> Result<BasketDefinition, ErrorCode> {
        bump_instance(&env);
        registry::load_basket(&env, basket_id)
    }

    fn query_basket_count(env: Env) -> u32 {
        bump_instance(&env);
        get_basket_count(&env)
    }

    fn query_fee_percentage(env: Env) -> u32 {
        bump_instance(&env);
        get_fee_percentage(&env)
    }

    fn query_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }
}

#[contractimpl]
impl MemeIndex {
    /// Swaps the contract code. Storage, including the fee, is kept as is.
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_config(&env).admin;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
