use basket::{
    constants::{BASKET_SIZE, MAX_BASKETS, PERCENTAGE_PRECISION},
    error::{BasketResult, ErrorCode},
    math::{percentage::sum_weights, safe_math::SafeMath},
    validate,
};
use soroban_sdk::{log, Address, Env, Vec};

use crate::storage::{get_basket, get_basket_count, save_basket, save_basket_count, BasketDefinition};

pub fn validate_basket_spec(env: &Env, assets: &Vec<Address>, weights: &Vec<u32>) -> BasketResult {
    validate!(
        env,
        assets.len() == BASKET_SIZE && weights.len() == BASKET_SIZE,
        ErrorCode::InvalidBasketSpec,
        "Meme Index: Create Index: expected {} assets and weights, got {} and {}",
        BASKET_SIZE,
        assets.len(),
        weights.len()
    )?;

    // an overflowing sum can never equal 100
    let total_weight = sum_weights(env, weights).map_err(|_| ErrorCode::InvalidBasketSpec)?;

    validate!(
        env,
        total_weight == PERCENTAGE_PRECISION,
        ErrorCode::InvalidBasketSpec,
        "Meme Index: Create Index: total percentage must be 100, got {}",
        total_weight
    )
}

pub fn validate_fee_percentage(env: &Env, fee_percentage: u32) -> BasketResult {
    validate!(
        env,
        fee_percentage <= PERCENTAGE_PRECISION,
        ErrorCode::InvalidFee,
        "Meme Index: Update Fee: fee percentage must be less than or equal to 100, got {}",
        fee_percentage
    )
}

/// Stores a new immutable basket under the next free id and returns that id.
pub fn create_basket(env: &Env, assets: Vec<Address>, weights: Vec<u32>) -> BasketResult<u32> {
    validate_basket_spec(env, &assets, &weights)?;

    let basket_id = get_basket_count(env);
    validate!(
        env,
        basket_id < MAX_BASKETS,
        ErrorCode::BasketLimitReached,
        "Meme Index: Create Index: all {} basket ids are taken",
        MAX_BASKETS
    )?;

    let next_basket_id = basket_id.safe_add(1, env)?;

    save_basket(env, basket_id, &BasketDefinition { assets, weights });
    save_basket_count(env, next_basket_id);

    Ok(basket_id)
}

pub fn load_basket(env: &Env, basket_id: u32) -> BasketResult<BasketDefinition> {
    get_basket(env, basket_id).ok_or_else(|| {
        log!(env, "Meme Index: basket {} not found", basket_id);
        ErrorCode::BasketNotFound
    })
}
